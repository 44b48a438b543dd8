use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FunnelboardError;

/// Id prefix marking funnel entities (e.g. `f_marketing`)
pub const FUNNEL_PREFIX: &str = "f_";
/// Id prefix marking group entities (e.g. `g_7f3a2c`)
pub const GROUP_PREFIX: &str = "g_";
/// Id prefix marking card entities (e.g. `card_91be04`)
pub const CARD_PREFIX: &str = "card_";

/// A typed reference to a board entity, classified once from its id prefix.
///
/// Ids keep their kind prefix on the wire and in stored state, but all move
/// resolution matches on this enum rather than re-parsing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    Funnel(String),
    Group(String),
    Card(String),
}

impl EntityRef {
    /// Classify a raw id by its kind prefix.
    ///
    /// Returns `None` for ids with no recognized prefix; such ids never
    /// participate in drag resolution.
    pub fn classify(id: &str) -> Option<EntityRef> {
        if id.starts_with(CARD_PREFIX) {
            Some(EntityRef::Card(id.to_string()))
        } else if id.starts_with(GROUP_PREFIX) {
            Some(EntityRef::Group(id.to_string()))
        } else if id.starts_with(FUNNEL_PREFIX) {
            Some(EntityRef::Funnel(id.to_string()))
        } else {
            None
        }
    }

    /// The underlying id string.
    pub fn id(&self) -> &str {
        match self {
            EntityRef::Funnel(id) | EntityRef::Group(id) | EntityRef::Card(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            EntityRef::Funnel(_) => "funnel",
            EntityRef::Group(_) => "group",
            EntityRef::Card(_) => "card",
        }
    }
}

/// Status labels attached to cards.
///
/// Serialized in the human-readable form the board has always used
/// ("In Progress", "Order Received", ...); parsed case-insensitively with
/// underscores and hyphens accepted in place of spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Open,
    Assigned,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
    Urgent,
    Custom,
    #[serde(rename = "Order Received")]
    OrderReceived,
    #[serde(rename = "Order Intent")]
    OrderIntent,
    #[serde(rename = "Support Request")]
    SupportRequest,
    #[serde(rename = "Campaign Engaged")]
    CampaignEngaged,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Open => write!(f, "Open"),
            Status::Assigned => write!(f, "Assigned"),
            Status::InProgress => write!(f, "In Progress"),
            Status::Closed => write!(f, "Closed"),
            Status::Urgent => write!(f, "Urgent"),
            Status::Custom => write!(f, "Custom"),
            Status::OrderReceived => write!(f, "Order Received"),
            Status::OrderIntent => write!(f, "Order Intent"),
            Status::SupportRequest => write!(f, "Support Request"),
            Status::CampaignEngaged => write!(f, "Campaign Engaged"),
        }
    }
}

impl FromStr for Status {
    type Err = FunnelboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "open" => Ok(Status::Open),
            "assigned" => Ok(Status::Assigned),
            "in progress" | "inprogress" => Ok(Status::InProgress),
            "closed" => Ok(Status::Closed),
            "urgent" => Ok(Status::Urgent),
            "custom" => Ok(Status::Custom),
            "order received" => Ok(Status::OrderReceived),
            "order intent" => Ok(Status::OrderIntent),
            "support request" => Ok(Status::SupportRequest),
            "campaign engaged" => Ok(Status::CampaignEngaged),
            _ => Err(FunnelboardError::InvalidStatus(s.to_string())),
        }
    }
}

pub const VALID_STATUSES: &[&str] = &[
    "open",
    "assigned",
    "in_progress",
    "closed",
    "urgent",
    "custom",
    "order_received",
    "order_intent",
    "support_request",
    "campaign_engaged",
];

/// How customers land in a group: dragged in by hand or matched by rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupMode {
    #[default]
    Manual,
    Auto,
}

impl fmt::Display for GroupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupMode::Manual => write!(f, "manual"),
            GroupMode::Auto => write!(f, "auto"),
        }
    }
}

impl FromStr for GroupMode {
    type Err = FunnelboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(GroupMode::Manual),
            "auto" => Ok(GroupMode::Auto),
            _ => Err(FunnelboardError::InvalidMode(s.to_string())),
        }
    }
}
