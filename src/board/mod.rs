//! Board model and mutations
//!
//! The board is a three-level tree: funnels (tabs) hold ordered groups
//! (columns), groups hold ordered cards. All mutations are synchronous
//! transformations on this tree; persistence is layered on top by
//! [`crate::store`].

pub mod filter;
pub mod moves;
pub mod seed;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{FunnelboardError, Result};
use crate::types::{GROUP_PREFIX, GroupMode, Status};
use crate::utils::make_id;

/// Column colors assigned to newly created groups.
pub const GROUP_PALETTE: &[&str] = &[
    "#5b9cf3", "#f59f00", "#22c55e", "#94a3b8", "#6366f1", "#eab308", "#0ea5e9", "#10b981",
];

/// Number of cards shown per column before "load more", and the step it
/// grows by.
pub const VISIBLE_STEP: usize = 3;

fn default_visible_count() -> usize {
    VISIBLE_STEP
}

/// A customer record displayed and dragged within groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub minutes_ago: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Status labels; duplicates are possible and not deduplicated.
    #[serde(default)]
    pub statuses: Vec<Status>,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A column/stage within a funnel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub mode: GroupMode,
    pub color: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    /// Pagination cursor: how many cards the board view shows before
    /// offering "load more".
    #[serde(default = "default_visible_count")]
    pub visible_count: usize,
}

impl Group {
    /// Index of a card within this group, by id.
    pub fn card_index(&self, card_id: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }
}

/// A top-level tab grouping a pipeline of stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Funnel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl Funnel {
    /// Index of a group within this funnel, by id.
    pub fn group_index(&self, group_id: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.id == group_id)
    }

    /// Locate a card anywhere in this funnel as (group index, card index).
    pub fn locate_card(&self, card_id: &str) -> Option<(usize, usize)> {
        self.groups.iter().enumerate().find_map(|(gi, g)| {
            g.card_index(card_id).map(|ci| (gi, ci))
        })
    }

    /// Total number of cards across all groups.
    pub fn card_count(&self) -> usize {
        self.groups.iter().map(|g| g.cards.len()).sum()
    }
}

/// The whole board: all funnels plus the currently active funnel id.
///
/// This is exactly the shape persisted to disk (and the shape the
/// collection API materializes its `funnels` field into).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub funnels: Vec<Funnel>,
    pub active_funnel_id: String,
}

impl Board {
    /// The active funnel, if its id still resolves.
    pub fn active_funnel(&self) -> Option<&Funnel> {
        self.funnels.iter().find(|f| f.id == self.active_funnel_id)
    }

    pub fn active_funnel_mut(&mut self) -> Option<&mut Funnel> {
        let id = self.active_funnel_id.clone();
        self.funnels.iter_mut().find(|f| f.id == id)
    }

    pub fn funnel_index(&self, funnel_id: &str) -> Option<usize> {
        self.funnels.iter().position(|f| f.id == funnel_id)
    }

    /// Switch the active funnel tab.
    pub fn set_active_funnel(&mut self, funnel_id: &str) -> Result<()> {
        if self.funnel_index(funnel_id).is_none() {
            return Err(FunnelboardError::FunnelNotFound(funnel_id.to_string()));
        }
        self.active_funnel_id = funnel_id.to_string();
        Ok(())
    }

    /// Create a group at the end of the active funnel.
    ///
    /// Name is required (trimmed); description is optional; the color is
    /// drawn from the fixed palette. Returns the new group's id.
    pub fn create_group(
        &mut self,
        name: &str,
        description: Option<&str>,
        mode: GroupMode,
    ) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FunnelboardError::EmptyGroupName);
        }
        let color = GROUP_PALETTE[rand::rng().random_range(0..GROUP_PALETTE.len())];
        let group = Group {
            id: make_id(GROUP_PREFIX),
            name: name.to_string(),
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            mode,
            color: color.to_string(),
            cards: Vec::new(),
            visible_count: VISIBLE_STEP,
        };
        let id = group.id.clone();
        let active_id = self.active_funnel_id.clone();
        let funnel = self
            .active_funnel_mut()
            .ok_or(FunnelboardError::FunnelNotFound(active_id))?;
        funnel.groups.push(group);
        Ok(id)
    }

    /// Rename a group in the active funnel.
    pub fn rename_group(&mut self, group_id: &str, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FunnelboardError::EmptyGroupName);
        }
        let group = self.active_group_mut(group_id)?;
        group.name = name.to_string();
        Ok(())
    }

    /// Delete a group from the active funnel, cascading to its cards.
    ///
    /// Returns the number of cards removed with it.
    pub fn delete_group(&mut self, group_id: &str) -> Result<usize> {
        let funnel = self
            .active_funnel_mut()
            .ok_or_else(|| FunnelboardError::GroupNotFound(group_id.to_string()))?;
        let idx = funnel
            .group_index(group_id)
            .ok_or_else(|| FunnelboardError::GroupNotFound(group_id.to_string()))?;
        let removed = funnel.groups.remove(idx);
        Ok(removed.cards.len())
    }

    /// Move a group from the active funnel to the end of another funnel's
    /// group list. Moving to the active funnel itself is a no-op.
    pub fn move_group_to_funnel(&mut self, group_id: &str, target_funnel_id: &str) -> Result<()> {
        if target_funnel_id == self.active_funnel_id {
            return Ok(());
        }
        if self.funnel_index(target_funnel_id).is_none() {
            return Err(FunnelboardError::FunnelNotFound(target_funnel_id.to_string()));
        }
        let funnel = self
            .active_funnel_mut()
            .ok_or_else(|| FunnelboardError::GroupNotFound(group_id.to_string()))?;
        let idx = funnel
            .group_index(group_id)
            .ok_or_else(|| FunnelboardError::GroupNotFound(group_id.to_string()))?;
        let group = funnel.groups.remove(idx);
        let target = self
            .funnels
            .iter_mut()
            .find(|f| f.id == target_funnel_id)
            .expect("target funnel checked above");
        target.groups.push(group);
        Ok(())
    }

    /// Toggle a card's pinned flag. Returns the new pinned state.
    pub fn toggle_pin(&mut self, card_id: &str) -> Result<bool> {
        let funnel = self
            .active_funnel_mut()
            .ok_or_else(|| FunnelboardError::CardNotFound(card_id.to_string()))?;
        for group in &mut funnel.groups {
            if let Some(idx) = group.card_index(card_id) {
                group.cards[idx].pinned = !group.cards[idx].pinned;
                return Ok(group.cards[idx].pinned);
            }
        }
        Err(FunnelboardError::CardNotFound(card_id.to_string()))
    }

    /// Grow a group's visible-card window by one step. Returns the new
    /// visible count.
    pub fn load_more(&mut self, group_id: &str) -> Result<usize> {
        let group = self.active_group_mut(group_id)?;
        group.visible_count += VISIBLE_STEP;
        Ok(group.visible_count)
    }

    fn active_group_mut(&mut self, group_id: &str) -> Result<&mut Group> {
        let funnel = self
            .active_funnel_mut()
            .ok_or_else(|| FunnelboardError::GroupNotFound(group_id.to_string()))?;
        funnel
            .groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or_else(|| FunnelboardError::GroupNotFound(group_id.to_string()))
    }
}
