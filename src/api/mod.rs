//! Collection API wire types and REST client
//!
//! The client mirrors board mutations to the collection service. It stays
//! disabled unless a base URL is configured; when a bearer token is
//! configured it is attached to every request. Failures are returned to the
//! caller; the command layer logs them and keeps the local store as the
//! source of truth.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::board::Funnel;
use crate::config::Config;
use crate::error::{FunnelboardError, Result};
use crate::types::GroupMode;

/// Body of `POST /groups`. Name and funnel id are required by the service;
/// they are optional here so the service can reject incomplete requests
/// with a 400 instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupBody {
    pub name: Option<String>,
    pub funnel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<GroupMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Body of `PATCH /groups/{id}`: rename, reparent, and/or reorder cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funnel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_order: Option<Vec<String>>,
}

/// Body of `PATCH /cards/{id}`: reassign group and/or splice to a position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedGroup {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

pub struct ApiClient {
    http: Client,
    base: String,
    token: Option<SecretString>,
}

impl ApiClient {
    /// Build a client from configuration. Returns `None` when no base URL
    /// is configured; the board then works purely locally.
    pub fn from_config(config: &Config) -> Result<Option<ApiClient>> {
        let Some(raw) = config.api_base_url() else {
            return Ok(None);
        };
        let base = Url::parse(&raw)?;
        let http = Client::builder().timeout(config.api_timeout()).build()?;
        Ok(Some(ApiClient {
            http,
            base: base.as_str().trim_end_matches('/').to_string(),
            token: config.api_token().map(SecretString::from),
        }))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, self.endpoint(path));
        if let Some(token) = &self.token {
            req = req.bearer_auth(token.expose_secret());
        }
        req
    }

    async fn expect_ok(
        &self,
        req: reqwest::RequestBuilder,
        what: &str,
    ) -> Result<reqwest::Response> {
        let res = req.send().await?;
        if !res.status().is_success() {
            return Err(FunnelboardError::Api(format!(
                "{what} returned {}",
                res.status()
            )));
        }
        Ok(res)
    }

    /// Fetch all funnels with nested groups and cards.
    pub async fn get_funnels(&self) -> Result<Vec<Funnel>> {
        let res = self
            .expect_ok(self.request(reqwest::Method::GET, "/funnels"), "GET /funnels")
            .await?;
        Ok(res.json().await?)
    }

    /// Create a group; returns the id the service assigned.
    pub async fn create_group(&self, body: &CreateGroupBody) -> Result<String> {
        let res = self
            .expect_ok(
                self.request(reqwest::Method::POST, "/groups").json(body),
                "POST /groups",
            )
            .await?;
        let created: CreatedGroup = res.json().await?;
        Ok(created.id)
    }

    pub async fn rename_group(&self, id: &str, name: &str) -> Result<()> {
        self.patch_group(
            id,
            &GroupPatch {
                name: Some(name.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn move_group(&self, id: &str, funnel_id: &str) -> Result<()> {
        self.patch_group(
            id,
            &GroupPatch {
                funnel_id: Some(funnel_id.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    /// Replace a group's card order with an explicit id-ordered list.
    pub async fn reorder_cards(&self, group_id: &str, card_ids: &[String]) -> Result<()> {
        self.patch_group(
            group_id,
            &GroupPatch {
                card_order: Some(card_ids.to_vec()),
                ..Default::default()
            },
        )
        .await
    }

    async fn patch_group(&self, id: &str, patch: &GroupPatch) -> Result<()> {
        let path = format!("/groups/{id}");
        self.expect_ok(
            self.request(reqwest::Method::PATCH, &path).json(patch),
            &format!("PATCH {path}"),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_group(&self, id: &str) -> Result<()> {
        let path = format!("/groups/{id}");
        self.expect_ok(
            self.request(reqwest::Method::DELETE, &path),
            &format!("DELETE {path}"),
        )
        .await?;
        Ok(())
    }

    /// Reassign a card to a group and splice it to a position there.
    pub async fn move_card(&self, card_id: &str, group_id: &str, position: usize) -> Result<()> {
        let path = format!("/cards/{card_id}");
        let patch = CardPatch {
            group_id: Some(group_id.to_string()),
            position: Some(position),
        };
        self.expect_ok(
            self.request(reqwest::Method::PATCH, &path).json(&patch),
            &format!("PATCH {path}"),
        )
        .await?;
        Ok(())
    }
}
