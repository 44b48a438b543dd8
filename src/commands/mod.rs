mod card;
mod config;
mod funnel;
mod group;
mod ls;
mod pull;
mod serve;

pub use card::{cmd_mov, cmd_more, cmd_pin};
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use funnel::{cmd_funnel_list, cmd_funnel_use};
pub use group::{cmd_group_add, cmd_group_move, cmd_group_rename, cmd_group_rm};
pub use ls::cmd_ls;
pub use pull::cmd_pull;
pub use serve::cmd_serve;

use owo_colors::OwoColorize;
use tracing::warn;

use crate::api::ApiClient;
use crate::board::Card;
use crate::config::Config;
use crate::error::Result;
use crate::store::BoardStore;

/// The board store at the default (configured) location.
pub(crate) fn open_store() -> BoardStore {
    BoardStore::default()
}

/// Build the collection API client, or `None` when no endpoint is
/// configured or the configuration is unusable. Config problems are logged
/// and never fatal; the local store is authoritative.
pub(crate) fn api_client() -> Option<ApiClient> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!("ignoring unreadable config: {e}");
            return None;
        }
    };
    match ApiClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            warn!("collection API disabled: {e}");
            None
        }
    }
}

/// Run a best-effort mirror call against the collection API. A failure
/// leaves local state as the source of truth and is surfaced as a warning.
pub(crate) async fn mirror<F>(what: &str, fut: F)
where
    F: std::future::Future<Output = Result<()>>,
{
    if let Err(e) = fut.await {
        warn!("failed to mirror {what} to collection API: {e}");
    }
}

/// Format a card for single-line display
pub(crate) fn format_card_line(card: &Card) -> String {
    let pin = if card.pinned {
        format!("{} ", "*".yellow())
    } else {
        "  ".to_string()
    };

    let statuses: String = card
        .statuses
        .iter()
        .map(|s| format!("[{s}]"))
        .collect::<Vec<_>>()
        .join("");

    let mut line = format!(
        "{pin}{} {} {}",
        format!("{:12}", card.id).dimmed(),
        card.name,
        statuses.cyan()
    );
    line.push_str(&format!(" {}", format!("{}m", card.minutes_ago).dimmed()));
    if let Some(assignee) = &card.assignee {
        line.push_str(&format!(" {} {}", "\u{2022}".dimmed(), assignee.dimmed()));
    }
    line
}
