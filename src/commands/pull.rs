use owo_colors::OwoColorize;

use crate::board::Board;
use crate::commands::{api_client, open_store};
use crate::error::{FunnelboardError, Result};

/// Replace the local board with the collection API's tree.
///
/// This is the explicit "service wins" half of the reconciliation policy;
/// every other command treats the local store as authoritative.
pub async fn cmd_pull() -> Result<()> {
    let Some(api) = api_client() else {
        return Err(FunnelboardError::Config(
            "no collection API configured; set api.base_url first".to_string(),
        ));
    };

    let funnels = api.get_funnels().await?;
    if funnels.is_empty() {
        return Err(FunnelboardError::Api(
            "collection API returned no funnels".to_string(),
        ));
    }

    let store = open_store();
    let previous_active = store.load().active_funnel_id;
    let active_funnel_id = if funnels.iter().any(|f| f.id == previous_active) {
        previous_active
    } else {
        funnels[0].id.clone()
    };

    let board = Board {
        funnels,
        active_funnel_id,
    };
    store.save(&board)?;

    let cards: usize = board.funnels.iter().map(|f| f.card_count()).sum();
    println!(
        "Pulled {} funnels ({} cards); active funnel is {}",
        board.funnels.len(),
        cards,
        board.active_funnel_id.bold()
    );
    Ok(())
}
