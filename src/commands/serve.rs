use tracing_subscriber::EnvFilter;

use crate::commands::open_store;
use crate::error::Result;
use crate::server::{CollectionStore, run_server};

/// Run the collection API service.
///
/// By default the service starts from its own demo seed; `--from-local`
/// serves the locally persisted board instead.
pub async fn cmd_serve(host: &str, port: u16, from_local: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = if from_local {
        CollectionStore::from_board(&open_store().load())
    } else {
        CollectionStore::seeded()
    };

    run_server(host, port, store).await
}
