pub mod api;
pub mod board;
pub mod commands;
pub mod config;
pub mod error;
pub mod paths;
pub mod server;
pub mod store;
pub mod types;
pub mod utils;

pub use api::{ApiClient, CardPatch, CreateGroupBody, GroupPatch};
pub use board::filter::{CardFilter, FilteredGroup, filter_funnel};
pub use board::moves::{Move, apply_move, perform_drag, resolve_drop};
pub use board::seed::seed_board;
pub use board::{Board, Card, Funnel, Group};
pub use config::Config;
pub use error::{FunnelboardError, Result};
pub use server::{AppState, CollectionStore, build_router, run_server};
pub use store::BoardStore;
pub use types::{EntityRef, GroupMode, Status, VALID_STATUSES};
