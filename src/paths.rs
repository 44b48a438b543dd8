use std::path::PathBuf;

/// Returns the root funnelboard data directory.
///
/// Resolution order:
/// 1. `FUNNELBOARD_ROOT` environment variable (if set)
/// 2. Platform data directory (e.g. `~/.local/share/funnelboard`)
/// 3. `.funnelboard` under the current working directory
pub fn board_root() -> PathBuf {
    if let Ok(root) = std::env::var("FUNNELBOARD_ROOT") {
        return PathBuf::from(root);
    }
    if let Some(dirs) = directories::ProjectDirs::from("", "", "funnelboard") {
        return dirs.data_dir().to_path_buf();
    }
    PathBuf::from(".funnelboard")
}

/// Returns the path to the persisted board state file.
pub fn state_path() -> PathBuf {
    board_root().join("board.json")
}

/// Returns the path to the configuration file.
pub fn config_path() -> PathBuf {
    board_root().join("config.yaml")
}
