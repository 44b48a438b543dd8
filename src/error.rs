use thiserror::Error;

#[derive(Error, Debug)]
pub enum FunnelboardError {
    #[error("funnel '{0}' not found")]
    FunnelNotFound(String),

    #[error("group '{0}' not found in the active funnel")]
    GroupNotFound(String),

    #[error("card '{0}' not found in the active funnel")]
    CardNotFound(String),

    #[error("unrecognized entity id '{0}' (expected f_, g_ or card_ prefix)")]
    UnknownEntity(String),

    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid group mode '{0}' (expected 'manual' or 'auto')")]
    InvalidMode(String),

    #[error("group name cannot be empty")]
    EmptyGroupName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FunnelboardError>;
