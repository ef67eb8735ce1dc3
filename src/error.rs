use thiserror::Error;

/// Errors that can occur in the think-tool service
#[derive(Debug, Error)]
pub enum ThinkToolError {
    #[error("Invalid argument: {field} - {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Unsupported transport: {transport}")]
    UnsupportedTransport { transport: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convert ThinkToolError to MCP-compatible ErrorData
impl From<ThinkToolError> for rmcp::model::ErrorData {
    fn from(err: ThinkToolError) -> Self {
        match err {
            ThinkToolError::InvalidArgument { .. } => {
                rmcp::model::ErrorData::invalid_params(err.to_string(), None)
            }
            _ => rmcp::model::ErrorData::internal_error(err.to_string(), None),
        }
    }
}

pub type ThinkResult<T> = std::result::Result<T, ThinkToolError>;
