use crate::config::ThinkToolConfig;
use crate::error::{ThinkResult, ThinkToolError};
use crate::models::{ThinkArguments, NO_THOUGHTS_MESSAGE};
use crate::thought_log::ThoughtLog;
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{CallToolResult, Content, ErrorData, ServerCapabilities, ServerInfo},
    ServerHandler,
};
use rmcp_macros::{tool, tool_handler, tool_router};
use std::{future::Future, sync::Arc};

/// The think-tool MCP service
#[derive(Clone)]
pub struct ThinkToolService {
    tool_router: ToolRouter<Self>,
    thought_log: Arc<ThoughtLog>,
    config: ThinkToolConfig,
}

impl ThinkToolService {
    /// Create a service around an existing session log
    pub fn new(config: ThinkToolConfig, thought_log: Arc<ThoughtLog>) -> Self {
        tracing::info!(
            "Initializing {} service v{}",
            config.server.name,
            config.server.version
        );

        Self {
            tool_router: Self::tool_router(),
            thought_log,
            config,
        }
    }

    /// Create a service with a fresh, empty session log
    pub fn with_empty_log(config: ThinkToolConfig) -> Self {
        Self::new(config, Arc::new(ThoughtLog::new()))
    }

    /// Get reference to the session log
    pub fn thought_log(&self) -> &ThoughtLog {
        &self.thought_log
    }

    /// Get configuration
    pub fn config(&self) -> &ThinkToolConfig {
        &self.config
    }

    /// Render the statistics payload, or the empty-log message
    pub fn stats_text(&self) -> ThinkResult<String> {
        match self.thought_log.summarize() {
            Some(stats) => serde_json::to_string_pretty(&stats).map_err(|e| {
                ThinkToolError::Internal(format!("error creating stats JSON: {}", e))
            }),
            None => Ok(NO_THOUGHTS_MESSAGE.to_string()),
        }
    }
}

#[tool_router]
impl ThinkToolService {
    #[tool(description = "Use this tool to think about something. It will not obtain new information or change anything, but just append the thought to the log. Use it when complex reasoning or cache memory is needed.")]
    pub async fn think(
        &self,
        params: Parameters<ThinkArguments>,
    ) -> std::result::Result<CallToolResult, ErrorData> {
        let params = match params.0.validate() {
            Ok(params) => params,
            Err(e) => {
                tracing::error!("Think error: {}", e);
                return Err(ErrorData::from(e));
            }
        };

        let message = self.thought_log.record(&params.thought);
        tracing::info!("Recorded thought ({} chars)", params.thought.chars().count());
        Ok(CallToolResult::success(vec![Content::text(message)]))
    }

    #[tool(description = "Retrieve all thoughts recorded in the current session. This tool helps review the thinking process that has occurred so far.")]
    pub async fn get_thoughts(&self) -> std::result::Result<CallToolResult, ErrorData> {
        let transcript = self
            .thought_log
            .list()
            .unwrap_or_else(|| NO_THOUGHTS_MESSAGE.to_string());
        tracing::info!("Listing {} thoughts", self.thought_log.len());
        Ok(CallToolResult::success(vec![Content::text(transcript)]))
    }

    #[tool(description = "Clear all recorded thoughts from the current session. Use this to start fresh if the thinking process needs to be reset.")]
    pub async fn clear_thoughts(&self) -> std::result::Result<CallToolResult, ErrorData> {
        let count = self.thought_log.clear();
        tracing::info!("Cleared {} thoughts", count);
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Cleared {} recorded thoughts.",
            count
        ))]))
    }

    #[tool(description = "Get statistics about the thoughts recorded in the current session.")]
    pub async fn get_thought_stats(&self) -> std::result::Result<CallToolResult, ErrorData> {
        match self.stats_text() {
            Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
            Err(e) => {
                tracing::error!("Stats error: {}", e);
                Err(ErrorData::from(e))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for ThinkToolService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: rmcp::model::ProtocolVersion::V_2024_11_05,
            server_info: rmcp::model::Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
            },
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            instructions: Some(
                "Think Tool MCP Server: record, review, clear and summarize reasoning thoughts for the current session".into(),
            ),
        }
    }
}
