use chrono::{DateTime, SecondsFormat, Utc};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::error::{ThinkResult, ThinkToolError};

/// Message returned by list and summarize when nothing has been recorded
pub const NO_THOUGHTS_MESSAGE: &str = "No thoughts have been recorded yet.";

/// A single recorded thought with its creation timestamp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThoughtEntry {
    timestamp: DateTime<Utc>,
    #[serde(rename = "thought")]
    text: String,
}

impl ThoughtEntry {
    /// Create an entry stamped with the current time
    pub fn new(text: String) -> Self {
        Self {
            timestamp: Utc::now(),
            text,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// RFC3339 rendering used in transcripts, second precision
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Length of the text in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Summary statistics over the current session log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtStats {
    /// Number of recorded thoughts
    pub total_thoughts: usize,
    /// Mean thought length, rounded to two decimals
    pub average_length: f64,
    /// 1-based index of the first longest thought
    pub longest_thought_index: usize,
    /// Length of the longest thought
    pub longest_thought_length: usize,
}

/// Parameters for the think tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ThinkParams {
    /// A thought to think about. This can be structured reasoning, step-by-step analysis, policy verification, or any other mental process that helps with problem-solving.
    pub thought: String,
}

impl ThinkParams {
    /// Validate a raw argument map as handed over by a dispatcher
    pub fn from_arguments(arguments: &Map<String, Value>) -> ThinkResult<Self> {
        match arguments.get("thought") {
            Some(Value::String(thought)) => Ok(Self {
                thought: thought.clone(),
            }),
            Some(other) => Err(ThinkToolError::InvalidArgument {
                field: "thought".to_string(),
                reason: format!("thought must be a string, got {}", json_type_name(other)),
            }),
            None => Err(ThinkToolError::InvalidArgument {
                field: "thought".to_string(),
                reason: "thought is required".to_string(),
            }),
        }
    }
}

/// Raw argument map of the think tool, validated into [`ThinkParams`] by the handler.
///
/// Advertises the same input schema as `ThinkParams` so clients still see `thought`
/// as a required string.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ThinkArguments(pub Map<String, Value>);

impl ThinkArguments {
    pub fn validate(&self) -> ThinkResult<ThinkParams> {
        ThinkParams::from_arguments(&self.0)
    }
}

impl JsonSchema for ThinkArguments {
    fn schema_name() -> Cow<'static, str> {
        ThinkParams::schema_name()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        ThinkParams::json_schema(generator)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
