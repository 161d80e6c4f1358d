//! Request and response messages exchanged with the lookup worker

use serde::Deserialize;
use thiserror::Error;

use crate::suggest::{Query, SuggestionResult};

/// Errors that can occur while talking to the lookup services
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// The configured endpoint cannot carry a path segment
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// One dictionary entry for a committed word
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub word: String,
    #[serde(default, alias = "part_of_speech")]
    pub part_of_speech: String,
    #[serde(alias = "definition_text")]
    pub definition_text: String,
}

impl Definition {
    pub fn new(word: &str, part_of_speech: &str, definition_text: &str) -> Self {
        Self {
            word: word.to_string(),
            part_of_speech: part_of_speech.to_string(),
            definition_text: definition_text.to_string(),
        }
    }
}

/// Request messages sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    /// Fetch ranked suggestions for the query text
    Suggest { query: Query, limit: usize },
    /// Fetch definitions for a committed word
    Define { word: String, request_id: u64 },
}

/// Response messages received from the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    Suggestions {
        /// Sequence id of the query this answers
        sequence_id: u64,
        result: Result<SuggestionResult, LookupError>,
    },
    Definitions {
        /// Request id of the definition fetch this answers
        request_id: u64,
        word: String,
        result: Result<Vec<Definition>, LookupError>,
    },
}
