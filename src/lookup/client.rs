//! HTTP client for the suggestion and definition services
//!
//! Both services are plain `GET {endpoint}/{word}` calls returning JSON.

use reqwest::Url;
use serde::Deserialize;

use super::types::{Definition, LookupError};
use crate::config::Config;
use crate::error::LexiError;
use crate::suggest::SuggestionResult;

const USER_AGENT: &str = concat!("lexi/", env!("CARGO_PKG_VERSION"));

/// Suggestion bodies come either tagged with the text they answer, or as a
/// bare list of words
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SuggestionPayload {
    Tagged {
        #[serde(rename = "forText", alias = "for_text")]
        for_text: String,
        suggestions: Vec<String>,
    },
    Bare(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct DictionaryClient {
    http: reqwest::Client,
    suggest_endpoint: Url,
    define_endpoint: Url,
}

impl DictionaryClient {
    pub fn new(suggest_endpoint: &str, define_endpoint: &str) -> Result<Self, LexiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LexiError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            suggest_endpoint: parse_endpoint(suggest_endpoint)?,
            define_endpoint: parse_endpoint(define_endpoint)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LexiError> {
        Self::new(&config.suggest.endpoint, &config.dictionary.endpoint)
    }

    pub fn suggest_url(&self, text: &str, limit: usize) -> Result<Url, LookupError> {
        let mut url = with_segment(&self.suggest_endpoint, text)?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        Ok(url)
    }

    pub fn define_url(&self, word: &str) -> Result<Url, LookupError> {
        with_segment(&self.define_endpoint, word)
    }

    /// Fetch up to `limit` ranked suggestions for `text`
    pub async fn fetch_suggestions(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<SuggestionResult, LookupError> {
        let body = self.get(self.suggest_url(text, limit)?).await?;
        parse_suggestions(&body, text)
    }

    /// Fetch definitions for `word`; an empty list means "not found"
    pub async fn fetch_definitions(&self, word: &str) -> Result<Vec<Definition>, LookupError> {
        let body = self.get(self.define_url(word)?).await?;
        parse_definitions(&body)
    }

    async fn get(&self, url: Url) -> Result<String, LookupError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(LookupError::Api {
                code: status.as_u16(),
                message: body,
            });
        }
        Ok(body)
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, LexiError> {
    match Url::parse(endpoint) {
        Ok(url) if !url.cannot_be_a_base() => Ok(url),
        _ => Err(LexiError::InvalidEndpoint(endpoint.to_string())),
    }
}

fn with_segment(base: &Url, segment: &str) -> Result<Url, LookupError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| LookupError::InvalidEndpoint(base.to_string()))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

pub fn parse_suggestions(body: &str, requested: &str) -> Result<SuggestionResult, LookupError> {
    let payload: SuggestionPayload =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    Ok(match payload {
        SuggestionPayload::Tagged {
            for_text,
            suggestions,
        } => SuggestionResult {
            for_text,
            candidates: suggestions,
        },
        SuggestionPayload::Bare(suggestions) => SuggestionResult {
            for_text: requested.to_string(),
            candidates: suggestions,
        },
    })
}

pub fn parse_definitions(body: &str) -> Result<Vec<Definition>, LookupError> {
    serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
