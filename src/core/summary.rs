//! Daily review generated by an external LLM service.
//!
//! The service is only a collaborator: it receives a finished day's log
//! and returns prose. Any failure becomes a fixed message and never
//! reaches the store.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::DayLog;
use crate::ui::messages::warning;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

pub const NO_DATA_MESSAGE: &str =
    "Nothing recorded for this day yet, so there is nothing to review. Log a few hours first!";
pub const EMPTY_RESPONSE_MESSAGE: &str = "Could not generate a review, please try again later.";
pub const UNAVAILABLE_MESSAGE: &str =
    "The AI review service is unavailable right now. Check your network connection or API key.";

/// Text-completion backend.
pub trait Summarizer {
    fn complete(&self, prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Generated(String),
    /// The log holds no recorded hour: the service was not called.
    NoData,
    /// The service answered with blank text.
    EmptyResponse,
    /// The service could not be reached or answered with an error.
    Unavailable,
}

impl SummaryOutcome {
    pub fn message(&self) -> &str {
        match self {
            SummaryOutcome::Generated(text) => text,
            SummaryOutcome::NoData => NO_DATA_MESSAGE,
            SummaryOutcome::EmptyResponse => EMPTY_RESPONSE_MESSAGE,
            SummaryOutcome::Unavailable => UNAVAILABLE_MESSAGE,
        }
    }
}

/// One line per recorded hour, `None` when nothing was recorded.
pub fn log_digest(log: &DayLog) -> Option<String> {
    let lines: Vec<String> = log
        .entries()
        .filter(|(_, s)| s.is_recorded())
        .map(|(h, s)| format!("- {}:00 to {}:00 : {}", h, h + 1, s.label()))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

pub fn build_prompt(date: &str, digest: &str) -> String {
    format!(
        "You are a witty, sharp but empathetic productivity assistant.\n\
         This is the user's hourly work status log for {date}:\n\n\
         {digest}\n\n\
         Write a short daily review of this data (under 150 words).\n\n\
         Requirements:\n\
         1. You may tease a little if there was a lot of slacking, or encourage if there was a lot of focus.\n\
         2. Point out how the day's time was distributed.\n\
         3. Give one short suggestion for improvement.\n\
         4. Do not use Markdown, return plain text only.\n"
    )
}

/// Ask `summarizer` for a review of `date`.
pub fn daily_analysis(date: &str, log: &DayLog, summarizer: &dyn Summarizer) -> SummaryOutcome {
    let Some(digest) = log_digest(log) else {
        return SummaryOutcome::NoData;
    };

    match summarizer.complete(&build_prompt(date, &digest)) {
        Ok(text) if text.trim().is_empty() => SummaryOutcome::EmptyResponse,
        Ok(text) => SummaryOutcome::Generated(text.trim().to_string()),
        Err(e) => {
            warning(e);
            SummaryOutcome::Unavailable
        }
    }
}

// ---------------------------------------------------------------------
// Gemini REST backend
// ---------------------------------------------------------------------

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

pub struct GeminiSummarizer {
    client: Client,
    endpoint: String,
    model: String,
    api_key_env: String,
}

impl GeminiSummarizer {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.summary_timeout_secs))
            .build()
            .map_err(|e| AppError::Summary(format!("Failed to build http client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: cfg.summary_endpoint.trim_end_matches('/').to_string(),
            model: cfg.summary_model.clone(),
            api_key_env: cfg.summary_api_key_env.clone(),
        })
    }
}

impl Summarizer for GeminiSummarizer {
    fn complete(&self, prompt: &str) -> AppResult<String> {
        let api_key = env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| AppError::Summary(format!("{} is not set", self.api_key_env)))?;

        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .map_err(|e| AppError::Summary(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(AppError::Summary(format!("API error {}: {}", status, text)));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| AppError::Summary(format!("malformed response: {}", e)))?;

        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}
