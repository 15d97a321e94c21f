//! Resume parser client — the single point of entry for calls to the
//! external parsing service.
//!
//! ARCHITECTURAL RULE: this service owns no parsing logic. The upstream's
//! JSON reply and status are relayed verbatim, success or not; only a
//! transport failure becomes an error of ours.

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

const PARSE_ENDPOINT: &str = "/api/parse-resume";

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Upstream reply, passed through untouched.
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Clone)]
pub struct ParserClient {
    http: Client,
    base_url: String,
}

impl ParserClient {
    pub fn new(base_url: String) -> Self {
        ParserClient {
            http: Client::new(),
            base_url,
        }
    }

    /// Forwards one uploaded resume to the parsing service.
    pub async fn parse_resume(
        &self,
        file_name: String,
        bytes: Bytes,
    ) -> Result<RelayedResponse, ParserError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), PARSE_ENDPOINT);
        debug!(%url, size = bytes.len(), "forwarding resume to parser service");

        let part = Part::bytes(bytes.to_vec()).file_name(file_name);
        let form = Form::new().part("resume", part);

        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.json::<Value>().await?;

        if !(200..300).contains(&status) {
            warn!(status, "parser service returned an error");
        }

        Ok(RelayedResponse { status, body })
    }
}
