//! HTTP client for an external annotation service.
//!
//! The service wraps a pretrained NLP model behind a small JSON API:
//!
//! ```text
//! POST {base}/annotate
//! { "text": "...", "model": "en_core_web_sm" }
//! ```
//!
//! responds with
//!
//! ```text
//! { "tokens": [ { "text", "pos", "dep", "head" }, ... ],
//!   "ents":   [ { "text", "label" }, ... ] }
//! ```
//!
//! where `head` is the index of the governing token (self-referential on
//! sentence roots). Any transport, status, or payload failure surfaces as an
//! annotation error; the client never retries, since re-running a
//! deterministic parse on unchanged input cannot succeed.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use dkg_core::{AnnotatorConfig, DkgError, Entity, Result};

use crate::{AnnotatedDocument, Annotator, Token};

/// Annotation client backed by a spaCy-style REST service.
pub struct HttpAnnotator {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

// ── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
    model: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    tokens: Vec<WireToken>,
    #[serde(default)]
    ents: Vec<WireEnt>,
}

#[derive(Debug, Deserialize)]
struct WireToken {
    text: String,
    pos: String,
    dep: String,
    head: usize,
}

#[derive(Debug, Deserialize)]
struct WireEnt {
    text: String,
    label: String,
}

// ── Implementation ──────────────────────────────────────────────────────────

impl HttpAnnotator {
    /// Build a client from configuration
    pub fn new(config: &AnnotatorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DkgError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn into_document(response: AnnotateResponse) -> Result<AnnotatedDocument> {
        let token_count = response.tokens.len();

        let tokens = response
            .tokens
            .into_iter()
            .enumerate()
            .map(|(i, w)| {
                if w.head >= token_count {
                    return Err(DkgError::Annotation(format!(
                        "malformed annotation payload: token {i} has head {} but document has {token_count} tokens",
                        w.head
                    )));
                }
                Ok(Token {
                    is_root: w.head == i,
                    text: w.text,
                    pos: w.pos,
                    dep: w.dep,
                    head: w.head,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let entities = response
            .ents
            .into_iter()
            .map(|e| Entity::new(e.text, e.label))
            .collect();

        Ok(AnnotatedDocument::new(tokens, entities))
    }
}

#[async_trait]
impl Annotator for HttpAnnotator {
    async fn annotate(&self, text: &str) -> Result<AnnotatedDocument> {
        let request = AnnotateRequest {
            text,
            model: &self.model,
        };

        tracing::debug!(
            model = %self.model,
            text_len = text.len(),
            "Sending annotation request"
        );

        let response = self
            .client
            .post(format!("{}/annotate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| DkgError::Annotation(format!("annotation service unreachable: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            return Err(DkgError::Annotation(format!(
                "annotation service returned status {status}: {body}"
            )));
        }

        let payload: AnnotateResponse = response.json().await.map_err(|e| {
            DkgError::Annotation(format!("failed to decode annotation payload: {e}"))
        })?;

        let doc = Self::into_document(payload)?;

        tracing::debug!(
            tokens = doc.tokens.len(),
            entities = doc.entities.len(),
            "Annotation received"
        );

        Ok(doc)
    }

    fn name(&self) -> &str {
        "http"
    }
}

// ============================================================================
// Tests
// ============================================================================
