//! Generation tier.
//!
//! On a total cache miss the resolver asks a generative text backend for
//! a structured explanation of the term. The request pins the response to
//! a JSON schema mirroring [`GeneratedTerm`], so a well-behaved backend
//! can only answer with a parseable payload; anything else is a terminal
//! [`GenerateError`], never a silent coercion.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::{
    config::GenerationConfig,
    model::{GeneratedTerm, CATEGORIES},
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("generation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation backend rejected request: {0}")]
    Status(StatusCode),

    #[error("generation response carried no candidate text")]
    EmptyResponse,

    #[error("malformed generated payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Seam over the generation backend.
#[async_trait]
pub trait TermGenerator: Send + Sync {
    async fn generate(&self, term: &str) -> Result<GeneratedTerm, GenerateError>;
}

pub struct GeminiGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiGenerator {
    pub fn new(config: &GenerationConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client misconfigured!");

        Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[async_trait]
impl TermGenerator for GeminiGenerator {
    async fn generate(&self, term: &str) -> Result<GeneratedTerm, GenerateError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&build_payload(term))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerateError::Status(response.status()));
        }

        let text = extract_candidate_text(response.json().await?)?;

        Ok(serde_json::from_str(&text)?)
    }
}

fn extract_candidate_text(response: GenerateResponse) -> Result<String, GenerateError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
        .ok_or(GenerateError::EmptyResponse)
}

fn build_payload(term: &str) -> serde_json::Value {
    json!({
        "contents": [{
            "parts": [{ "text": build_instruction(term) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

fn build_instruction(term: &str) -> String {
    format!(
        "Explique o termo técnico \"{term}\" para iniciantes brasileiros na área de tecnologia. \
         Responda em português do Brasil, com tom acolhedor e direto, sem jargão desnecessário. \
         Preencha: term (o termo como é usado no dia a dia), fullTerm (forma completa caso seja \
         sigla, senão repita o termo), category (exatamente um de: {categories}), definition \
         (2 a 3 frases simples), phonetic (pronúncia aproximada escrita em português), \
         translation (tradução literal para o português), slang (uso informal, apenas se \
         existir), examples (até 3 pares title/description com situações reais de trabalho), \
         analogies (até 2 pares title/description com analogias do cotidiano), practicalUsage \
         (um par title/content sobre quando o termo aparece no trabalho) e relatedTerms \
         (até 6 palavras-chave relacionadas).",
        categories = CATEGORIES.join(", "),
    )
}

fn response_schema() -> serde_json::Value {
    let entry = json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" }
        },
        "required": ["title", "description"]
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "term": { "type": "STRING" },
            "fullTerm": { "type": "STRING" },
            "category": { "type": "STRING", "enum": CATEGORIES },
            "definition": { "type": "STRING" },
            "phonetic": { "type": "STRING" },
            "translation": { "type": "STRING" },
            "slang": { "type": "STRING" },
            "examples": { "type": "ARRAY", "items": entry.clone() },
            "analogies": { "type": "ARRAY", "items": entry },
            "practicalUsage": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING" },
                    "content": { "type": "STRING" }
                },
                "required": ["title", "content"]
            },
            "relatedTerms": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["term", "category", "definition", "phonetic", "translation"]
    })
}
