//! Hosted-table client.
//!
//! The persistent tier is a single PostgREST-style table of glossary
//! records keyed by slug. Three operations exist: point lookup by id,
//! insert of a new row, and the ordered projection backing the listing
//! view. Rows carry the full record as a JSON `content` column next to
//! the flat columns used by the projection.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    config::StoreConfig,
    model::{Category, TermRecord, TermSummary},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store rejected request: {0}")]
    Status(StatusCode),
}

/// Seam over the persistent tier so the resolver can be exercised
/// without a live table behind it.
#[async_trait]
pub trait TermStore: Send + Sync {
    async fn fetch(&self, id: &str) -> Result<Option<TermRecord>, StoreError>;

    async fn insert(&self, record: &TermRecord) -> Result<(), StoreError>;

    async fn list(&self) -> Result<Vec<TermSummary>, StoreError>;
}

pub struct RestStore {
    client: Client,
    url: String,
    key: String,
}

#[derive(Serialize)]
struct TermRow<'a> {
    id: &'a str,
    term: &'a str,
    category: Category,
    definition: &'a str,
    content: &'a TermRecord,
}

#[derive(Deserialize)]
struct ContentRow {
    content: TermRecord,
}

impl RestStore {
    pub fn new(config: &StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("HTTP client misconfigured!");

        Self {
            client,
            url: config.url.clone(),
            key: config.key.clone(),
        }
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header("apikey", &self.key).bearer_auth(&self.key)
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/termos", self.url)
    }
}

#[async_trait]
impl TermStore for RestStore {
    async fn fetch(&self, id: &str) -> Result<Option<TermRecord>, StoreError> {
        let response = self
            .request(self.client.get(self.table_url()))
            .query(&[
                ("id", format!("eq.{id}").as_str()),
                ("select", "content"),
                ("limit", "1"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }

        let rows: Vec<ContentRow> = response.json().await?;

        Ok(rows.into_iter().next().map(|row| row.content))
    }

    async fn insert(&self, record: &TermRecord) -> Result<(), StoreError> {
        let row = TermRow {
            id: &record.id,
            term: &record.term,
            category: record.category,
            definition: &record.definition,
            content: record,
        };

        let response = self
            .request(self.client.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(&row)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<TermSummary>, StoreError> {
        let response = self
            .request(self.client.get(self.table_url()))
            .query(&[
                ("select", "id,term,category,definition"),
                ("order", "term.asc"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
