//! In-memory fakes for the store and generator seams.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    generate::{GenerateError, TermGenerator},
    model::{Category, GeneratedTerm, PracticalUsage, TermEntry, TermRecord, TermSummary},
    store::{StoreError, TermStore},
};

pub fn sample_record(id: &str, term: &str) -> TermRecord {
    TermRecord {
        id: id.to_string(),
        term: term.to_string(),
        full_term: term.to_string(),
        category: Category::Geral,
        definition: format!("Definição armazenada de {term}."),
        phonetic: String::new(),
        translation: String::new(),
        slang: None,
        examples: Vec::new(),
        analogies: Vec::new(),
        practical_usage: PracticalUsage::default(),
        related_terms: Vec::new(),
    }
}

pub fn sample_generated(term: &str) -> GeneratedTerm {
    GeneratedTerm {
        term: term.to_string(),
        full_term: None,
        category: Category::Geral,
        definition: format!("Definição gerada de {term}."),
        phonetic: "fo-né-ti-ca".to_string(),
        translation: "tradução".to_string(),
        slang: None,
        examples: vec![TermEntry {
            title: "Exemplo".to_string(),
            description: "Uma situação real.".to_string(),
        }],
        analogies: Vec::new(),
        practical_usage: None,
        related_terms: Vec::new(),
    }
}

#[derive(Default)]
pub struct FakeStore {
    pub records: Mutex<HashMap<String, TermRecord>>,
    pub fetches: AtomicUsize,
    pub inserts: AtomicUsize,
    pub fail_fetch: bool,
    pub fail_insert: bool,
}

impl FakeStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(record: TermRecord) -> Self {
        let store = Self::default();
        store
            .records
            .lock()
            .unwrap()
            .insert(record.id.clone(), record);
        store
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TermStore for FakeStore {
    async fn fetch(&self, id: &str) -> Result<Option<TermRecord>, StoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if self.fail_fetch {
            return Err(StoreError::Status(StatusCode::INTERNAL_SERVER_ERROR));
        }

        Ok(self.records.lock().unwrap().get(id).cloned())
    }

    async fn insert(&self, record: &TermRecord) -> Result<(), StoreError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);

        if self.fail_insert {
            return Err(StoreError::Status(StatusCode::CONFLICT));
        }

        self.records
            .lock()
            .unwrap()
            .insert(record.id.clone(), record.clone());

        Ok(())
    }

    async fn list(&self) -> Result<Vec<TermSummary>, StoreError> {
        let mut rows: Vec<TermSummary> = self
            .records
            .lock()
            .unwrap()
            .values()
            .map(|record| TermSummary {
                id: record.id.clone(),
                term: record.term.clone(),
                category: record.category,
                definition: record.definition.clone(),
            })
            .collect();

        rows.sort_by(|a, b| a.term.cmp(&b.term));

        Ok(rows)
    }
}

#[derive(Default)]
pub struct FakeGenerator {
    pub calls: AtomicUsize,
    /// Terms whose generation should fail, for per-item isolation tests.
    pub fail_for: Vec<String>,
    pub fail_always: bool,
}

impl FakeGenerator {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_always: true,
            ..Self::default()
        }
    }

    pub fn failing_for(term: &str) -> Self {
        Self {
            fail_for: vec![term.to_string()],
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TermGenerator for FakeGenerator {
    async fn generate(&self, term: &str) -> Result<GeneratedTerm, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_always || self.fail_for.iter().any(|t| t == term) {
            return Err(GenerateError::EmptyResponse);
        }

        Ok(sample_generated(term))
    }
}
