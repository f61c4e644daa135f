use serde::{Deserialize, Deserializer, Serialize};

/// Fixed category set. The generation backend is instructed to pick
/// exactly one of these; anything else fails the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Devops,
    Dados,
    Geral,
}

pub const CATEGORIES: [&str; 5] = ["frontend", "backend", "devops", "dados", "geral"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermEntry {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticalUsage {
    pub title: String,
    pub content: String,
}

impl Default for PracticalUsage {
    fn default() -> Self {
        Self {
            title: "Contexto Geral".to_string(),
            content: "Termo comum no dia a dia de equipes de tecnologia.".to_string(),
        }
    }
}

/// A fully explained glossary term. Immutable once persisted: lookups of
/// the same `id` always return the stored record as-is, there is no
/// update or merge path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRecord {
    /// Normalized slug of the term that produced this record, regardless
    /// of which tier produced it.
    pub id: String,
    pub term: String,
    #[serde(default)]
    pub full_term: String,
    pub category: Category,
    pub definition: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slang: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub examples: Vec<TermEntry>,
    #[serde(default, deserialize_with = "or_default")]
    pub analogies: Vec<TermEntry>,
    #[serde(default)]
    pub practical_usage: PracticalUsage,
    /// Up to 6 related keywords.
    #[serde(default, deserialize_with = "or_default")]
    pub related_terms: Vec<String>,
}

/// Row of the listing projection: `select=id,term,category,definition`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSummary {
    pub id: String,
    pub term: String,
    pub category: Category,
    pub definition: String,
}

/// Payload returned by the generation backend: a [`TermRecord`] minus the
/// `id`, which the resolver always derives from the input text. Fields
/// outside the documented defaulting rules are required, so a payload
/// missing `definition` or carrying an unknown category fails the parse
/// instead of being coerced.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTerm {
    pub term: String,
    #[serde(default)]
    pub full_term: Option<String>,
    pub category: Category,
    pub definition: String,
    pub phonetic: String,
    pub translation: String,
    #[serde(default)]
    pub slang: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub examples: Vec<TermEntry>,
    #[serde(default, deserialize_with = "or_default")]
    pub analogies: Vec<TermEntry>,
    #[serde(default, deserialize_with = "or_default")]
    pub practical_usage: Option<PracticalUsage>,
    #[serde(default, deserialize_with = "or_default")]
    pub related_terms: Vec<String>,
}

impl GeneratedTerm {
    /// Applies the post-generation defaulting rules and tags the record
    /// with the slug the resolver derived from the raw input.
    pub fn into_record(self, id: String) -> TermRecord {
        let full_term = self
            .full_term
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.term.clone());

        TermRecord {
            id,
            term: self.term,
            full_term,
            category: self.category,
            definition: self.definition,
            phonetic: self.phonetic,
            translation: self.translation,
            slang: self.slang,
            examples: self.examples,
            analogies: self.analogies,
            practical_usage: self.practical_usage.unwrap_or_default(),
            related_terms: self.related_terms,
        }
    }
}

/// Absent, null, or wrongly-shaped values collapse to the default instead
/// of failing the whole payload.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).unwrap_or_default())
}
