//! # Glossário
//!
//! Dicionário técnico em português para iniciantes em tecnologia.
//!
//! The core of the system is a read-through cache over three tiers:
//! a hosted table of already-explained terms, a small built-in seed
//! dictionary, and a generative backend that synthesizes a structured
//! explanation on a total miss. Generated records are written back to
//! the hosted table on a detached task.
//!
//! ## Tiers
//!
//! 1. **Persistent store** — hosted REST table keyed by the normalized
//!    slug of the term. Best-effort: any store failure falls through to
//!    the next tier instead of failing the lookup.
//! 2. **Seed dictionary** — process-wide, read-only records for a
//!    handful of everyday terms, keyed by the lower-cased raw text.
//! 3. **Generation** — structured-output JSON request to a generative
//!    text backend. A failure here is terminal; there is no further
//!    fallback.
//!
//! The [`seeder`] module walks a list of terms through the same path
//! sequentially, with a fixed delay between items to respect the
//! generative backend's rate limits.

pub mod config;
pub mod generate;
pub mod model;
pub mod normalize;
pub mod resolver;
pub mod seed_data;
pub mod seeder;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
