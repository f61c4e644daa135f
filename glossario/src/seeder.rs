//! Batch seeding walk.
//!
//! Pushes a list of terms through the resolver one at a time so the
//! store ends up warm. Strictly sequential, with a fixed pause between
//! items to stay under the generation backend's rate limits. Per-item
//! failures are reported and swallowed; the walk always finishes.

use std::time::Duration;

use tokio::time::sleep;

use crate::resolver::Resolver;

/// Pause between items. A throttle for the generation backend, not a
/// performance knob.
pub const SEED_DELAY: Duration = Duration::from_millis(1500);

pub const DEFAULT_TERMS: [&str; 20] = [
    "API",
    "Algoritmo",
    "Backend",
    "Banco de Dados",
    "Bug",
    "Cache",
    "CI/CD",
    "Cloud",
    "Commit",
    "Container",
    "Deploy",
    "DevOps",
    "Endpoint",
    "Framework",
    "Frontend",
    "Git",
    "Refatoração",
    "Repositório",
    "Script",
    "Token",
];

/// Walks `terms` (or the built-in list) through the resolver, reporting
/// progress through `progress`. Seeding only makes sense when there is a
/// store to persist into, so an unconfigured store aborts the whole
/// batch with a single message and zero resolver calls.
pub async fn seed<F>(resolver: &Resolver, mut progress: F, terms: Option<Vec<String>>)
where
    F: FnMut(String),
{
    if !resolver.has_store() {
        progress("Erro: armazenamento não configurado, seeding cancelado.".to_string());
        return;
    }

    let terms = terms
        .unwrap_or_else(|| DEFAULT_TERMS.iter().map(|term| term.to_string()).collect());
    let total = terms.len();

    progress(format!("Iniciando seeding de {total} termos..."));

    for (index, term) in terms.iter().enumerate() {
        let position = index + 1;
        progress(format!("[{position}/{total}] Gerando \"{term}\"..."));

        match resolver.resolve(term).await {
            Ok(resolution) => {
                // Seeding exists to persist, so wait for the write-back
                // instead of racing detached inserts through the walk.
                if let Some(handle) = resolution.write_back {
                    let _ = handle.await;
                }

                progress(format!(
                    "[{position}/{total}] \"{term}\" pronto ({})",
                    resolution.record.id
                ));
            }
            Err(e) => progress(format!("[{position}/{total}] \"{term}\" falhou: {e}")),
        }

        if position < total {
            sleep(SEED_DELAY).await;
        }
    }

    progress("Seeding concluído.".to_string());
}
