use std::sync::Arc;

use clap::Parser;
use glossario::{
    config::Config,
    generate::{GeminiGenerator, TermGenerator},
    resolver::Resolver,
    seeder::{seed, DEFAULT_TERMS},
    store::{RestStore, TermStore},
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{fmt, EnvFilter};

/// Warms the glossary store by walking terms through the resolver,
/// one at a time, with a pause between items.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Terms to seed; the built-in list is used when none are given.
    terms: Vec<String>,
}

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let config = Config::load();

    let store = config
        .store
        .as_ref()
        .map(|store_config| Arc::new(RestStore::new(store_config)) as Arc<dyn TermStore>);

    let generator = config
        .generation
        .as_ref()
        .map(|gen_config| Arc::new(GeminiGenerator::new(gen_config)) as Arc<dyn TermGenerator>);

    let resolver = Resolver::new(store, generator);

    let terms = if args.terms.is_empty() {
        None
    } else {
        Some(args.terms.clone())
    };
    let total = terms.as_ref().map_or(DEFAULT_TERMS.len(), Vec::len);

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    seed(
        &resolver,
        |message| {
            // Per-item completion messages advance the bar; everything
            // else just updates the status line.
            if message.contains("pronto") || message.contains("falhou") {
                pb.println(&message);
                pb.inc(1);
            }
            pb.set_message(message);
        },
        terms,
    )
    .await;

    pb.finish_with_message("Done");
}
