use std::sync::Arc;

use glossario::{
    config::Config,
    generate::{GeminiGenerator, TermGenerator},
    resolver::Resolver,
    store::{RestStore, TermStore},
};

pub struct AppState {
    pub config: Config,
    pub resolver: Resolver,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let store = config
            .store
            .as_ref()
            .map(|store_config| Arc::new(RestStore::new(store_config)) as Arc<dyn TermStore>);

        let generator = config
            .generation
            .as_ref()
            .map(|gen_config| Arc::new(GeminiGenerator::new(gen_config)) as Arc<dyn TermGenerator>);

        Arc::new(Self {
            resolver: Resolver::new(store, generator),
            config,
        })
    }
}
