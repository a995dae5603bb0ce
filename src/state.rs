use std::sync::Arc;

use crate::config::Config;
use crate::glossary::{self, GlossaryEntry};
use crate::llm::{factory, LlmClient};

/// Process-wide state shared by all request handlers.
///
/// Everything here is immutable after startup, so handlers can run
/// concurrently without locks.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub glossary: Arc<Vec<GlossaryEntry>>,
    pub llm: Arc<dyn LlmClient>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let glossary = glossary::load(&config.glossary_path);
        let llm = factory::create(&config)?;

        Ok(Self {
            config: Arc::new(config),
            glossary: Arc::new(glossary),
            llm,
        })
    }
}
