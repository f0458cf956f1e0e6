//! Session glue: parse a line, run it against the model, persist changes.

use thiserror::Error;
use tracing::{debug, warn};

use crate::commands::{CommandError, CommandResult};
use crate::config::Config;
use crate::model::{Model, ModelManager};
use crate::parser::{ParseError, parse_command};
use crate::storage::JsonQuickCacheStorage;

/// Anything that can go wrong while handling one line of input.
#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Could not save flashcards: {0:#}")]
    Storage(#[from] anyhow::Error),
}

/// Owns the model and its backing file for the length of a session.
#[derive(Debug)]
pub struct LogicManager {
    config: Config,
    storage: JsonQuickCacheStorage,
    model: ModelManager,
}

impl LogicManager {
    /// Load the collection named by `config`.
    pub fn load(config: Config) -> anyhow::Result<Self> {
        let (storage, cache) = JsonQuickCacheStorage::load(&config.data_file)?;
        Ok(Self {
            config,
            storage,
            model: ModelManager::new(cache),
        })
    }

    /// Handle one line of input. State is left untouched on any error, including a failed save.
    pub fn execute(&mut self, line: &str) -> Result<CommandResult, LogicError> {
        let command = parse_command(line).inspect_err(|err| {
            warn!(error = %err, "rejected input");
        })?;
        debug!(command = command.word(), "executing");
        let snapshot = command.mutates_collection().then(|| self.model.clone());
        let result = command.execute(&mut self.model).inspect_err(|err| {
            warn!(error = %err, command = command.word(), "command failed");
        })?;
        if let Some(snapshot) = snapshot {
            if let Err(err) = self
                .storage
                .save(&self.config.data_file, self.model.quick_cache())
            {
                warn!(error = %err, command = command.word(), "save failed, rolling back");
                self.model = snapshot;
                return Err(LogicError::Storage(err));
            }
        }
        Ok(result)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
