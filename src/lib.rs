pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

#[cfg(feature = "lambda")]
pub use config::lambda::{DynamoStore, LambdaConfig};

pub use adapters::memory::MemoryStore;
pub use core::{
    dictionary::WordSet, generator::VanityGenerator, service::VanityService, summary::summarize,
};
pub use domain::model::{ContactFlowEvent, ContactFlowResponse, VanityRecord, VanityResult};
pub use utils::error::{Result, VanityError};
