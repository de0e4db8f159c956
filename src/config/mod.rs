pub mod cli;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod toml_config;

pub use crate::domain::ports::ConfigProvider;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vanity-numbers")]
#[command(about = "Turn phone numbers into memorable vanity numbers")]
pub struct CliConfig {
    /// Phone numbers to convert, e.g. +12072845367
    #[arg(required = true)]
    pub phone_numbers: Vec<String>,

    #[arg(long, help = "Word list, one word per line (defaults to the built-in list)")]
    pub dictionary: Option<String>,

    #[arg(long, help = "Directory holding the vanity number store [default: ./output]")]
    pub output_path: Option<String>,

    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Do not persist results")]
    pub no_store: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先，沒給的才用設定檔的值
    pub fn merge_file(&mut self, file: &TomlConfig) {
        if self.dictionary.is_none() {
            self.dictionary = file.dictionary_path().map(str::to_string);
        }
        if self.output_path.is_none() {
            self.output_path = file.output_path().map(str::to_string);
        }
        self.verbose |= file.verbose();
    }

    pub fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn dictionary_path(&self) -> Option<&str> {
        self.dictionary.as_deref()
    }

    fn store_location(&self) -> &str {
        self.output_path()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.dictionary {
            validate_path("dictionary", path)?;
        }
        validate_path("output_path", self.output_path())?;
        Ok(())
    }
}
