use anyhow::Context;
use clap::Parser;
use vanity_numbers::config::ConfigProvider;
use vanity_numbers::core::dictionary::load_dictionary;
use vanity_numbers::domain::ports::{LookupStore, WordOracle};
use vanity_numbers::utils::error::{ErrorSeverity, VanityError};
use vanity_numbers::utils::{logger, validation::Validate};
use vanity_numbers::{CliConfig, LocalStorage, MemoryStore, TomlConfig, VanityService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if let Some(path) = config.config.clone() {
        let file = TomlConfig::from_file(&path)
            .with_context(|| format!("failed to load config file '{}'", path))?;
        if let Err(e) = file.validate() {
            exit_with(&e);
        }
        config.merge_file(&file);
    }

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting vanity-numbers CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let dictionary = match load_dictionary(config.dictionary_path()) {
        Ok(dictionary) => dictionary,
        Err(e) => exit_with(&e),
    };

    if config.no_store {
        run(&config, VanityService::new(dictionary, MemoryStore::new())).await;
    } else {
        let storage = LocalStorage::new(config.store_location().to_string());
        tracing::info!("📁 Storing results in {}", storage.file_path().display());
        run(&config, VanityService::new(dictionary, storage)).await;
    }

    Ok(())
}

async fn run<D: WordOracle, S: LookupStore>(config: &CliConfig, service: VanityService<D, S>) {
    for phone_number in &config.phone_numbers {
        match service.convert(phone_number).await {
            Ok(record) if record.vanity_numbers.is_empty() => {
                println!("{}: no vanity number found", phone_number);
            }
            Ok(record) => {
                println!(
                    "{}: {}",
                    phone_number,
                    vanity_numbers::summarize(&record.vanity_numbers)
                );
                for candidate in &record.vanity_numbers {
                    tracing::debug!("  {}", candidate);
                }
            }
            Err(e) => {
                tracing::warn!("{} rejected: {}", phone_number, e);
                println!("{}: {}", phone_number, e.user_friendly_message());
            }
        }
    }
}

fn exit_with(e: &VanityError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
