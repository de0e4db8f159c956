use crate::core::generator::VanityGenerator;
use crate::core::summary::summarize;
use crate::domain::model::{ContactFlowEvent, ContactFlowResponse, VanityRecord};
use crate::domain::ports::{LookupStore, WordOracle};
use crate::utils::error::Result;

/// 來電事件 -> 查快取 -> 產生候選 -> 寫回 store -> 摘要
pub struct VanityService<D: WordOracle, S: LookupStore> {
    generator: VanityGenerator<D>,
    store: S,
}

impl<D: WordOracle, S: LookupStore> VanityService<D, S> {
    pub fn new(dictionary: D, store: S) -> Self {
        Self {
            generator: VanityGenerator::new(dictionary),
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the stored record for `phone_number`, computing and storing it
    /// on a miss. Store failures are logged and never discard the result.
    pub async fn convert(&self, phone_number: &str) -> Result<VanityRecord> {
        match self.store.get(phone_number).await {
            Ok(Some(record)) => {
                tracing::info!("Found stored vanity numbers for {}", phone_number);
                return Ok(record);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Lookup for {} failed, recomputing: {}", phone_number, e);
            }
        }

        let vanity_numbers = self.generator.generate(phone_number)?;
        tracing::debug!("Vanity numbers for {}: {:?}", phone_number, vanity_numbers);

        let record = VanityRecord::new(phone_number, vanity_numbers);

        tracing::info!("Adding {} to the lookup store", phone_number);
        if let Err(e) = self.store.put(&record).await {
            tracing::error!(
                "❌ Failed to store vanity numbers for {}: {}",
                phone_number,
                e
            );
        }

        Ok(record)
    }

    /// Handles a contact-flow invocation. A rejected number is reported in
    /// `VanityPossibilities` rather than as an error.
    pub async fn handle(&self, event: &ContactFlowEvent) -> ContactFlowResponse {
        let phone_number = event.customer_address();

        let vanity_possibilities = match self.convert(phone_number).await {
            Ok(record) => summarize(&record.vanity_numbers),
            Err(e) => {
                tracing::warn!("Could not convert {}: {}", phone_number, e);
                e.user_friendly_message()
            }
        };

        tracing::info!("{} -> {}", phone_number, vanity_possibilities);

        ContactFlowResponse {
            phone_number: phone_number.to_string(),
            vanity_possibilities,
        }
    }
}
