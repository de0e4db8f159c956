use crate::domain::model::VanityRecord;
use crate::domain::ports::LookupStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 只存在記憶體中的 lookup store，給測試與 `--no-store` 使用
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<String, VanityRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl LookupStore for MemoryStore {
    async fn put(&self, record: &VanityRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.phone_number.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, phone_number: &str) -> Result<Option<VanityRecord>> {
        let records = self.records.read().await;
        Ok(records.get(phone_number).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::VanityResult;

    #[test]
    fn test_put_then_get() {
        let store = MemoryStore::new();
        let record = VanityRecord::new(
            "+12072845367",
            VanityResult::new(vec!["207-284-KENS".to_string()]),
        );

        tokio_test::block_on(store.put(&record)).unwrap();

        let found = tokio_test::block_on(store.get("+12072845367")).unwrap();
        assert_eq!(found, Some(record));
        assert_eq!(tokio_test::block_on(store.len()), 1);
    }

    #[test]
    fn test_put_overwrites_same_key() {
        let store = MemoryStore::new();
        let first = VanityRecord::new("+12072845367", VanityResult::default());
        let second = VanityRecord::new(
            "+12072845367",
            VanityResult::new(vec!["207-284-LENS".to_string()]),
        );

        tokio_test::block_on(store.put(&first)).unwrap();
        tokio_test::block_on(store.put(&second)).unwrap();

        let found = tokio_test::block_on(store.get("+12072845367")).unwrap().unwrap();
        assert_eq!(found.vanity_numbers.len(), 1);
        assert_eq!(tokio_test::block_on(store.len()), 1);
    }

    #[test]
    fn test_missing_key() {
        let store = MemoryStore::new();
        assert!(tokio_test::block_on(store.get("+19999999999")).unwrap().is_none());
    }
}
