use crate::domain::model::VanityRecord;
use crate::domain::ports::LookupStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const STORE_FILE: &str = "vanity_numbers.json";

type Records = BTreeMap<String, VanityRecord>;

/// 以單一 JSON 檔保存的 lookup store
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
    // 同一個 process 內的寫入要排隊，避免讀改寫互相覆蓋
    write_lock: Arc<Mutex<()>>,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self {
            base_path,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn file_path(&self) -> PathBuf {
        Path::new(&self.base_path).join(STORE_FILE)
    }

    async fn load(&self) -> Result<Records> {
        match tokio::fs::read(self.file_path()).await {
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Records::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl LookupStore for LocalStorage {
    async fn put(&self, record: &VanityRecord) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        records.insert(record.phone_number.clone(), record.clone());

        let full_path = self.file_path();
        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // 先寫暫存檔再 rename，讀取端只會看到完整的舊檔或新檔
        let data = serde_json::to_vec_pretty(&records)?;
        let tmp_path = full_path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, data).await?;
        tokio::fs::rename(&tmp_path, &full_path).await?;
        tracing::debug!("Wrote {} records to {}", records.len(), full_path.display());
        Ok(())
    }

    async fn get(&self, phone_number: &str) -> Result<Option<VanityRecord>> {
        let mut records = self.load().await?;
        Ok(records.remove(phone_number))
    }
}
