use crate::domain::model::VanityRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// 判斷小寫字母序列是否為字典中的單字
pub trait WordOracle: Send + Sync {
    fn is_word(&self, candidate: &str) -> bool;
}

impl WordOracle for HashSet<String> {
    fn is_word(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

impl<T: WordOracle + ?Sized> WordOracle for &T {
    fn is_word(&self, candidate: &str) -> bool {
        (**self).is_word(candidate)
    }
}

/// 以電話號碼為 key 的持久化儲存。寫入是 best-effort，失敗由呼叫端處理。
#[async_trait]
pub trait LookupStore: Send + Sync {
    async fn put(&self, record: &VanityRecord) -> Result<()>;
    async fn get(&self, phone_number: &str) -> Result<Option<VanityRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    /// `None` 代表使用內建字典
    fn dictionary_path(&self) -> Option<&str>;
    /// 本機目錄或 DynamoDB 表名
    fn store_location(&self) -> &str;
}
