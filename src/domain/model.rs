use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 最多保留的 vanity 候選數
pub const MAX_CANDIDATES: usize = 5;

/// 一次轉換的有序結果，最多 [`MAX_CANDIDATES`] 筆，可以是空的
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VanityResult(Vec<String>);

impl VanityResult {
    pub fn new(mut candidates: Vec<String>) -> Self {
        candidates.truncate(MAX_CANDIDATES);
        Self(candidates)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a VanityResult {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 存進 lookup store 的快照，以原始電話號碼為 key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VanityRecord {
    pub phone_number: String,
    pub vanity_numbers: VanityResult,
    pub created_at: DateTime<Utc>,
}

impl VanityRecord {
    pub fn new(phone_number: impl Into<String>, vanity_numbers: VanityResult) -> Self {
        Self {
            phone_number: phone_number.into(),
            vanity_numbers,
            created_at: Utc::now(),
        }
    }
}

/// Amazon Connect contact flow 呼叫 Lambda 時的事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactFlowEvent {
    #[serde(default)]
    pub name: Option<String>,
    pub details: ContactFlowDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactFlowDetails {
    #[serde(default)]
    pub parameters: HashMap<String, String>,
    pub contact_data: ContactData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactData {
    #[serde(default)]
    pub contact_id: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    pub customer_endpoint: Endpoint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Endpoint {
    #[serde(rename = "Type", default)]
    pub endpoint_type: Option<String>,
    pub address: String,
}

impl ContactFlowEvent {
    /// 來電者號碼 (`Details.ContactData.CustomerEndpoint.Address`)
    pub fn customer_address(&self) -> &str {
        &self.details.contact_data.customer_endpoint.address
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactFlowResponse {
    pub phone_number: String,
    pub vanity_possibilities: String,
}
