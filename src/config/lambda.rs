use crate::domain::model::{VanityRecord, VanityResult};
use crate::domain::ports::{ConfigProvider, LookupStore};
use crate::utils::error::{Result, VanityError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_table_name, validate_url, Validate,
};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::env;

const PHONE_NUMBER_KEY: &str = "phone_number";
const VANITY_NUMBERS_ATTR: &str = "vanityNumbers";
const CREATED_AT_ATTR: &str = "created_at";

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub table_name: String,
    pub region: String,
    pub dictionary_path: Option<String>,
    pub dynamodb_endpoint: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "vanity_numbers".to_string()),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-west-2".to_string()),
            dictionary_path: env::var("DICTIONARY_PATH").ok().filter(|p| !p.is_empty()),
            dynamodb_endpoint: env::var("DYNAMODB_ENDPOINT").ok().filter(|e| !e.is_empty()),
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn dictionary_path(&self) -> Option<&str> {
        self.dictionary_path.as_deref()
    }

    fn store_location(&self) -> &str {
        &self.table_name
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_table_name("table_name", &self.table_name)?;
        validate_aws_region("region", &self.region)?;

        if let Some(path) = &self.dictionary_path {
            validate_path("dictionary_path", path)?;
        }

        // 本機測試時指向 DynamoDB Local
        if let Some(endpoint) = &self.dynamodb_endpoint {
            validate_url("dynamodb_endpoint", endpoint)?;
        }

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    // AWS region format validation
    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(VanityError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub struct DynamoStore {
    client: DynamoClient,
    table: String,
}

impl DynamoStore {
    pub fn new(client: DynamoClient, table: String) -> Self {
        Self { client, table }
    }
}

#[async_trait]
impl LookupStore for DynamoStore {
    async fn put(&self, record: &VanityRecord) -> Result<()> {
        let vanity_numbers = record
            .vanity_numbers
            .iter()
            .map(|v| AttributeValue::S(v.clone()))
            .collect();

        self.client
            .put_item()
            .table_name(&self.table)
            .item(PHONE_NUMBER_KEY, AttributeValue::S(record.phone_number.clone()))
            .item(VANITY_NUMBERS_ATTR, AttributeValue::L(vanity_numbers))
            .item(CREATED_AT_ATTR, AttributeValue::S(record.created_at.to_rfc3339()))
            .send()
            .await
            .map_err(|e| VanityError::StoreError {
                message: format!("Failed to write to DynamoDB: {}", e.into_service_error()),
            })?;

        Ok(())
    }

    async fn get(&self, phone_number: &str) -> Result<Option<VanityRecord>> {
        let resp = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(PHONE_NUMBER_KEY, AttributeValue::S(phone_number.to_string()))
            .send()
            .await
            .map_err(|e| VanityError::StoreError {
                message: format!("Failed to read from DynamoDB: {}", e.into_service_error()),
            })?;

        resp.item()
            .map(|item| record_from_item(phone_number, item))
            .transpose()
    }
}

fn record_from_item(
    phone_number: &str,
    item: &HashMap<String, AttributeValue>,
) -> Result<VanityRecord> {
    let vanity_numbers = item
        .get(VANITY_NUMBERS_ATTR)
        .and_then(|v| v.as_l().ok())
        .ok_or_else(|| VanityError::StoreError {
            message: format!("item for {} has no {} list", phone_number, VANITY_NUMBERS_ATTR),
        })?
        .iter()
        .filter_map(|v| v.as_s().ok().cloned())
        .collect();

    // 舊資料沒有建立時間
    let created_at = item
        .get(CREATED_AT_ATTR)
        .and_then(|v| v.as_s().ok())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);

    Ok(VanityRecord {
        phone_number: phone_number.to_string(),
        vanity_numbers: VanityResult::new(vanity_numbers),
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_item() {
        let mut item = HashMap::new();
        item.insert(
            VANITY_NUMBERS_ATTR.to_string(),
            AttributeValue::L(vec![
                AttributeValue::S("207-BUG-KENS".to_string()),
                AttributeValue::S("207-BUG-LENS".to_string()),
            ]),
        );
        item.insert(
            CREATED_AT_ATTR.to_string(),
            AttributeValue::S("2024-03-01T12:00:00+00:00".to_string()),
        );

        let record = record_from_item("+12072845367", &item).unwrap();
        assert_eq!(record.vanity_numbers.as_slice(), ["207-BUG-KENS", "207-BUG-LENS"]);
        assert_eq!(record.created_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_record_without_list_is_store_error() {
        let item = HashMap::new();
        let err = record_from_item("+12072845367", &item).unwrap_err();
        assert!(matches!(err, VanityError::StoreError { .. }));
    }

    #[test]
    fn test_validate_lambda_config() {
        let config = LambdaConfig {
            table_name: "vanity_numbers".to_string(),
            region: "us-west-2".to_string(),
            dictionary_path: None,
            dynamodb_endpoint: Some("http://localhost:8000".to_string()),
        };
        assert!(config.validate().is_ok());

        let bad_region = LambdaConfig {
            region: "US West".to_string(),
            ..config.clone()
        };
        assert!(bad_region.validate().is_err());
    }
}
