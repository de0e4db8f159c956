use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::Region;
use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use vanity_numbers::config::ConfigProvider;
use vanity_numbers::core::dictionary::{load_dictionary, WordSet};
use vanity_numbers::utils::{logger, validation::Validate};
use vanity_numbers::{
    ContactFlowEvent, ContactFlowResponse, DynamoStore, LambdaConfig, VanityService,
};

type Service = VanityService<WordSet, DynamoStore>;

async fn function_handler(
    service: &Service,
    event: LambdaEvent<ContactFlowEvent>,
) -> Result<ContactFlowResponse, Error> {
    tracing::info!(
        "Contact flow invocation (request {})",
        event.context.request_id
    );

    Ok(service.handle(&event.payload).await)
}

async fn build_service() -> Result<Service, Error> {
    let lambda_config = LambdaConfig::from_env()?;
    lambda_config.validate()?;

    // 冷啟動時載入一次，之後每次呼叫共用
    let dictionary = load_dictionary(lambda_config.dictionary_path())?;

    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let mut builder = aws_sdk_dynamodb::config::Builder::from(&config)
        .region(Region::new(lambda_config.region.clone()));
    if let Some(endpoint) = &lambda_config.dynamodb_endpoint {
        builder = builder.endpoint_url(endpoint);
    }
    let client = DynamoClient::from_conf(builder.build());

    let store = DynamoStore::new(client, lambda_config.table_name.clone());
    Ok(VanityService::new(dictionary, store))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let service = build_service().await?;
    let service = &service;

    run(service_fn(move |event: LambdaEvent<ContactFlowEvent>| async move {
        function_handler(service, event).await
    }))
    .await
}
