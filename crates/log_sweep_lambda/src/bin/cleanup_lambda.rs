use lambda_runtime::{service_fn, Error, LambdaEvent};
use log_sweep_core::contract::ReconciliationResult;
use log_sweep_lambda::adapters::function_registry::{FunctionPage, FunctionRegistry};
use log_sweep_lambda::adapters::log_registry::{LogGroupPage, LogGroupRegistry};
use log_sweep_lambda::handlers::cleanup::handle_cleanup_event;
use serde_json::Value;

const LISTING_PAGE_SIZE: i32 = 25;

struct AwsFunctionRegistry {
    lambda_client: aws_sdk_lambda::Client,
}

impl FunctionRegistry for AwsFunctionRegistry {
    fn list_functions_page(&self, marker: Option<&str>) -> Result<FunctionPage, String> {
        let client = self.lambda_client.clone();
        let marker = marker.map(str::to_string);

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .list_functions()
                    .max_items(LISTING_PAGE_SIZE)
                    .set_marker(marker)
                    .send()
                    .await
                    .map_err(|error| format!("failed to list functions: {error}"))?;

                let function_names = output
                    .functions()
                    .iter()
                    .filter_map(|function| function.function_name().map(str::to_string))
                    .collect();

                Ok(FunctionPage {
                    function_names,
                    next_marker: output.next_marker().map(str::to_string),
                })
            })
        })
    }
}

struct AwsLogGroupRegistry {
    logs_client: aws_sdk_cloudwatchlogs::Client,
}

impl LogGroupRegistry for AwsLogGroupRegistry {
    fn describe_log_groups_page(
        &self,
        name_prefix: &str,
        token: Option<&str>,
    ) -> Result<LogGroupPage, String> {
        let client = self.logs_client.clone();
        let name_prefix = name_prefix.to_string();
        let token = token.map(str::to_string);

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .describe_log_groups()
                    .log_group_name_prefix(name_prefix)
                    .limit(LISTING_PAGE_SIZE)
                    .set_next_token(token)
                    .send()
                    .await
                    .map_err(|error| format!("failed to describe log groups: {error}"))?;

                let group_names = output
                    .log_groups()
                    .iter()
                    .filter_map(|group| group.log_group_name().map(str::to_string))
                    .collect();

                Ok(LogGroupPage {
                    group_names,
                    next_token: output.next_token().map(str::to_string),
                })
            })
        })
    }

    fn delete_log_group(&self, group_name: &str) -> Result<(), String> {
        let client = self.logs_client.clone();
        let group_name = group_name.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .delete_log_group()
                    .log_group_name(group_name)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to delete log group: {error}"))
            })
        })
    }
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<ReconciliationResult, Error> {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let function_registry = AwsFunctionRegistry {
        lambda_client: aws_sdk_lambda::Client::new(&config),
    };
    let log_group_registry = AwsLogGroupRegistry {
        logs_client: aws_sdk_cloudwatchlogs::Client::new(&config),
    };

    let result = handle_cleanup_event(&event.payload, &function_registry, &log_group_registry)?;
    Ok(result)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
