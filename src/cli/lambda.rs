//! Lambda runtime loop for the selected handler

use std::future::Future;
use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, info_span, Instrument};

use super::HandlerKind;
use crate::config::{AppConfig, KnowledgeBaseSettings};
use crate::domain::DomainError;
use crate::handler::{HandlerResponse, IngestionTrigger, RetrievalChatHandler};
use crate::infrastructure::knowledge_base::KnowledgeBaseClientFactory;
use crate::infrastructure::logging;

/// Build the handler once and serve invocations until the runtime stops
pub async fn run(kind: HandlerKind) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let sdk_config =
        KnowledgeBaseClientFactory::load_sdk_config(config.aws.region.as_deref()).await;
    info!(handler = kind.name(), "Starting Lambda runtime");

    match kind {
        HandlerKind::IngestionTrigger => {
            let trigger = Arc::new(IngestionTrigger::new(
                KnowledgeBaseClientFactory::create_ingestion(&sdk_config),
            ));

            serve(kind, move |payload, settings| {
                let trigger = Arc::clone(&trigger);
                async move { trigger.handle(&payload, &settings).await }
            })
            .await
        }
        HandlerKind::RetrievalChat => {
            let chat = Arc::new(RetrievalChatHandler::new(
                KnowledgeBaseClientFactory::create_retrieval(&sdk_config),
            ));

            serve(kind, move |payload, settings| {
                let chat = Arc::clone(&chat);
                async move { chat.handle(&payload, &settings).await }
            })
            .await
        }
    }
}

async fn serve<F, Fut>(kind: HandlerKind, handle: F) -> anyhow::Result<()>
where
    F: Fn(Value, KnowledgeBaseSettings) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HandlerResponse, DomainError>> + Send,
{
    let handle = Arc::new(handle);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handle = Arc::clone(&handle);
        let span = info_span!(
            "invocation",
            handler = kind.name(),
            request_id = %event.context.request_id
        );

        async move {
            // Settings are resolved per invocation, never cached across events
            let settings = KnowledgeBaseSettings::load()
                .inspect_err(|e| error!(error = %e, "Invocation aborted"))?;
            let response = (*handle)(event.payload, settings)
                .await
                .inspect_err(|e| error!(error = %e, "Invocation aborted"))?;

            info!(status_code = response.status_code, "Invocation complete");
            Ok::<HandlerResponse, lambda_runtime::Error>(response)
        }
        .instrument(span)
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}
