use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, error, info, info_span, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("LOG_FORMAT").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Initialize console logging.
///
/// - **Log Level**: `RUST_LOG` if set, otherwise `LOG_LEVEL` (default: "info") for the
///   application crates with noisy dependencies held at warn
/// - **Format**: `LOG_FORMAT=json` for one JSON object per line, compact otherwise
pub fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "ecole={level},ecole_db={level},ecole_observability={level},tower_http=warn,hyper=warn,sqlx=warn",
            level = log_level
        ))
    });

    let console_layer = match LogFormat::from_env() {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry().with(console_layer).init();
}

/// Runs each request inside a `request` span carrying a fresh request id, so every
/// event logged while handling it (guards included) is tagged with that id.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4();
    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %matched_path,
    );

    async move {
        info!("Incoming request");

        let response = next.run(req).await;
        let status = response.status().as_u16();
        let latency_ms = start.elapsed().as_millis();

        match status {
            400..=499 => warn!(status, latency_ms, "Client error"),
            500..=599 => error!(status, latency_ms, "Server error"),
            _ => info!(status, latency_ms, "Request completed"),
        }

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::parse(""), LogFormat::Compact);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_handler_runs_inside_request_span() {
        use axum::{Router, body::Body, middleware, routing::get};
        use tower::ServiceExt;

        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry());

        let app = Router::new()
            .route(
                "/",
                get(|| async {
                    tracing::Span::current()
                        .metadata()
                        .map(|m| m.name())
                        .unwrap_or("none")
                }),
            )
            .layer(middleware::from_fn(logging_middleware));

        let response = app
            .oneshot(axum::http::Request::new(Body::empty()))
            .await
            .unwrap();

        let body = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        assert_eq!(&body[..], b"request");
    }
}
