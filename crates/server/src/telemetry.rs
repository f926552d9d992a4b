use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "contact-me";

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Tokio runtime for the OTLP gRPC exporters. Tonic's `connect_lazy()`
/// calls `tokio::spawn`, which needs a runtime context that `dioxus::serve`
/// may not have propagated when our init closure runs.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Apply TLS for `https://` endpoints.
fn with_tls<B: WithTonicConfig>(builder: B, endpoint: &str) -> B {
    if endpoint.starts_with("https://") {
        builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        )
    } else {
        builder
    }
}

/// Set up OTLP trace and log export.
///
/// Dioxus owns the tracing subscriber; this only configures the exporters so
/// request spans (via `OtelTraceLayer`) and `log` records reach a collector.
///
/// Reads config from environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address, e.g. `http://localhost:4317`
///   - `OTEL_SERVICE_NAME`: service name tag (default: `contact-me`)
///   - `DEPLOY_ENV`: deployment environment tag (default: `development`)
///
/// Any failure leaves telemetry off; the app keeps serving.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
        return;
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| TRACER_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    let rt = match OTEL_RUNTIME.get() {
        Some(rt) => rt,
        None => match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(1)
            .build()
        {
            Ok(rt) => OTEL_RUNTIME.get_or_init(|| rt),
            Err(e) => {
                tracing::warn!(error = %e, "failed to start telemetry runtime");
                return;
            }
        },
    };
    let _guard = rt.enter();

    let span_exporter = match with_tls(
        opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(&endpoint),
        &endpoint,
    )
    .build()
    {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::warn!(error = %e, "failed to create OTLP span exporter");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(tracer_provider);

    let log_exporter = match with_tls(
        opentelemetry_otlp::LogExporter::builder()
            .with_tonic()
            .with_endpoint(&endpoint),
        &endpoint,
    )
    .build()
    {
        Ok(exporter) => exporter,
        Err(e) => {
            tracing::warn!(error = %e, "failed to create OTLP log exporter, exporting traces only");
            return;
        }
    };

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    // Bridge the `log` crate to OpenTelemetry. Separate from the `tracing`
    // subscriber owned by Dioxus.
    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => tracing::info!("log bridge skipped, a logger is already set"),
    }

    tracing::info!(%endpoint, "telemetry initialized v{APP_VERSION}");
}

/// Tower layer that creates an OpenTelemetry span for each HTTP request.
///
/// Captures method, path, client platform, request ID, and response status.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

fn header(req: &Request<Body>, name: &str) -> String {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("client.platform", header(&req, "x-client-platform")),
            KeyValue::new("http.request_id", header(&req, "x-request-id")),
        ];

        let span = tracer
            .span_builder(format!("{} {}", method, path))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));

            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}
