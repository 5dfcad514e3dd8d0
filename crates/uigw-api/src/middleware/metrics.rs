//! # Prometheus Metrics
//!
//! Request metrics for the gateway's HTTP surface. Requests are labelled by
//! the route template they matched, so the label set is bounded by the
//! router itself; anything that reaches the fallback shares the
//! [`UNMATCHED_ROUTE`] label.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{MatchedPath, Request};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use prometheus::core::Collector;
use prometheus::{
    HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};

/// Route label for requests no route matched.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Histogram upper bounds, in seconds.
const LATENCY_BUCKETS: [f64; 9] = [0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.5, 2.0];

/// Cloneable handle over the gateway's metric registry.
#[derive(Clone)]
pub struct GatewayMetrics {
    collectors: Arc<Collectors>,
}

struct Collectors {
    registry: Registry,
    requests: IntCounterVec,
    errors: IntCounterVec,
    latency: HistogramVec,
    in_flight: IntGauge,
}

impl std::fmt::Debug for GatewayMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayMetrics")
            .field("requests", &self.requests())
            .field("errors", &self.errors())
            .field("in_flight", &self.in_flight())
            .finish()
    }
}

// Metric descriptors are static, so construction and registration only fail
// on a programming error.
fn register<C>(registry: &Registry, collector: C) -> C
where
    C: Collector + Clone + 'static,
{
    registry
        .register(Box::new(collector.clone()))
        .expect("metric names are unique");
    collector
}

impl GatewayMetrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let requests = register(
            &registry,
            IntCounterVec::new(
                Opts::new("uigw_http_requests_total", "Requests served"),
                &["method", "route", "status"],
            )
            .expect("valid requests descriptor"),
        );
        let errors = register(
            &registry,
            IntCounterVec::new(
                Opts::new(
                    "uigw_http_errors_total",
                    "Requests answered with a 4xx or 5xx status",
                ),
                &["method", "route", "status"],
            )
            .expect("valid errors descriptor"),
        );
        let latency = register(
            &registry,
            HistogramVec::new(
                HistogramOpts::new(
                    "uigw_http_request_duration_seconds",
                    "Time from request receipt to response",
                )
                .buckets(LATENCY_BUCKETS.to_vec()),
                &["method", "route"],
            )
            .expect("valid latency descriptor"),
        );
        let in_flight = register(
            &registry,
            IntGauge::new("uigw_http_requests_in_flight", "Requests being handled")
                .expect("valid in-flight descriptor"),
        );

        Self {
            collectors: Arc::new(Collectors {
                registry,
                requests,
                errors,
                latency,
                in_flight,
            }),
        }
    }

    /// Requests recorded so far, across all labels.
    pub fn requests(&self) -> u64 {
        total(&self.collectors.requests)
    }

    /// Error responses recorded so far, across all labels.
    pub fn errors(&self) -> u64 {
        total(&self.collectors.errors)
    }

    pub fn in_flight(&self) -> i64 {
        self.collectors.in_flight.get()
    }

    fn observe(&self, method: &Method, route: &str, status: StatusCode, elapsed: Duration) {
        let c = &self.collectors;
        let labels = [method.as_str(), route, status.as_str()];
        c.requests.with_label_values(&labels).inc();
        if status.is_client_error() || status.is_server_error() {
            c.errors.with_label_values(&labels).inc();
        }
        c.latency
            .with_label_values(&[method.as_str(), route])
            .observe(elapsed.as_secs_f64());
    }

    /// The registry in Prometheus text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.collectors.registry.gather())
    }
}

impl Default for GatewayMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn total(counters: &IntCounterVec) -> u64 {
    counters
        .collect()
        .iter()
        .flat_map(|family| family.get_metric())
        .map(|metric| metric.get_counter().get_value() as u64)
        .sum()
}

/// Records one observation per request. A no-op unless a
/// [`GatewayMetrics`] extension is installed outside this layer.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let Some(metrics) = request.extensions().get::<GatewayMetrics>().cloned() else {
        return next.run(request).await;
    };
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| UNMATCHED_ROUTE.to_string(), |p| p.as_str().to_string());

    metrics.collectors.in_flight.inc();
    let started = Instant::now();
    let response = next.run(request).await;
    metrics.collectors.in_flight.dec();

    metrics.observe(&method, &route, response.status(), started.elapsed());
    response
}
