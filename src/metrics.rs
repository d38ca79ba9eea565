use axum::{routing::get, Router};
use axum_prometheus::{PrometheusMetricLayer, PrometheusMetricLayerBuilder};

pub fn setup_metrics() -> (PrometheusMetricLayer<'static>, Router) {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayerBuilder::new()
        .with_prefix("grantscope")
        .with_default_metrics()
        .build_pair();
    let app = Router::new().route("/metrics", get(|| async move { metric_handle.render() }));
    (prometheus_layer, app)
}
