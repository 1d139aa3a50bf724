use opentelemetry::{KeyValue, metrics::UpDownCounter};
use std::sync::LazyLock;

static STATDS: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    logfire::i64_up_down_counter("parking_finder_statds")
        .with_description("Parking finder statistics")
        .with_unit("event")
        .build()
});

fn incr_statds(metric: String, value: String) {
    STATDS.add(1, &[KeyValue::new(metric, value)]);
}

/// Counts lookup outcomes: `found`, `no_valid_data` or `error`.
pub fn incr_lookup_statds(outcome: &str) {
    incr_statds("lookup".to_string(), outcome.into())
}

/// Counts inbound webhook events by kind.
pub fn incr_webhook_event_statds(kind: &str) {
    incr_statds("webhook_event".to_string(), kind.into())
}
