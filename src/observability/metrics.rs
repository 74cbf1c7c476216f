use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub quotes_total: IntCounterVec,
    pub shipments_created_total: IntCounter,
    pub tracking_events_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let quotes_total = IntCounterVec::new(
            Opts::new("quotes_total", "Price quotes served by service tier"),
            &["service_tier"],
        )
        .expect("valid quotes_total metric");

        let shipments_created_total = IntCounter::new(
            "shipments_created_total",
            "Total shipments booked",
        )
        .expect("valid shipments_created_total metric");

        let tracking_events_total = IntCounterVec::new(
            Opts::new("tracking_events_total", "Tracking events appended by status"),
            &["status"],
        )
        .expect("valid tracking_events_total metric");

        registry
            .register(Box::new(quotes_total.clone()))
            .expect("register quotes_total");
        registry
            .register(Box::new(shipments_created_total.clone()))
            .expect("register shipments_created_total");
        registry
            .register(Box::new(tracking_events_total.clone()))
            .expect("register tracking_events_total");

        Self {
            registry,
            quotes_total,
            shipments_created_total,
            tracking_events_total,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
