use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};
use std::fmt::Display;
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Operation {
    SignIn,
    SignUp,
    SignOut,
    CompleteOnboarding,
    CompleteProfessionalOnboarding,
    UploadDocument,
    DeleteDocument,
    UpdateComplianceStatus,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub operation: Operation,
    pub status: Status,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum GateOutcome {
    Render,
    Redirect,
    Loading,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct GateLabels {
    pub outcome: GateOutcome,
}

/// Families are internally synchronized; clones share the same series.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
    pub gate_decisions: Family<GateLabels, Counter>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
            gate_decisions: Family::default(),
        }
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "store_operations",
            "Total number of mock store operations",
            self.request_counter.clone(),
        );
        registry.register(
            "store_operation_duration_seconds",
            "Histogram of mock store operation durations",
            self.request_duration.clone(),
        );
        registry.register(
            "route_gate_decisions",
            "Route gate decisions by outcome",
            self.gate_decisions.clone(),
        );
    }

    pub fn record(&self, operation: Operation, status: Status, duration_secs: f64) {
        let labels = Labels { operation, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    /// Logs the outcome of a store operation and records it.
    pub fn observe<T, E: Display>(
        &self,
        operation: Operation,
        started: Instant,
        result: &Result<T, E>,
    ) {
        let elapsed = started.elapsed().as_secs_f64();

        match result {
            Ok(_) => {
                info!("✅ {operation:?} completed in {elapsed:.3}s");
                self.record(operation, Status::Success, elapsed);
            }
            Err(err) => {
                error!("❌ {operation:?} failed: {err}");
                self.record(operation, Status::Error, elapsed);
            }
        }
    }

    pub fn record_gate(&self, outcome: GateOutcome) {
        self.gate_decisions
            .get_or_create(&GateLabels { outcome })
            .inc();
    }
}
