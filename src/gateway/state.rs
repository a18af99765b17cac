use crate::health::{HealthAggregator, UtilizationThresholds};
use crate::models::CustomerIdKind;
use crate::store::OrderStore;

/// Shared gateway state, constructed once at startup and handed to every
/// handler behind an `Arc`. The order store is the only mutable state that
/// crosses requests.
pub struct AppState {
    pub store: OrderStore,
    pub customer_id_kind: CustomerIdKind,
    pub aggregator: HealthAggregator,
    pub utilization: UtilizationThresholds,
}

impl AppState {
    pub fn new(
        store: OrderStore,
        customer_id_kind: CustomerIdKind,
        aggregator: HealthAggregator,
        utilization: UtilizationThresholds,
    ) -> Self {
        Self {
            store,
            customer_id_kind,
            aggregator,
            utilization,
        }
    }
}
