//! In-memory order registry.

use std::collections::HashMap;

use parking_lot::Mutex;
use uuid::Uuid;

use crate::models::Order;

/// Process-lifetime registry of accepted orders, keyed by order id.
///
/// One mutex over the whole map is sufficient: order ids are generated
/// fresh per request, so writers never contend on a key. Contents are lost
/// on restart; this service deliberately has no persistence layer.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: Mutex<HashMap<Uuid, Order>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an accepted order. Never rejects a well-formed order.
    pub fn put(&self, order: Order) {
        self.orders.lock().insert(order.order_id, order);
    }

    /// Look up an order by id, cloning it out of the map.
    pub fn get(&self, order_id: &Uuid) -> Option<Order> {
        self.orders.lock().get(order_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.orders.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.lock().is_empty()
    }
}
