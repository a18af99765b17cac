//! Order data model.
//!
//! - [`CanonicalOrder`]: validated payload before id/timestamp assignment
//! - [`Order`]: accepted order record as stored and returned to clients
//! - [`CustomerIdKind`]: per-deployment customer id convention

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Order lifecycle status.
///
/// Orders are write-once in the current scope, so `Created` is the only
/// state an order ever reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
}

/// Caller-supplied customer identifier.
///
/// Exactly one variant is ever produced per deployment; the validator is
/// parameterized by [`CustomerIdKind`] and never accepts both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CustomerId {
    Text(String),
    Numeric(u64),
}

/// Which customer id convention a deployment accepts.
///
/// Deployments use either string or integer customer ids, never both. The
/// convention is explicit configuration (`customer_id_kind` in the config
/// file) instead of a dual-mode accept-anything field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CustomerIdKind {
    #[default]
    #[serde(rename = "string")]
    Text,
    #[serde(rename = "integer")]
    Numeric,
}

/// Validated, normalized order payload prior to id/timestamp assignment.
///
/// String customer ids are stored trimmed; `items` elements are opaque and
/// carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalOrder {
    pub customer_id: CustomerId,
    pub items: Vec<serde_json::Value>,
    pub total: f64,
}

impl CanonicalOrder {
    /// Assign identity and creation time, fixing the immutable fields.
    pub fn into_order(self, order_id: Uuid, created_at: DateTime<Utc>) -> Order {
        Order {
            order_id,
            customer_id: self.customer_id,
            items: self.items,
            total: self.total,
            status: OrderStatus::Created,
            created_at,
        }
    }
}

/// Accepted order record.
///
/// `order_id`, `customer_id` and `created_at` are immutable once created.
/// No update or delete operation exists; records live until the process
/// terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub order_id: Uuid,
    pub customer_id: CustomerId,
    /// Opaque item descriptors, non-empty by construction.
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<serde_json::Value>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn order_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Created).unwrap(),
            json!("created")
        );
    }

    #[test]
    fn customer_id_serializes_untagged() {
        assert_eq!(
            serde_json::to_value(CustomerId::Text("c1".into())).unwrap(),
            json!("c1")
        );
        assert_eq!(
            serde_json::to_value(CustomerId::Numeric(42)).unwrap(),
            json!(42)
        );
    }

    #[test]
    fn into_order_fixes_identity_and_status() {
        let canonical = CanonicalOrder {
            customer_id: CustomerId::Text("c1".into()),
            items: vec![json!("a"), json!("b")],
            total: 10.0,
        };
        let id = Uuid::new_v4();
        let now = Utc::now();
        let order = canonical.clone().into_order(id, now);

        assert_eq!(order.order_id, id);
        assert_eq!(order.created_at, now);
        assert_eq!(order.status, OrderStatus::Created);
        assert_eq!(order.customer_id, canonical.customer_id);
        assert_eq!(order.items, canonical.items);
        assert_eq!(order.total, 10.0);
    }

    #[test]
    fn customer_id_kind_parses_config_names() {
        let kind: CustomerIdKind = serde_yaml::from_str("string").unwrap();
        assert_eq!(kind, CustomerIdKind::Text);
        let kind: CustomerIdKind = serde_yaml::from_str("integer").unwrap();
        assert_eq!(kind, CustomerIdKind::Numeric);
    }
}
