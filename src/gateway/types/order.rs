//! Order payload validation.
//!
//! The inbound payload is untyped JSON. Validation is collect-all rather
//! than fail-fast so a single response enumerates every problem, and it is
//! a pure function: no I/O, no panics, no knowledge of HTTP status codes.

use serde_json::Value;

use crate::models::{CanonicalOrder, CustomerId, CustomerIdKind};

/// Validate an inbound order payload.
///
/// `None` means the request carried no body at all, which is reported
/// separately from a body that is not a JSON object. Either shape problem
/// short-circuits the field checks; otherwise every field is checked and
/// all failures are returned together.
pub fn validate_order(
    body: Option<&Value>,
    kind: CustomerIdKind,
) -> Result<CanonicalOrder, Vec<String>> {
    let map = match body {
        None => return Err(vec!["Request body is required".to_string()]),
        Some(value) => match value.as_object() {
            Some(map) => map,
            None => return Err(vec!["Request body must be JSON".to_string()]),
        },
    };

    let mut errors = Vec::new();

    let customer_id = match map.get("customer_id") {
        None => {
            errors.push("customer_id is required".to_string());
            None
        }
        Some(value) => match kind {
            CustomerIdKind::Text => match value.as_str() {
                Some(s) if !s.trim().is_empty() => Some(CustomerId::Text(s.trim().to_string())),
                _ => {
                    errors.push("customer_id must be a non-empty string".to_string());
                    None
                }
            },
            CustomerIdKind::Numeric => match value.as_u64() {
                Some(n) => Some(CustomerId::Numeric(n)),
                None => {
                    errors.push("customer_id must be a non-negative integer".to_string());
                    None
                }
            },
        },
    };

    let items = match map.get("items") {
        None => {
            errors.push("items is required".to_string());
            None
        }
        Some(value) => match value.as_array() {
            None => {
                errors.push("items must be an array".to_string());
                None
            }
            Some(arr) if arr.is_empty() => {
                errors.push("items must contain at least one item".to_string());
                None
            }
            // Elements are opaque descriptors; only the sequence is checked.
            Some(arr) => Some(arr.clone()),
        },
    };

    let total = match map.get("total") {
        None => {
            errors.push("total is required".to_string());
            None
        }
        Some(value) => match value.as_f64() {
            None => {
                errors.push("total must be a number".to_string());
                None
            }
            Some(t) if t < 0.0 => {
                errors.push("total must be non-negative".to_string());
                None
            }
            Some(t) => Some(t),
        },
    };

    match (customer_id, items, total) {
        (Some(customer_id), Some(items), Some(total)) => Ok(CanonicalOrder {
            customer_id,
            items,
            total,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate_text(body: &Value) -> Result<CanonicalOrder, Vec<String>> {
        validate_order(Some(body), CustomerIdKind::Text)
    }

    #[test]
    fn valid_payload_produces_canonical_order() {
        let order = validate_text(&json!({
            "customer_id": "c1",
            "items": ["a"],
            "total": 10
        }))
        .unwrap();

        assert_eq!(order.customer_id, CustomerId::Text("c1".into()));
        assert_eq!(order.items, vec![json!("a")]);
        assert_eq!(order.total, 10.0);
    }

    #[test]
    fn absent_body_is_a_single_error() {
        let errors = validate_order(None, CustomerIdKind::Text).unwrap_err();
        assert_eq!(errors, vec!["Request body is required"]);
    }

    #[test]
    fn non_object_body_is_a_single_error() {
        let errors = validate_text(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors, vec!["Request body must be JSON"]);

        let errors = validate_text(&json!("text")).unwrap_err();
        assert_eq!(errors, vec!["Request body must be JSON"]);
    }

    #[test]
    fn missing_fields_are_each_reported_exactly_once() {
        let errors = validate_text(&json!({})).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "customer_id is required",
                "items is required",
                "total is required"
            ]
        );
    }

    #[test]
    fn only_actually_missing_fields_are_reported() {
        let errors = validate_text(&json!({"customer_id": "c1", "total": 5})).unwrap_err();
        assert_eq!(errors, vec!["items is required"]);
    }

    #[test]
    fn missing_customer_and_negative_total_are_reported_together() {
        let errors = validate_text(&json!({"items": ["a"], "total": -5})).unwrap_err();
        assert_eq!(
            errors,
            vec!["customer_id is required", "total must be non-negative"]
        );
    }

    #[test]
    fn customer_id_wrong_type_is_distinct_from_missing() {
        let errors =
            validate_text(&json!({"customer_id": 42, "items": ["a"], "total": 1})).unwrap_err();
        assert_eq!(errors, vec!["customer_id must be a non-empty string"]);
    }

    #[test]
    fn whitespace_only_customer_id_is_rejected() {
        let errors =
            validate_text(&json!({"customer_id": "   ", "items": ["a"], "total": 1}))
                .unwrap_err();
        assert_eq!(errors, vec!["customer_id must be a non-empty string"]);
    }

    #[test]
    fn customer_id_is_trimmed_in_the_canonical_order() {
        let order =
            validate_text(&json!({"customer_id": "  c1  ", "items": ["a"], "total": 1})).unwrap();
        assert_eq!(order.customer_id, CustomerId::Text("c1".into()));
    }

    #[test]
    fn numeric_kind_accepts_integers_and_rejects_strings() {
        let order = validate_order(
            Some(&json!({"customer_id": 7, "items": ["a"], "total": 1})),
            CustomerIdKind::Numeric,
        )
        .unwrap();
        assert_eq!(order.customer_id, CustomerId::Numeric(7));

        let errors = validate_order(
            Some(&json!({"customer_id": "c1", "items": ["a"], "total": 1})),
            CustomerIdKind::Numeric,
        )
        .unwrap_err();
        assert_eq!(errors, vec!["customer_id must be a non-negative integer"]);

        let errors = validate_order(
            Some(&json!({"customer_id": -3, "items": ["a"], "total": 1})),
            CustomerIdKind::Numeric,
        )
        .unwrap_err();
        assert_eq!(errors, vec!["customer_id must be a non-negative integer"]);
    }

    #[test]
    fn items_wrong_type_and_empty_are_distinct_errors() {
        let errors =
            validate_text(&json!({"customer_id": "c1", "items": "a", "total": 1})).unwrap_err();
        assert_eq!(errors, vec!["items must be an array"]);

        let errors =
            validate_text(&json!({"customer_id": "c1", "items": [], "total": 1})).unwrap_err();
        assert_eq!(errors, vec!["items must contain at least one item"]);
    }

    #[test]
    fn item_elements_are_opaque() {
        // Mixed, nested, even null elements pass; only the sequence is checked.
        let order = validate_text(&json!({
            "customer_id": "c1",
            "items": [null, 7, {"sku": "x", "qty": 2}, ["nested"]],
            "total": 1
        }))
        .unwrap();
        assert_eq!(order.items.len(), 4);
    }

    #[test]
    fn total_wrong_type_and_negative_are_distinct_errors() {
        let errors =
            validate_text(&json!({"customer_id": "c1", "items": ["a"], "total": "10"}))
                .unwrap_err();
        assert_eq!(errors, vec!["total must be a number"]);

        let errors =
            validate_text(&json!({"customer_id": "c1", "items": ["a"], "total": -0.01}))
                .unwrap_err();
        assert_eq!(errors, vec!["total must be non-negative"]);
    }

    #[test]
    fn zero_total_is_valid() {
        let order =
            validate_text(&json!({"customer_id": "c1", "items": ["a"], "total": 0})).unwrap();
        assert_eq!(order.total, 0.0);
    }

    #[test]
    fn fractional_total_is_preserved() {
        let order =
            validate_text(&json!({"customer_id": "c1", "items": ["a"], "total": 12.34})).unwrap();
        assert_eq!(order.total, 12.34);
    }
}
