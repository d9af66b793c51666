//! Envelope handling for the MerchantOS response shape:
//! `{ "<Resource>": ..., "@attributes": { "count": N }, "httpCode"?: ... }`.

use serde_json::Value;

use crate::error::APIError;

const ATTRIBUTES: &str = "@attributes";

/// `@attributes.count` from the envelope; the vendor emits the count as
/// a number or a numeric string depending on the resource. Missing or
/// malformed counts read as zero.
#[must_use]
pub fn items_count(envelope: &Value) -> u64 {
    match envelope.get(ATTRIBUTES).and_then(|attrs| attrs.get("count")) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

/// The API reports errors inside the envelope: an embedded `httpCode`
/// other than `"200"` is an error no matter what the transport said, and
/// an absent `httpCode` is success no matter what the transport said.
pub fn check_api_response(envelope: &Value) -> Result<(), APIError> {
    let Some(code) = envelope.get("httpCode") else {
        return Ok(());
    };
    let http_code = match code {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    if http_code == "200" {
        return Ok(());
    }
    let field = |key: &str| {
        envelope
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    };
    let message = format!(
        "{}: {} ({})",
        field("httpMessage"),
        field("message"),
        field("errorClass")
    );
    Err(APIError::IdentityProviderError {
        http_code,
        message,
        body: envelope.clone(),
    })
}

/// Singleton fetch: the resource value when `count > 0`, else an empty
/// list.
#[must_use]
pub(crate) fn extract_single(envelope: &Value, resource: &str) -> Value {
    match envelope.get(resource) {
        Some(value) if items_count(envelope) > 0 => value.clone(),
        _ => Value::Array(Vec::new()),
    }
}

/// Singleton fetch via filter parameters: `count == 1` yields the single
/// object; `count > 1` passes the raw value through unmodified (it may
/// be a list); anything else is an empty list.
#[must_use]
pub(crate) fn extract_filtered(envelope: &Value, resource: &str) -> Value {
    match envelope.get(resource) {
        Some(value) if items_count(envelope) >= 1 => value.clone(),
        _ => Value::Array(Vec::new()),
    }
}

/// Strict singleton: the resource value only when `count == 1`.
#[must_use]
pub(crate) fn extract_exact(envelope: &Value, resource: &str) -> Value {
    match envelope.get(resource) {
        Some(value) if items_count(envelope) == 1 => value.clone(),
        _ => Value::Array(Vec::new()),
    }
}

/// List fetch: an array value passes through as-is, a lone object is
/// wrapped in a one-element list, an absent key is an empty list.
#[must_use]
pub(crate) fn extract_list(envelope: &Value, resource: &str) -> Value {
    match envelope.get(resource) {
        Some(Value::Array(items)) => Value::Array(items.clone()),
        Some(value) => Value::Array(vec![value.clone()]),
        None => Value::Array(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn count_reads_numbers_and_numeric_strings() {
        assert_eq!(items_count(&json!({"@attributes": {"count": 3}})), 3);
        assert_eq!(items_count(&json!({"@attributes": {"count": "1"}})), 1);
        assert_eq!(items_count(&json!({"@attributes": {"count": "junk"}})), 0);
        assert_eq!(items_count(&json!({"Sale": {}})), 0);
    }

    #[test]
    fn embedded_success_code_never_errors() {
        let envelope = json!({
            "httpCode": "200",
            "httpMessage": "OK",
            "Sale": {"saleID": 1}
        });
        assert!(check_api_response(&envelope).is_ok());
    }

    #[test]
    fn missing_code_is_success_regardless_of_other_fields() {
        let envelope = json!({"message": "something odd", "Sale": {}});
        assert!(check_api_response(&envelope).is_ok());
    }

    #[test]
    fn embedded_error_code_composes_message_in_order() {
        let envelope = json!({
            "httpCode": "404",
            "httpMessage": "Not Found",
            "message": "Sale not found",
            "errorClass": "CommonControllerException"
        });
        let err = check_api_response(&envelope).unwrap_err();
        match err {
            APIError::IdentityProviderError {
                http_code,
                message,
                body,
            } => {
                assert_eq!(http_code, "404");
                assert_eq!(message, "Not Found: Sale not found (CommonControllerException)");
                assert_eq!(body["httpCode"], json!("404"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn single_object_with_count_one_is_returned() {
        let envelope = json!({
            "@attributes": {"count": 1},
            "Sale": {"saleID": 49}
        });
        assert_eq!(extract_single(&envelope, "Sale"), json!({"saleID": 49}));
    }

    #[test]
    fn zero_count_is_an_empty_collection_not_an_error() {
        let envelope = json!({"@attributes": {"count": 0}, "Sale": {}});
        assert_eq!(extract_single(&envelope, "Sale"), json!([]));
        assert_eq!(extract_filtered(&envelope, "Sale"), json!([]));
        assert_eq!(extract_exact(&envelope, "Sale"), json!([]));
    }

    #[test]
    fn filtered_passes_multi_result_through_raw() {
        let envelope = json!({
            "@attributes": {"count": 2},
            "Customer": [{"customerID": 1}, {"customerID": 2}]
        });
        assert_eq!(
            extract_filtered(&envelope, "Customer"),
            json!([{"customerID": 1}, {"customerID": 2}])
        );
    }

    #[test]
    fn exact_rejects_multi_result() {
        let envelope = json!({
            "@attributes": {"count": 2},
            "Shop": [{"shopID": 1}, {"shopID": 2}]
        });
        assert_eq!(extract_exact(&envelope, "Shop"), json!([]));
    }

    #[test]
    fn list_wraps_single_object() {
        let envelope = json!({
            "@attributes": {"count": 1},
            "Sale": {"saleID": 49}
        });
        assert_eq!(extract_list(&envelope, "Sale"), json!([{"saleID": 49}]));
    }

    #[test]
    fn list_passes_array_through_unchanged() {
        let envelope = json!({
            "@attributes": {"count": 2},
            "Sale": [{"saleID": 1}, {"saleID": 2}]
        });
        assert_eq!(
            extract_list(&envelope, "Sale"),
            json!([{"saleID": 1}, {"saleID": 2}])
        );
    }

    #[test]
    fn list_of_missing_resource_is_empty() {
        assert_eq!(extract_list(&json!({}), "Sale"), json!([]));
    }
}
