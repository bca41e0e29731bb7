//! Integration tests for header redaction.
//!
//! The common credential-bearing headers are masked regardless of key
//! casing; everything else passes through untouched.

use std::collections::{BTreeMap, HashMap};

use cloudlog::{REDACTED_HEADER_VALUE, RedactHeaders, redact_headers};
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

mod credential_headers {
    use super::*;

    #[test]
    fn redacts_authorization() {
        let headers = object(json!({"authorization": "Bearer token"}));
        assert_eq!(
            Value::Object(redact_headers(&headers)),
            json!({"authorization": "<REDACTED>"})
        );
    }

    #[test]
    fn redacts_proxy_authorization() {
        let headers = object(json!({"proxy-authorization": "Bearer token"}));
        assert_eq!(
            Value::Object(redact_headers(&headers)),
            json!({"proxy-authorization": "<REDACTED>"})
        );
    }

    #[test]
    fn redacts_cookie() {
        let headers = object(json!({"cookie": "credentials=something"}));
        assert_eq!(
            Value::Object(redact_headers(&headers)),
            json!({"cookie": "<REDACTED>"})
        );
    }

    #[test]
    fn redacts_set_cookie() {
        let headers = object(json!({"set-cookie": "credentials=something"}));
        assert_eq!(
            Value::Object(redact_headers(&headers)),
            json!({"set-cookie": "<REDACTED>"})
        );
    }

    #[test]
    fn matches_case_insensitively_and_keeps_key_casing() {
        let headers = object(json!({"Authorization": "Bearer token", "SET-COOKIE": "a=b"}));
        assert_eq!(
            Value::Object(redact_headers(&headers)),
            json!({"Authorization": "<REDACTED>", "SET-COOKIE": "<REDACTED>"})
        );
    }

    #[test]
    fn redacts_non_string_values_too() {
        let headers = object(json!({"Cookie": ["a=1", "b=2"]}));
        assert_eq!(redact_headers(&headers)["Cookie"], REDACTED_HEADER_VALUE);
    }
}

mod other_headers {
    use super::*;

    #[test]
    fn returns_non_credential_headers_unmodified() {
        let headers = object(json!({"Content-Type": "text/xml"}));
        assert_eq!(
            Value::Object(redact_headers(&headers)),
            json!({"Content-Type": "text/xml"})
        );
    }

    #[test]
    fn preserves_order_and_values_of_mixed_maps() {
        let headers = object(json!({
            "Host": "example.com",
            "Authorization": "Basic dXNlcjpwYXNz",
            "X-Request-Id": 42,
        }));
        let redacted = redact_headers(&headers);
        let keys: Vec<&str> = redacted.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Host", "Authorization", "X-Request-Id"]);
        assert_eq!(redacted["Host"], "example.com");
        assert_eq!(redacted["X-Request-Id"], 42);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(redact_headers(&Map::new()).is_empty());
    }

    #[test]
    fn does_not_mutate_input() {
        let headers = object(json!({"authorization": "Bearer token"}));
        let _ = redact_headers(&headers);
        assert_eq!(headers["authorization"], "Bearer token");
    }
}

mod std_maps {
    use super::*;

    #[test]
    fn hash_map_of_strings() {
        let headers: HashMap<String, String> = [
            ("Proxy-Authorization".to_string(), "secret".to_string()),
            ("Accept".to_string(), "*/*".to_string()),
        ]
        .into_iter()
        .collect();

        let redacted = headers.redact_headers();
        assert_eq!(redacted["Proxy-Authorization"], REDACTED_HEADER_VALUE);
        assert_eq!(redacted["Accept"], "*/*");
    }

    #[test]
    fn btree_map_of_strings() {
        let headers: BTreeMap<String, String> = [
            ("cookie".to_string(), "sid=1".to_string()),
            ("user-agent".to_string(), "curl".to_string()),
        ]
        .into_iter()
        .collect();

        let redacted = redact_headers(&headers);
        assert_eq!(redacted["cookie"], REDACTED_HEADER_VALUE);
        assert_eq!(redacted["user-agent"], "curl");
    }
}
