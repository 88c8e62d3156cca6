use std::collections::HashMap;

use serde_json::{Map, Value};

/// Parse a request body based on Content-Type header.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|_| "Invalid JSON".to_string())
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else {
        // Try JSON first, then form-urlencoded
        serde_json::from_slice(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|_| "Invalid JSON".to_string())
    }
}

fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;
    let pairs: HashMap<String, String> = form_urlencoded::parse(body_str.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert(k, Value::String(v));
    }
    Ok(Value::Object(map))
}
