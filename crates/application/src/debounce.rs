//! Request construction and response interpretation for the debounce.io
//! API.
//!
//! The two tiers use different endpoints and response shapes, and the
//! service encodes flags inconsistently across them: JSON booleans in
//! newer responses, `"1"`/`"true"`/`"false"` strings in older ones. The
//! comparisons below are a compatibility shim with the live service and
//! must not be normalized.

use mailscreen_domain::Verdict;
use serde_json::Value;

use crate::ports::ApiRequest;

/// Free-tier disposable-address check.
pub const FREE_ENDPOINT: &str = "https://disposable.debounce.io/";

/// Paid transactional-check endpoint.
pub const PAID_ENDPOINT: &str = "https://api.debounce.io/v1/";

/// GET request for the free disposable check.
pub fn disposable_check(address: &str) -> ApiRequest {
    ApiRequest {
        endpoint: FREE_ENDPOINT,
        params: vec![("email", address.to_string())],
    }
}

/// GET request for the paid transactional check.
pub fn transactional_check(api_key: &str, address: &str) -> ApiRequest {
    ApiRequest {
        endpoint: PAID_ENDPOINT,
        params: vec![
            ("api", api_key.to_string()),
            ("email", address.to_string()),
        ],
    }
}

/// Interpret a free-tier response body. `None` means indeterminate:
/// an unparseable body, a missing `disposable` field, or a value other
/// than the two known encodings.
pub fn interpret_disposable(body: &[u8]) -> Option<Verdict> {
    let data: Value = serde_json::from_slice(body).ok()?;
    match data.get("disposable")?.as_str()? {
        // not disposable, safe for transactional mail
        "false" => Some(Verdict::Allow),
        "true" => Some(Verdict::Block),
        _ => None,
    }
}

/// Interpret a paid-tier response body. `None` means indeterminate;
/// a truthy `success` with the nested send flag unset (or absent) is a
/// determinate `Block`.
pub fn interpret_transactional(body: &[u8]) -> Option<Verdict> {
    let data: Value = serde_json::from_slice(body).ok()?;
    if !flag_is_set(data.get("success")?) {
        return None;
    }
    let send = data
        .pointer("/debounce/send_transactional")
        .map(flag_is_set)
        .unwrap_or(false);
    Some(if send { Verdict::Allow } else { Verdict::Block })
}

/// The API encodes set flags as boolean `true` or the string `"1"`.
fn flag_is_set(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(flag) => flag == "1",
        _ => false,
    }
}
