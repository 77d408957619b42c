use reqwest::StatusCode;
use serde_json::{Value, json};

/// Path prefix of the PostgREST API inside a Supabase project.
pub const REST_PREFIX: &str = "rest/v1";
/// Query selecting every column of a table.
pub const SELECT_ALL: [(&str, &str); 1] = [("select", "*")];
/// Header asking PostgREST to echo inserted rows back.
pub const PREFER_HEADER: &str = "Prefer";
/// `Prefer` value returning the inserted rows.
pub const RETURN_REPRESENTATION: &str = "return=representation";
/// Header carrying the project key.
pub const API_KEY_HEADER: &str = "apikey";

/// Turn an error body into the error object exposed to callers.
///
/// PostgREST normally answers with a JSON object; anything else is wrapped in
/// an object of the same shape.
pub fn error_payload(status: StatusCode, body: &[u8]) -> Value {
    serde_json::from_slice::<Value>(body).unwrap_or_else(|_| {
        let text = String::from_utf8_lossy(body);
        let message = if text.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            text.into_owned()
        };
        json!({
            "message": message,
            "details": null,
            "hint": null,
            "code": status.as_str(),
        })
    })
}
