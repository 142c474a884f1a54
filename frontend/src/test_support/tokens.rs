use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde_json::{json, Value};

const HEADER: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";

pub fn token_with_claims(claims: Value) -> String {
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", HEADER, payload)
}

pub fn token_with_exp(role: &str, exp_secs: i64) -> String {
    token_with_claims(json!({ "role": role, "exp": exp_secs, "token_type": "access" }))
}

/// Access token that stays valid for an hour past the real clock.
pub fn live_token(role: &str) -> String {
    token_with_exp(role, chrono::Utc::now().timestamp() + 3600)
}
