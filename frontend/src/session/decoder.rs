use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use serde::Deserialize;

use super::{errors::DecodeError, role::Role};
use crate::utils::time;

/// base64url that accepts claims segments with or without `=` padding.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub role: Role,
    /// Epoch milliseconds.
    pub expires_at_ms: i64,
}

impl Identity {
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.expires_at_ms <= now_ms
    }
}

#[derive(Deserialize)]
struct RawClaims {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Reads the identity claims of an access token. The signature is not checked;
/// the server remains the authority on whether the token is accepted.
pub fn decode(token: &str) -> Result<Identity, DecodeError> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next()) {
        (Some(header), Some(payload)) if !header.is_empty() && !payload.is_empty() => payload,
        _ => return Err(DecodeError::Malformed),
    };

    let normalized = payload.replace('+', "-").replace('/', "_");
    let bytes = URL_SAFE_LENIENT.decode(normalized)?;
    let claims: RawClaims = serde_json::from_slice(&bytes)?;

    let exp = claims.exp.ok_or(DecodeError::MissingClaim { claim: "exp" })?;
    let expires_at_ms = exp
        .checked_mul(1000)
        .ok_or(DecodeError::ExpiryOutOfRange(exp))?;
    let role = claims
        .role
        .ok_or(DecodeError::MissingClaim { claim: "role" })?
        .parse::<Role>()?;

    Ok(Identity {
        role,
        expires_at_ms,
    })
}

pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, time::now_ms())
}

/// Any token that cannot be decoded counts as expired.
pub fn is_expired_at(token: &str, now_ms: i64) -> bool {
    match decode(token) {
        Ok(identity) => identity.is_expired_at(now_ms),
        Err(err) => {
            log::debug!("treating undecodable access token as expired: {}", err);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tokens::{token_with_claims, token_with_exp};
    use serde_json::json;
    use wasm_bindgen_test::*;

    const NOW_MS: i64 = 1_750_000_000_000;

    #[wasm_bindgen_test]
    fn decodes_role_and_expiry_in_milliseconds() {
        let token = token_with_exp("staff", 1_750_000_600);
        let identity = decode(&token).unwrap();
        assert_eq!(identity.role, Role::Staff);
        assert_eq!(identity.expires_at_ms, 1_750_000_600_000);
    }

    #[wasm_bindgen_test]
    fn future_expiry_is_not_expired() {
        let token = token_with_exp("admin", NOW_MS / 1000 + 60);
        assert!(!is_expired_at(&token, NOW_MS));
    }

    #[wasm_bindgen_test]
    fn past_or_exact_expiry_is_expired() {
        assert!(is_expired_at(&token_with_exp("admin", NOW_MS / 1000 - 1), NOW_MS));
        assert!(is_expired_at(&token_with_exp("admin", NOW_MS / 1000), NOW_MS));
    }

    #[test]
    fn unparseable_tokens_are_expired() {
        assert!(is_expired_at("", NOW_MS));
        assert!(is_expired_at("not-a-jwt", NOW_MS));
        assert!(is_expired_at("header.%%%.sig", NOW_MS));
        assert!(is_expired_at("header.bm90LWpzb24.sig", NOW_MS));
    }

    #[test]
    fn missing_exp_is_rejected() {
        let token = token_with_claims(json!({ "role": "admin" }));
        assert!(matches!(
            decode(&token),
            Err(DecodeError::MissingClaim { claim: "exp" })
        ));
        assert!(is_expired_at(&token, NOW_MS));
    }

    #[test]
    fn missing_role_is_rejected() {
        let token = token_with_claims(json!({ "exp": 1_900_000_000 }));
        assert!(matches!(
            decode(&token),
            Err(DecodeError::MissingClaim { claim: "role" })
        ));
    }

    #[test]
    fn unknown_role_is_a_validation_failure() {
        let token = token_with_claims(json!({ "role": "root", "exp": 1_900_000_000 }));
        assert!(matches!(decode(&token), Err(DecodeError::Role(_))));
    }

    #[test]
    fn accepts_padded_claims_segment() {
        let unpadded = token_with_exp("customer", 1_900_000_000);
        let mut parts: Vec<String> = unpadded.split('.').map(str::to_string).collect();
        while parts[1].len() % 4 != 0 {
            parts[1].push('=');
        }
        let padded = parts.join(".");
        assert_eq!(decode(&padded).unwrap().role, Role::Customer);
    }

    #[test]
    fn extra_claims_are_ignored() {
        let token = token_with_claims(json!({
            "role": "admin",
            "exp": 1_900_000_000,
            "user_id": 7,
            "token_type": "access"
        }));
        assert_eq!(decode(&token).unwrap().role, Role::Admin);
    }
}
