//! Probe token used to check a freshly generated key pair.
//!
//! The probe is signed exactly the way the backend signs session tokens
//! (ES256 over a PKCS#8 private key) and verified the way the backend
//! verifies them (public key PEM, expiry enforced, no leeway).

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Subject carried by every probe token.
pub const PROBE_SUBJECT: &str = "goschool-provision-probe";

const PROBE_LIFETIME_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeClaims {
    pub sub: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl ProbeClaims {
    pub fn new() -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: PROBE_SUBJECT.to_string(),
            exp: (now + PROBE_LIFETIME_SECS) as usize,
            iat: now as usize,
        }
    }
}

impl Default for ProbeClaims {
    fn default() -> Self {
        Self::new()
    }
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::ES256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation
}

/// Signs a probe token with a PKCS#8 PEM private key.
pub fn sign_probe(private_pem: &[u8]) -> Result<String, jsonwebtoken::errors::Error> {
    let key = EncodingKey::from_ec_pem(private_pem)?;
    encode(&Header::new(Algorithm::ES256), &ProbeClaims::new(), &key)
}

/// Verifies a probe token against a public key PEM and returns its claims.
pub fn verify_probe(
    token: &str,
    public_pem: &[u8],
) -> Result<ProbeClaims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_ec_pem(public_pem)?;
    decode::<ProbeClaims>(token, &key, &validation()).map(|data| data.claims)
}
