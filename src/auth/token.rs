//! Token issuance and verification for Corkboard.
//!
//! Tokens are signed JWTs carrying the user id and nickname. They expire
//! after a fixed window and are never persisted server-side; expiry is the
//! only invalidation mechanism. Rotating the signing secret invalidates all
//! outstanding tokens.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token lifetime in seconds.
pub const DEFAULT_TOKEN_EXPIRY_SECS: u64 = 3600;

/// Token errors.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Token encoding failed.
    #[error("token encoding failed: {0}")]
    Encode(String),

    /// Token is malformed, has a bad signature, or has expired.
    #[error("invalid token")]
    Invalid,
}

/// Claims carried by a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID).
    pub sub: i64,
    /// Nickname.
    pub nickname: String,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// Token ID (unique identifier).
    pub jti: String,
}

/// Issues signed tokens from a server-held secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    expiry_secs: u64,
}

impl TokenIssuer {
    /// Create a new issuer from a secret and an expiry window.
    pub fn new(secret: &str, expiry_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            expiry_secs,
        }
    }

    /// Token lifetime in seconds.
    pub fn expiry_secs(&self) -> u64 {
        self.expiry_secs
    }

    /// Issue a signed token for a user.
    pub fn issue(&self, user_id: i64, nickname: &str) -> Result<String, TokenError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = TokenClaims {
            sub: user_id,
            nickname: nickname.to_string(),
            iat: now,
            exp: now + self.expiry_secs,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encode(e.to_string()))
    }
}

/// Verifies tokens issued with the same secret.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a new verifier from a secret key.
    pub fn new(secret: &str) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify a token and return its claims.
    ///
    /// Fails with [`TokenError::Invalid`] if the signature does not match,
    /// the token is malformed, or it has expired.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("token validation failed: {}", e);
                TokenError::Invalid
            })
    }
}
