/**
 * Session Tokens
 *
 * This module issues and verifies HMAC-signed JWTs carrying the user ID as
 * subject. Tokens expire 24 hours after issuance and carry no mutable state.
 *
 * There is no server-side revocation: logging out only discards the token on
 * the client, so a token stays valid until it expires.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token issuance or verification failure
///
/// Signature problems and expiry are distinct so the caller can answer
/// precisely.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signing secret is missing or empty
    #[error("token signing secret is not configured")]
    MissingSecret,

    /// Malformed token, bad signature, or unusable subject
    #[error("invalid token")]
    Invalid,

    /// Signature is fine but the token is past its expiry
    #[error("token expired")]
    Expired,

    #[error("failed to encode token: {0}")]
    Encode(jsonwebtoken::errors::Error),
}

/// Issues and verifies session tokens with a server-held secret
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service
    ///
    /// An empty secret is refused; callers treat that as a fatal startup
    /// condition.
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.trim().is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        })
    }

    /// Override the token lifetime
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject`, valid from now
    pub fn issue(&self, subject: i64) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token for `subject` as if issued at `issued_at`
    pub fn issue_at(&self, subject: i64, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Encode)
    }

    /// Verify a token and return its subject
    pub fn verify(&self, token: &str) -> Result<i64, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        data.claims.sub.parse::<i64>().map_err(|_| TokenError::Invalid)
    }
}
