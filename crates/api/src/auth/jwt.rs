//! Admin session token generation and validation.
//!
//! Session tokens are HS256-signed JWTs carrying a [`Claims`] payload with
//! a 24-hour expiry. One validation routine serves every entry point (the
//! request gate, the `AuthUser` extractor, and `/admin/verify`), returning
//! the typed [`TokenValidation`] instead of per-call-site error handling.

use cncdesign_core::types::DbId;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every admin session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// The user's email at issuance time.
    pub email: String,
    /// The user's role name (`"admin"` for every token this system issues).
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4); repeated logins yield distinct tokens.
    pub jti: String,
}

/// Configuration for session token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours (default: 24).
    pub expiry_hours: i64,
}

/// Default session token expiry in hours.
const DEFAULT_EXPIRY_HOURS: i64 = 24;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var            | Required | Default |
    /// |--------------------|----------|---------|
    /// | `JWT_SECRET`       | **yes**  | --      |
    /// | `JWT_EXPIRY_HOURS` | no       | `24`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_hours: i64 = std::env::var("JWT_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_HOURS.to_string())
            .parse()
            .expect("JWT_EXPIRY_HOURS must be a valid i64");

        Self {
            secret,
            expiry_hours,
        }
    }
}

/// Outcome of validating a presented token.
///
/// `Expired` is distinguished from `Invalid` so callers can log or surface
/// the difference, but both deny access.
#[derive(Debug, Clone)]
pub enum TokenValidation {
    Valid(Claims),
    Expired,
    Invalid,
}

impl TokenValidation {
    /// Claims if the token verified, `None` otherwise.
    pub fn into_claims(self) -> Option<Claims> {
        match self {
            Self::Valid(claims) => Some(claims),
            Self::Expired | Self::Invalid => None,
        }
    }
}

/// Generate an HS256 session token for the given admin user.
pub fn generate_token(
    user_id: DbId,
    email: &str,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.expiry_hours * 3600;

    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        role: role.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate a presented token: signature first, then expiry.
///
/// Purely local computation -- no credential-store round trip -- so the
/// request gate can call this on every matching request.
pub fn validate_token(token: &str, config: &JwtConfig) -> TokenValidation {
    let result = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    );
    match result {
        Ok(data) => TokenValidation::Valid(data.claims),
        Err(err) => match err.kind() {
            ErrorKind::ExpiredSignature => TokenValidation::Expired,
            _ => TokenValidation::Invalid,
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 24,
        }
    }

    #[test]
    fn generate_and_validate_token() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let token = generate_token(user_id, "admin@cncdesign.com", "admin", &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config)
            .into_claims()
            .expect("token should validate");
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "admin@cncdesign.com");
        assert_eq!(claims.role, "admin");
        // 24-hour lifetime, exactly.
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn repeated_logins_yield_distinct_tokens() {
        let config = test_config();
        let user_id = Uuid::new_v4();
        let first = generate_token(user_id, "a@b.com", "admin", &config).unwrap();
        let second = generate_token(user_id, "a@b.com", "admin", &config).unwrap();

        // Distinct jti guarantees distinct tokens even within one second.
        assert_ne!(first, second);

        let first_claims = validate_token(&first, &config).into_claims().unwrap();
        let second_claims = validate_token(&second, &config).into_claims().unwrap();
        assert_eq!(first_claims.sub, second_claims.sub);
        assert_eq!(first_claims.role, second_claims.role);
        assert_ne!(first_claims.jti, second_claims.jti);
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let config = test_config();

        // Manually create an already-expired token.
        // Use a margin well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "a@b.com".to_string(),
            role: "admin".to_string(),
            exp: now - 300, // expired 5 minutes ago (well past leeway)
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert_matches!(validate_token(&token, &config), TokenValidation::Expired);
    }

    #[test]
    fn garbage_and_wrong_secret_are_invalid() {
        let config = test_config();
        assert_matches!(
            validate_token("not-a-jwt", &config),
            TokenValidation::Invalid
        );

        let other = JwtConfig {
            secret: "a-different-secret-entirely".to_string(),
            expiry_hours: 24,
        };
        let token = generate_token(Uuid::new_v4(), "a@b.com", "admin", &other).unwrap();
        assert_matches!(validate_token(&token, &config), TokenValidation::Invalid);
    }
}
