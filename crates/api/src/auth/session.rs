//! Admin session cookie: shared-password check, HS256 session tokens and
//! `Cookie` / `Set-Cookie` header handling.
//!
//! The admin area has a single shared password (`ADMIN_PASSWORD`). A
//! successful login sets the `admin` cookie to a signed, expiring session
//! token; a bare cookie value such as `admin=1` is never accepted.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Name of the admin session cookie.
pub const ADMIN_COOKIE: &str = "admin";

/// Subject claim carried by every admin session token.
const ADMIN_SUBJECT: &str = "admin";

/// Default session lifetime in days.
const DEFAULT_SESSION_DAYS: i64 = 7;

/// Claims embedded in an admin session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Always `"admin"`.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier for log correlation.
    pub jti: String,
}

/// Admin login and session cookie configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Shared admin password. `None` disables login.
    pub password: Option<String>,
    /// HMAC-SHA256 secret used to sign and verify session tokens.
    pub session_secret: String,
    /// Session lifetime in days; also the cookie `Max-Age`.
    pub session_days: i64,
    /// Whether the cookie carries the `Secure` attribute.
    pub secure_cookie: bool,
}

impl AdminConfig {
    /// Load admin configuration from environment variables.
    ///
    /// | Env Var                | Required | Default       |
    /// |------------------------|----------|---------------|
    /// | `ADMIN_PASSWORD`       | no       | -- (login off)|
    /// | `ADMIN_SESSION_SECRET` | **yes**  | --            |
    /// | `ADMIN_SESSION_DAYS`   | no       | `7`           |
    /// | `APP_ENV`              | no       | `development` |
    ///
    /// The cookie is marked `Secure` when `APP_ENV=production`.
    ///
    /// # Panics
    ///
    /// Panics if `ADMIN_SESSION_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let password = std::env::var("ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty());

        let session_secret = std::env::var("ADMIN_SESSION_SECRET")
            .expect("ADMIN_SESSION_SECRET must be set in the environment");
        assert!(
            !session_secret.is_empty(),
            "ADMIN_SESSION_SECRET must not be empty"
        );

        let session_days: i64 = std::env::var("ADMIN_SESSION_DAYS")
            .unwrap_or_else(|_| DEFAULT_SESSION_DAYS.to_string())
            .parse()
            .expect("ADMIN_SESSION_DAYS must be a valid i64");

        let secure_cookie = std::env::var("APP_ENV")
            .map(|env| env.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        Self {
            password,
            session_secret,
            session_days,
            secure_cookie,
        }
    }

    fn max_age_secs(&self) -> i64 {
        self.session_days * 24 * 60 * 60
    }
}

/// Compare a submitted password with the configured one.
///
/// Both sides are hashed first so the comparison always runs over 32 bytes
/// and does not exit early on the first differing byte.
pub fn password_matches(candidate: &str, expected: &str) -> bool {
    let a = Sha256::digest(candidate.as_bytes());
    let b = Sha256::digest(expected.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Issue a signed session token valid for `config.session_days`.
pub fn issue_session_token(config: &AdminConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: ADMIN_SUBJECT.to_string(),
        exp: now + config.max_age_secs(),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.session_secret.as_bytes()),
    )
}

/// Validate a session token's signature, expiry and subject.
pub fn validate_session_token(
    token: &str,
    config: &AdminConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default(); // HS256, validates exp
    validation.sub = Some(ADMIN_SUBJECT.to_string());

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.session_secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}

/// `Set-Cookie` value that stores `token` as the admin session.
pub fn session_cookie(token: &str, config: &AdminConfig) -> String {
    build_cookie(token, config.max_age_secs(), config.secure_cookie)
}

/// `Set-Cookie` value that removes the admin session.
pub fn clear_session_cookie(config: &AdminConfig) -> String {
    build_cookie("", 0, config.secure_cookie)
}

fn build_cookie(value: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{ADMIN_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Find the value of cookie `name` across all `Cookie` headers.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    /// Helper to build a test config with a known secret.
    fn test_config() -> AdminConfig {
        AdminConfig {
            password: Some("let-me-in".to_string()),
            session_secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            session_days: 7,
            secure_cookie: false,
        }
    }

    #[test]
    fn password_match_and_mismatch() {
        assert!(password_matches("let-me-in", "let-me-in"));
        assert!(!password_matches("let-me-i", "let-me-in"));
        assert!(!password_matches("", "let-me-in"));
    }

    #[test]
    fn issued_token_validates() {
        let config = test_config();
        let token = issue_session_token(&config).expect("token generation should succeed");
        let claims = validate_session_token(&token, &config).expect("token should validate");

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let config = test_config();
        let other = AdminConfig {
            session_secret: "a-completely-different-secret-value".to_string(),
            ..test_config()
        };
        let token = issue_session_token(&other).unwrap();
        assert!(validate_session_token(&token, &config).is_err());
    }

    #[test]
    fn legacy_flag_value_is_rejected() {
        assert!(validate_session_token("1", &test_config()).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let claims = SessionClaims {
            sub: "admin".to_string(),
            exp: now - 3600,
            iat: now - 7200,
            jti: "old".to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.session_secret.as_bytes()),
        )
        .unwrap();
        assert!(validate_session_token(&token, &config).is_err());
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("tok", &test_config());
        assert_eq!(
            cookie,
            "admin=tok; Path=/; HttpOnly; SameSite=Lax; Max-Age=604800"
        );

        let secure = AdminConfig {
            secure_cookie: true,
            ..test_config()
        };
        assert!(session_cookie("tok", &secure).ends_with("; Secure"));
        assert!(clear_session_cookie(&secure).starts_with("admin=; Path=/"));
        assert!(clear_session_cookie(&secure).contains("Max-Age=0"));
    }

    #[test]
    fn cookie_value_finds_named_cookie() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark; admin=abc.def"));
        headers.append(COOKIE, HeaderValue::from_static("consent=1"));

        assert_eq!(cookie_value(&headers, "admin"), Some("abc.def"));
        assert_eq!(cookie_value(&headers, "consent"), Some("1"));
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn cookie_value_ignores_prefix_matches() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("administrator=x"));
        assert_eq!(cookie_value(&headers, "admin"), None);
    }
}
