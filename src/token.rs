use std::time::{Duration, SystemTime};

use serde::Deserialize;

use crate::scope::{parse_scope_string, to_scope_string, Scope};

/// An OAuth access token granted by the platform.
///
/// Immutable once constructed. A token always has a non-empty token string;
/// the remaining fields reflect what the server actually sent.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessToken {
    token_string: String,
    refresh_token: Option<String>,
    expiration_date: Option<SystemTime>,
    granted_scopes: Vec<Scope>,
}

/// Wire shape of a JSON token response. `expires_in` is relative seconds;
/// servers send it as either an integer or a float.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<f64>,
    #[serde(default)]
    scope: Option<String>,
}

impl AccessToken {
    pub fn new(
        token_string: impl Into<String>,
        refresh_token: Option<String>,
        expiration_date: Option<SystemTime>,
        granted_scopes: Vec<Scope>,
    ) -> Self {
        Self {
            token_string: token_string.into(),
            refresh_token,
            expiration_date,
            granted_scopes,
        }
    }

    /// Decode a token from a raw JSON document (e.g. a token-refresh
    /// response body).
    ///
    /// The expiration date is computed from the relative `expires_in`
    /// field at decode time. Malformed or truncated JSON, and a missing or
    /// non-string `access_token`, fail on this channel; the other fields
    /// degrade to absent/empty.
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let response: TokenResponse = serde_json::from_slice(bytes)?;
        Ok(Self {
            token_string: response.access_token,
            refresh_token: response.refresh_token,
            expiration_date: response.expires_in.and_then(expiration_from_now),
            granted_scopes: response
                .scope
                .as_deref()
                .map(parse_scope_string)
                .unwrap_or_default(),
        })
    }

    pub fn token_string(&self) -> &str {
        &self.token_string
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn expiration_date(&self) -> Option<SystemTime> {
        self.expiration_date
    }

    pub fn granted_scopes(&self) -> &[Scope] {
        &self.granted_scopes
    }

    /// Space-delimited form of the granted scopes, in grant order.
    pub fn scope_string(&self) -> String {
        to_scope_string(&self.granted_scopes)
    }

    /// Whether the expiration date has passed. Tokens without an
    /// expiration date never report expired.
    pub fn is_expired(&self) -> bool {
        match self.expiration_date {
            Some(expiration) => expiration <= SystemTime::now(),
            None => false,
        }
    }
}

/// Convert a relative `expires_in` seconds value into an absolute instant.
/// Negative, non-finite, or overflowing values yield `None`.
pub(crate) fn expiration_from_now(seconds: f64) -> Option<SystemTime> {
    let duration = Duration::try_from_secs_f64(seconds).ok()?;
    SystemTime::now().checked_add(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_EXPIRATION_DIFFERENCE: Duration = Duration::from_secs(2);

    fn assert_close_to(actual: SystemTime, expected: SystemTime) {
        let diff = match actual.duration_since(expected) {
            Ok(d) => d,
            Err(e) => e.duration(),
        };
        assert!(diff <= MAX_EXPIRATION_DIFFERENCE, "off by {diff:?}");
    }

    #[test]
    fn from_json_full_response() {
        let body = br#"{
            "access_token": "tokenString1234",
            "refresh_token": "refreshToken",
            "expires_in": 3600,
            "scope": "profile history"
        }"#;
        let expected_expiration = SystemTime::now() + Duration::from_secs(3600);

        let token = AccessToken::from_json(body).unwrap();
        assert_eq!(token.token_string(), "tokenString1234");
        assert_eq!(token.refresh_token(), Some("refreshToken"));
        assert_eq!(token.scope_string(), "profile history");
        assert_close_to(token.expiration_date().unwrap(), expected_expiration);
    }

    #[test]
    fn from_json_access_token_only() {
        let token = AccessToken::from_json(br#"{"access_token": "tokenString1234"}"#).unwrap();
        assert_eq!(token.token_string(), "tokenString1234");
        assert!(token.refresh_token().is_none());
        assert!(token.expiration_date().is_none());
        assert!(token.granted_scopes().is_empty());
    }

    #[test]
    fn from_json_truncated_document_fails() {
        let result = AccessToken::from_json(br#"{"access_token": "tokenString1234""#);
        assert!(result.is_err());
    }

    #[test]
    fn from_json_missing_access_token_fails() {
        let result = AccessToken::from_json(br#"{"refresh_token": "rt"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn from_json_non_string_access_token_fails() {
        let result = AccessToken::from_json(br#"{"access_token": 42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn from_json_fractional_expires_in() {
        let expected = SystemTime::now() + Duration::from_secs_f64(10030.23);
        let token =
            AccessToken::from_json(br#"{"access_token": "t", "expires_in": 10030.23}"#).unwrap();
        assert_close_to(token.expiration_date().unwrap(), expected);
    }

    #[test]
    fn from_json_unknown_scope_round_trips() {
        let token =
            AccessToken::from_json(br#"{"access_token": "t", "scope": "profile offline"}"#)
                .unwrap();
        assert_eq!(token.scope_string(), "profile offline");
    }

    #[test]
    fn expiration_from_now_rejects_negative_and_non_finite() {
        assert!(expiration_from_now(-1.0).is_none());
        assert!(expiration_from_now(f64::NAN).is_none());
        assert!(expiration_from_now(f64::INFINITY).is_none());
    }

    #[test]
    fn expiration_from_now_rejects_values_past_system_time_range() {
        assert!(expiration_from_now(1e19).is_none());
        assert!(expiration_from_now(f64::MAX).is_none());
    }

    #[test]
    fn from_json_huge_expires_in_degrades_to_absent() {
        let token =
            AccessToken::from_json(br#"{"access_token": "t", "expires_in": 10000000000000000000}"#)
                .unwrap();
        assert_eq!(token.token_string(), "t");
        assert!(token.expiration_date().is_none());
    }

    #[test]
    fn is_expired_for_past_expiration() {
        let token = AccessToken::new(
            "t",
            None,
            Some(SystemTime::now() - Duration::from_secs(60)),
            Vec::new(),
        );
        assert!(token.is_expired());
    }

    #[test]
    fn is_expired_false_without_expiration() {
        let token = AccessToken::new("t", None, None, Vec::new());
        assert!(!token.is_expired());
    }

    #[test]
    fn is_expired_false_for_future_expiration() {
        let token = AccessToken::new(
            "t",
            None,
            Some(SystemTime::now() + Duration::from_secs(3600)),
            Vec::new(),
        );
        assert!(!token.is_expired());
    }
}
