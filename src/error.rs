/// Error domain identifier shared by every authentication error the SDK
/// produces. Stable across releases; callers key user-facing messaging on
/// the `(domain, code)` pair.
pub const ERROR_DOMAIN: &str = "com.rides.sdk.authenticationError";

/// Closed enumeration of authentication failure categories.
///
/// Each kind carries a stable numeric code (its position in this
/// declaration, starting at 0) and a canonical wire string. New kinds are
/// appended, never reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthenticationErrorKind {
    /// The user denied the authorization request.
    AccessDenied,
    ExpiredJwt,
    GeneralError,
    InternalServerError,
    InvalidAppSignature,
    InvalidAuthCode,
    InvalidFlowError,
    InvalidJwt,
    InvalidJwtSignature,
    InvalidNonce,
    InvalidRedirect,
    /// The server was unable to understand the request. Also the fallback
    /// for error codes this SDK does not recognize.
    InvalidRequest,
    /// The redirect carried neither an access token nor an error code.
    InvalidResponse,
    InvalidScope,
    InvalidSsoResponse,
    InvalidUserId,
    MalformedRequest,
    MismatchingRedirect,
    NetworkError,
    ServerError,
    UnableToPresentLogin,
    UnableToSaveAccessToken,
    Unavailable,
    /// The user cancelled the authorization flow.
    UserCancelled,
}

impl AuthenticationErrorKind {
    /// Stable numeric code for this kind.
    pub fn code(self) -> i32 {
        match self {
            Self::AccessDenied => 0,
            Self::ExpiredJwt => 1,
            Self::GeneralError => 2,
            Self::InternalServerError => 3,
            Self::InvalidAppSignature => 4,
            Self::InvalidAuthCode => 5,
            Self::InvalidFlowError => 6,
            Self::InvalidJwt => 7,
            Self::InvalidJwtSignature => 8,
            Self::InvalidNonce => 9,
            Self::InvalidRedirect => 10,
            Self::InvalidRequest => 11,
            Self::InvalidResponse => 12,
            Self::InvalidScope => 13,
            Self::InvalidSsoResponse => 14,
            Self::InvalidUserId => 15,
            Self::MalformedRequest => 16,
            Self::MismatchingRedirect => 17,
            Self::NetworkError => 18,
            Self::ServerError => 19,
            Self::UnableToPresentLogin => 20,
            Self::UnableToSaveAccessToken => 21,
            Self::Unavailable => 22,
            Self::UserCancelled => 23,
        }
    }

    /// Canonical wire string for this kind.
    pub fn raw_code(self) -> &'static str {
        match self {
            Self::AccessDenied => "access_denied",
            Self::ExpiredJwt => "expired_jwt",
            Self::GeneralError => "general_error",
            Self::InternalServerError => "internal_server_error",
            Self::InvalidAppSignature => "invalid_app_signature",
            Self::InvalidAuthCode => "invalid_auth_code",
            Self::InvalidFlowError => "invalid_flow_error",
            Self::InvalidJwt => "invalid_jwt",
            Self::InvalidJwtSignature => "invalid_jwt_signature",
            Self::InvalidNonce => "invalid_nonce",
            Self::InvalidRedirect => "invalid_redirect_uri",
            Self::InvalidRequest => "invalid_parameters",
            Self::InvalidResponse => "invalid_response",
            Self::InvalidScope => "invalid_scope",
            Self::InvalidSsoResponse => "invalid_sso_response",
            Self::InvalidUserId => "invalid_user_id",
            Self::MalformedRequest => "malformed_request",
            Self::MismatchingRedirect => "mismatching_redirect_uri",
            Self::NetworkError => "network_error",
            Self::ServerError => "server_error",
            Self::UnableToPresentLogin => "unable_to_present_login",
            Self::UnableToSaveAccessToken => "unable_to_save_access_token",
            Self::Unavailable => "temporarily_unavailable",
            Self::UserCancelled => "cancelled",
        }
    }

    /// Map a server-provided error string to a kind. `None` when the
    /// string is not a recognized code.
    fn from_raw(raw: &str) -> Option<Self> {
        let kind = match raw {
            "access_denied" => Self::AccessDenied,
            "expired_jwt" => Self::ExpiredJwt,
            "general_error" => Self::GeneralError,
            "internal_server_error" => Self::InternalServerError,
            "invalid_app_signature" => Self::InvalidAppSignature,
            "invalid_auth_code" => Self::InvalidAuthCode,
            "invalid_flow_error" => Self::InvalidFlowError,
            "invalid_jwt" => Self::InvalidJwt,
            "invalid_jwt_signature" => Self::InvalidJwtSignature,
            "invalid_nonce" => Self::InvalidNonce,
            "invalid_redirect_uri" => Self::InvalidRedirect,
            "invalid_parameters" | "invalid_request" => Self::InvalidRequest,
            "invalid_response" => Self::InvalidResponse,
            "invalid_scope" => Self::InvalidScope,
            "invalid_sso_response" => Self::InvalidSsoResponse,
            "invalid_user_id" => Self::InvalidUserId,
            "malformed_request" => Self::MalformedRequest,
            "mismatching_redirect_uri" => Self::MismatchingRedirect,
            "network_error" => Self::NetworkError,
            "server_error" => Self::ServerError,
            "unable_to_present_login" => Self::UnableToPresentLogin,
            "unable_to_save_access_token" => Self::UnableToSaveAccessToken,
            "temporarily_unavailable" => Self::Unavailable,
            "cancelled" => Self::UserCancelled,
            _ => return None,
        };
        Some(kind)
    }
}

/// An authentication failure, normalized into the SDK's stable
/// `(domain, code)` pair. Every classified redirect error is recoverable by
/// re-initiating authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{} error {} ({})", ERROR_DOMAIN, .kind.code(), .kind.raw_code())]
pub struct AuthenticationError {
    kind: AuthenticationErrorKind,
}

impl AuthenticationError {
    pub fn new(kind: AuthenticationErrorKind) -> Self {
        Self { kind }
    }

    /// Classify a raw `error` parameter value from a redirect.
    ///
    /// Pure and total: unrecognized codes fall back to
    /// [`AuthenticationErrorKind::InvalidRequest`].
    pub fn classify(raw: &str) -> Self {
        Self::new(
            AuthenticationErrorKind::from_raw(raw)
                .unwrap_or(AuthenticationErrorKind::InvalidRequest),
        )
    }

    pub fn kind(&self) -> AuthenticationErrorKind {
        self.kind
    }

    /// Stable numeric code, mirrored from the kind.
    pub fn code(&self) -> i32 {
        self.kind.code()
    }

    /// The fixed SDK error domain.
    pub fn domain(&self) -> &'static str {
        ERROR_DOMAIN
    }
}
