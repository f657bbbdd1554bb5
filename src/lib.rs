mod error;
mod redirect;
mod scope;
mod token;

// Core
pub use error::{AuthenticationError, AuthenticationErrorKind, ERROR_DOMAIN};
pub use redirect::parse_redirect_url;
pub use token::AccessToken;

// Scopes
pub use scope::{parse_scope_string, to_scope_string, Scope, ScopeType};
