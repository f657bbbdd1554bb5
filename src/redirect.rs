use std::collections::HashMap;

use url::Url;

use crate::error::{AuthenticationError, AuthenticationErrorKind};
use crate::scope::parse_scope_string;
use crate::token::{expiration_from_now, AccessToken};

/// Parse an OAuth redirect callback URL into an access token.
///
/// Parameters may arrive in the fragment, the query, or split across both;
/// the two components are extracted independently and merged. When the same
/// key appears in both, the fragment value wins. An `error` parameter in
/// either component overrides everything else and is classified via
/// [`AuthenticationError::classify`].
///
/// Only `access_token` is mandatory. A malformed optional parameter (a bare
/// key with no value, or an unparseable `expires_in`) degrades to an absent
/// field rather than failing the parse.
pub fn parse_redirect_url(url: &Url) -> Result<AccessToken, AuthenticationError> {
    let mut params: HashMap<String, String> = HashMap::new();
    if let Some(fragment) = url.fragment() {
        collect_params(fragment, &mut params);
    }
    if let Some(query) = url.query() {
        collect_params(query, &mut params);
    }

    if let Some(error) = params.get("error") {
        return Err(AuthenticationError::classify(error));
    }

    let token_string = params
        .get("access_token")
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AuthenticationError::new(AuthenticationErrorKind::InvalidResponse))?;

    let refresh_token = params
        .get("refresh_token")
        .filter(|value| !value.is_empty())
        .cloned();

    let expiration_date = params
        .get("expires_in")
        .and_then(|value| value.parse::<f64>().ok())
        .and_then(expiration_from_now);

    let granted_scopes = params
        .get("scope")
        .map(|value| parse_scope_string(value))
        .unwrap_or_default();

    Ok(AccessToken::new(
        token_string.as_str(),
        refresh_token,
        expiration_date,
        granted_scopes,
    ))
}

/// Extract `key=value` pairs from one URL component into `params`,
/// percent-decoding as it goes. Existing keys are kept, so the component
/// extracted first takes precedence, and a repeated key within one
/// component resolves to its first occurrence. A bare key decodes to an
/// empty value, which the field reads above treat as absent.
///
/// Both components are decoded with form-urlencoding rules, so a literal
/// `+` reads as a space in the fragment too. The platform percent-encodes
/// `+` in token and scope values, so the two components share one decoding
/// policy rather than splitting on convention.
fn collect_params(component: &str, params: &mut HashMap<String, String>) {
    for (key, value) in url::form_urlencoded::parse(component.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
}
