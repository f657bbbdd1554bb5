use std::fmt;

/// Access level a scope grants.
///
/// General scopes are available to any application; privileged scopes
/// require platform approval. Scopes this SDK does not recognize are
/// reported as [`ScopeType::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeType {
    General,
    Privileged,
    Custom,
}

/// A named permission granted by the resource owner.
///
/// Known platform scopes are closed variants; anything else is preserved
/// verbatim in [`Scope::Custom`] so that scope strings round-trip even when
/// the server grants values this SDK predates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Trip details for trips taken through any application.
    AllTrips,
    /// Trip history taken through this application.
    History,
    /// Abbreviated trip history, without city information.
    HistoryLite,
    /// Saved places (e.g. home and work addresses).
    Places,
    /// Basic profile information.
    Profile,
    /// Request rides on the user's behalf.
    Request,
    /// Receipts for rides requested through this application.
    RequestReceipt,
    /// Render ride-tracking widgets.
    RideWidgets,
    /// A scope not in the known set, kept as its raw wire string.
    Custom(String),
}

impl Scope {
    /// Parse a single scope token. Total: unknown values become
    /// [`Scope::Custom`].
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "all_trips" => Self::AllTrips,
            "history" => Self::History,
            "history_lite" => Self::HistoryLite,
            "places" => Self::Places,
            "profile" => Self::Profile,
            "request" => Self::Request,
            "request_receipt" => Self::RequestReceipt,
            "ride_widgets" => Self::RideWidgets,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Canonical wire string for this scope.
    pub fn as_str(&self) -> &str {
        match self {
            Self::AllTrips => "all_trips",
            Self::History => "history",
            Self::HistoryLite => "history_lite",
            Self::Places => "places",
            Self::Profile => "profile",
            Self::Request => "request",
            Self::RequestReceipt => "request_receipt",
            Self::RideWidgets => "ride_widgets",
            Self::Custom(raw) => raw,
        }
    }

    pub fn scope_type(&self) -> ScopeType {
        match self {
            Self::History | Self::HistoryLite | Self::Places | Self::Profile
            | Self::RideWidgets => ScopeType::General,
            Self::AllTrips | Self::Request | Self::RequestReceipt => ScopeType::Privileged,
            Self::Custom(_) => ScopeType::Custom,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a space-delimited scope string into an ordered, de-duplicated set.
/// Order follows first appearance in the input.
pub fn parse_scope_string(raw: &str) -> Vec<Scope> {
    let mut scopes = Vec::new();
    for token in raw.split_whitespace() {
        let scope = Scope::from_raw(token);
        if !scopes.contains(&scope) {
            scopes.push(scope);
        }
    }
    scopes
}

/// Serialize a scope set back to its space-delimited wire form.
pub fn to_scope_string(scopes: &[Scope]) -> String {
    scopes
        .iter()
        .map(Scope::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
