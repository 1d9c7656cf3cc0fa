//! API authentication mode selection.
//!
//! The TrueNAS v2.0 API accepts either HTTP Basic (username + password) or an
//! API key sent as a bearer token. The two are mutually exclusive: supplying a
//! username selects Basic, otherwise the secret is treated as an API key.

/// How a request authenticates against the appliance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// HTTP Basic with username and password. Only root works on TrueNAS.
    Basic { user: String, secret: String },
    /// `Authorization: Bearer <token>` with an API key.
    Bearer { token: String },
}

impl AuthMode {
    /// Pick the auth mode from the optional username and the secret.
    ///
    /// An empty username counts as absent.
    pub fn resolve(user: Option<&str>, secret: &str) -> AuthMode {
        match user {
            Some(u) if !u.is_empty() => AuthMode::Basic {
                user: u.to_string(),
                secret: secret.to_string(),
            },
            _ => AuthMode::Bearer {
                token: secret.to_string(),
            },
        }
    }
}
