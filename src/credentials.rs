//! Credentials for the Kuwo web API.
//!
//! The service gates its JSON endpoints behind a `secret` request header and
//! the session cookies of a logged-in browser. Both are copied manually from
//! the browser's developer tools; there is no login flow.

use crate::error::{KuwoError, Result};

/// Secrets shorter than this are rejected as copy-paste mistakes.
const MIN_SECRET_LEN: usize = 50;

/// A static secret token plus a raw cookie string.
///
/// Immutable after construction. Built once at startup and borrowed by
/// [`crate::KuwoApi::new`].
#[derive(Debug, Clone)]
pub struct Credentials {
    secret: String,
    cookie: String,
}

impl Credentials {
    /// Create credentials from a secret token and a raw `Cookie` header value.
    pub fn new<S1: Into<String>, S2: Into<String>>(secret: S1, cookie: S2) -> Self {
        Self {
            secret: secret.into(),
            cookie: cookie.into(),
        }
    }

    /// The secret token sent in the `secret` request header.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Check that the secret looks plausible.
    ///
    /// # Errors
    ///
    /// Returns `BadCredentials` when the secret is empty or too short to be
    /// a real token.
    pub fn validate(&self) -> Result<()> {
        if self.secret.is_empty() {
            return Err(KuwoError::BadCredentials("secret is not set".to_string()));
        }
        if self.secret.len() < MIN_SECRET_LEN {
            return Err(KuwoError::BadCredentials(format!(
                "secret is too short ({} chars)",
                self.secret.len()
            )));
        }
        Ok(())
    }

    /// Parse the raw cookie string into key/value pairs.
    ///
    /// The browser copies cookies as `"k1=v1; k2=v2"`. Each item is split
    /// once on the first `'='`; items without one are skipped.
    pub fn cookie_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cookie
            .split("; ")
            .filter_map(|item| item.split_once('='))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_pairs_parsing() {
        let creds = Credentials::new("x", "a=1; b=2=3; c");
        let pairs: Vec<_> = creds.cookie_pairs().collect();
        // "c" has no '=' and is skipped; "b=2=3" splits on the first '='
        assert_eq!(pairs, vec![("a", "1"), ("b", "2=3")]);
    }

    #[test]
    fn test_cookie_pairs_empty() {
        let creds = Credentials::new("x", "");
        assert_eq!(creds.cookie_pairs().count(), 0);
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        let creds = Credentials::new("", "");
        assert!(matches!(
            creds.validate(),
            Err(KuwoError::BadCredentials(_))
        ));
    }

    #[test]
    fn test_validate_rejects_short_secret() {
        let creds = Credentials::new("too-short", "");
        assert!(matches!(
            creds.validate(),
            Err(KuwoError::BadCredentials(_))
        ));
    }

    #[test]
    fn test_validate_accepts_plausible_secret() {
        let creds = Credentials::new("a".repeat(72), "k=v");
        assert!(creds.validate().is_ok());
    }
}
