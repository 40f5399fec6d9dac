//! Credentials attached to outgoing requests

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

use crate::error::{DirectLinkError, Result};

pub const AUTHTYPE_NOAUTH: &str = "noauth";
pub const AUTHTYPE_BEARER_TOKEN: &str = "bearertoken";
pub const AUTHTYPE_BASIC: &str = "basic";

/// Adds authentication to a request before it is sent
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// Short name of the scheme (e.g. "bearertoken")
    fn authentication_type(&self) -> &'static str;

    /// Decorate the request with credentials
    fn authenticate(&self, builder: RequestBuilder) -> Result<RequestBuilder>;

    /// Check the configuration without sending anything
    fn validate(&self) -> Result<()>;
}

/// Sends requests without credentials (mock servers, local proxies)
#[derive(Debug, Default, Clone)]
pub struct NoAuthAuthenticator;

impl Authenticator for NoAuthAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_NOAUTH
    }

    fn authenticate(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        Ok(builder)
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Sends a caller-supplied bearer token
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    bearer_token: String,
}

impl BearerTokenAuthenticator {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
        }
    }

    /// Swap in a refreshed token
    pub fn set_bearer_token(&mut self, bearer_token: impl Into<String>) {
        self.bearer_token = bearer_token.into();
    }
}

impl fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("bearer_token", &"<redacted>")
            .finish()
    }
}

impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BEARER_TOKEN
    }

    fn authenticate(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        Ok(builder.header(AUTHORIZATION, format!("Bearer {}", self.bearer_token)))
    }

    fn validate(&self) -> Result<()> {
        if self.bearer_token.trim().is_empty() {
            return Err(DirectLinkError::Config(
                "the bearer token must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Sends HTTP basic credentials
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn header_value(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", BASE64.encode(raw.as_bytes()))
    }
}

impl fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BASIC
    }

    fn authenticate(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        Ok(builder.header(AUTHORIZATION, self.header_value()))
    }

    fn validate(&self) -> Result<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(DirectLinkError::Config(
                "basic authentication requires both a username and a password".to_string(),
            ));
        }
        for (label, value) in [("username", &self.username), ("password", &self.password)] {
            if has_bad_first_or_last_char(value) {
                return Err(DirectLinkError::Config(format!(
                    "the {} must not start or end with '{{', '}}' or '\"'",
                    label
                )));
            }
        }
        Ok(())
    }
}

/// True when a configured value looks like an unexpanded template
pub(crate) fn has_bad_first_or_last_char(value: &str) -> bool {
    const BAD: [char; 3] = ['{', '}', '"'];
    value.starts_with(&BAD[..]) || value.ends_with(&BAD[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_validation() {
        assert!(BearerTokenAuthenticator::new("abc").validate().is_ok());
        assert!(BearerTokenAuthenticator::new("  ").validate().is_err());
    }

    #[test]
    fn test_bearer_token_debug_is_redacted() {
        let auth = BearerTokenAuthenticator::new("super-secret");
        let debug = format!("{:?}", auth);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }

    #[test]
    fn test_basic_header_value() {
        let auth = BasicAuthenticator::new("user", "pass");
        assert_eq!(auth.header_value(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_basic_validation() {
        assert!(BasicAuthenticator::new("user", "pass").validate().is_ok());
        assert!(BasicAuthenticator::new("", "pass").validate().is_err());
        assert!(BasicAuthenticator::new("{user}", "pass").validate().is_err());
    }

    #[test]
    fn test_authentication_types() {
        assert_eq!(NoAuthAuthenticator.authentication_type(), "noauth");
        assert_eq!(
            BearerTokenAuthenticator::new("t").authentication_type(),
            "bearertoken"
        );
        assert_eq!(BasicAuthenticator::new("u", "p").authentication_type(), "basic");
    }

    #[test]
    fn test_has_bad_first_or_last_char() {
        assert!(has_bad_first_or_last_char("{url}"));
        assert!(has_bad_first_or_last_char("\"quoted"));
        assert!(!has_bad_first_or_last_char("https://example.com"));
        assert!(!has_bad_first_or_last_char(""));
    }
}
