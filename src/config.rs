//! Configuration module for the Twitter/X API credentials.
//!
//! This module contains the [`Credentials`] struct holding the four secrets
//! required to authenticate with the Twitter/X API, along with an
//! environment-variable loader for convenience.

use std::env;
use std::fmt;

use log::{debug, info};

use crate::error::BoxError;

/// Masks a secret for safe logging, keeping only a short prefix and suffix.
///
/// Tokens shorter than 16 characters keep only the prefix; anything shorter
/// than 8 characters is shown in full behind an ellipsis (such values are
/// test fixtures, not real credentials).
fn mask_secret(secret: &str) -> String {
    let len = secret.len();
    if len > 16 {
        format!("{}...{}", &secret[..4], &secret[len - 4..])
    } else if len > 8 {
        format!("{}...", &secret[..4])
    } else {
        format!("{}...", secret)
    }
}

/// Reads a required environment variable, failing with a descriptive error.
fn require_env(name: &str) -> Result<String, BoxError> {
    match env::var(name) {
        Ok(value) if value.is_empty() => {
            Err(format!("{} environment variable is set but empty", name).into())
        }
        Ok(value) => {
            debug!("Loaded {} (masked): {}", name, mask_secret(&value));
            Ok(value)
        }
        Err(_) => Err(format!("Missing {} environment variable", name).into()),
    }
}

/// The four opaque secrets for authenticating with the Twitter/X API.
///
/// Credentials are supplied once at construction, owned by the transport for
/// the lifetime of the client instance, and never mutated. They are never
/// written to logs in full: the `Debug` implementation redacts every field.
///
/// # Example
///
/// ```rust
/// use tweetbot::Credentials;
///
/// let credentials = Credentials::new(
///     "consumer_key",
///     "consumer_secret",
///     "access_token",
///     "access_token_secret",
/// );
/// ```
#[derive(Clone)]
pub struct Credentials {
    /// The application's consumer key (API key).
    pub consumer_key: String,
    /// The application's consumer secret (API secret key).
    pub consumer_secret: String,
    /// The access token for the authenticating user.
    pub access_token: String,
    /// The access token secret for the authenticating user.
    pub access_token_secret: String,
}

impl Credentials {
    /// Creates a new set of credentials from the four secret strings.
    ///
    /// No validation or network activity happens here; bad credentials
    /// surface later, on the first API call.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Loads credentials from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `TWITTER_CONSUMER_KEY`: the application's consumer key
    /// - `TWITTER_CONSUMER_SECRET`: the application's consumer secret
    /// - `TWITTER_ACCESS_TOKEN`: the user's access token
    /// - `TWITTER_ACCESS_TOKEN_SECRET`: the user's access token secret
    ///
    /// # Returns
    ///
    /// - `Ok(Credentials)`: if all four variables are present and non-empty
    /// - `Err(...)`: naming the first missing or empty variable
    pub fn from_env() -> Result<Self, BoxError> {
        info!("Loading Twitter credentials from environment variables");

        let credentials = Credentials {
            consumer_key: require_env("TWITTER_CONSUMER_KEY")?,
            consumer_secret: require_env("TWITTER_CONSUMER_SECRET")?,
            access_token: require_env("TWITTER_ACCESS_TOKEN")?,
            access_token_secret: require_env("TWITTER_ACCESS_TOKEN_SECRET")?,
        };

        info!("Twitter credentials loaded successfully");
        Ok(credentials)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &"[REDACTED]")
            .field("consumer_secret", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .field("access_token_secret", &"[REDACTED]")
            .finish()
    }
}
