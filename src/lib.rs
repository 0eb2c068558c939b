//! # Tweetbot Library
//!
//! A minimal Twitter/X client wrapper exposing a handful of bot actions:
//! post a status update, post a status update containing a link, search
//! statuses, search accounts, repost an existing status, as async methods
//! over an injected authenticated HTTP transport.
//!
//! Every operation is a one-to-one pass-through to a single remote call:
//! the client merges the caller's optional extra parameters with the
//! operation's primary field (the primary field always wins on a key
//! collision), dispatches through the transport, and returns the raw response
//! payload or transport error unmodified. There is no retry logic, no rate
//! limiting, no pagination, and no caching in this layer.
//!
//! ## Features
//!
//! - Five bot actions over the Twitter/X v1.1 API
//! - Transport injection for testing against stubs
//! - Built-in `reqwest`-based HTTP transport
//! - Structured logging via the `log` facade, with secrets redacted
//!
//! ## Example
//!
//! ```rust,no_run
//! use tweetbot::{Credentials, TweetBot};
//!
//! #[tokio::main]
//! async fn main() {
//!     let bot = TweetBot::new(Credentials::new(
//!         "consumer_key",
//!         "consumer_secret",
//!         "access_token",
//!         "access_token_secret",
//!     ));
//!
//!     match bot.search_statuses("milk tea", None).await {
//!         Ok(results) => println!("Found: {}", results),
//!         Err(e) => eprintln!("Search failed: {}", e),
//!     }
//! }
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod transport;

// Re-export commonly used types
pub use bot::TweetBot;
pub use config::Credentials;
pub use error::{BoxError, Error, Result};
pub use transport::{HttpTransport, Params, Transport};
