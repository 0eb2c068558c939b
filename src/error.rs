//! Error types for the tweetbot client.
//!
//! Every failure surfaces to the caller through [`Error`]; nothing is
//! swallowed internally and no failure is fatal to the client instance.

use thiserror::Error;

/// Boxed error type used for opaque pass-through errors from the transport.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced by client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Building the merged parameter map failed before anything was sent.
    ///
    /// This happens when the caller's extra parameters are not a JSON object
    /// and therefore cannot accept the operation's primary field. The
    /// transport is never invoked in this case.
    #[error("failed to merge request parameters: {0}")]
    Merge(String),

    /// The transport reported an error completing the remote call.
    ///
    /// The underlying error is passed through verbatim: it is not
    /// interpreted, classified, or retried here. Whether it is transient or
    /// permanent is left to the transport and the caller.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
