//! The bot client: five Twitter/X actions over an injected transport.
//!
//! Every operation follows the same contract: merge the caller's optional
//! extra parameters with the operation's primary field(s), dispatch the
//! merged map through the transport's route, and pass the outcome through to
//! the caller unmodified. There are no retries, no timeouts, and no
//! deduplication: invoking an operation twice produces two independent
//! remote calls.

use log::{debug, info};
use serde_json::{Map, Value};

use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::transport::{HttpTransport, Params, Transport};

/// Route for posting a status update.
const STATUS_UPDATE: &str = "statuses/update";
/// Route for searching statuses.
const STATUS_SEARCH: &str = "search/tweets";
/// Route for searching accounts.
const ACCOUNT_SEARCH: &str = "users/search";
/// Route for reposting a status by id.
const STATUS_RETWEET: &str = "statuses/retweet/:id";

/// Whether an operation reads from or writes to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Read,
    Write,
}

/// Sanitizes caller-supplied text for safe logging by truncating and
/// replacing control characters that could manipulate log output.
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let truncated: String = sanitized.chars().take(max_len).collect();
        format!("{}... [truncated, {} total bytes]", truncated, text.len())
    } else {
        sanitized
    }
}

/// Builds the outbound parameter map for an operation.
///
/// With no extra parameters the map contains exactly the primary entries.
/// Otherwise the extras are copied first and each primary field is set last,
/// so on a key collision the primary value always wins. Extras that are not a
/// JSON object cannot accept the primary field and fail the merge; the
/// transport is never invoked for such a call.
pub(crate) fn merge_params(
    primary: &[(&str, Value)],
    extra: Option<Value>,
) -> Result<Params> {
    let mut params = match extra {
        None => Map::new(),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(Error::Merge(format!(
                "extra parameters must be a JSON object, got {}",
                json_type_name(&other)
            )))
        }
    };
    for (field, value) in primary {
        params.insert((*field).to_string(), value.clone());
    }
    Ok(params)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A minimal Twitter/X bot client.
///
/// Constructed once with [`Credentials`] and holding its transport for the
/// lifetime of the instance. Operations take `&self` and are independent:
/// concurrent calls from the same instance proceed fully in parallel.
///
/// # Example
///
/// ```rust,no_run
/// use tweetbot::{Credentials, TweetBot};
///
/// #[tokio::main]
/// async fn main() {
///     let bot = TweetBot::new(Credentials::new(
///         "consumer_key",
///         "consumer_secret",
///         "access_token",
///         "access_token_secret",
///     ));
///     match bot.post_status("hello world", None).await {
///         Ok(response) => println!("Posted: {}", response),
///         Err(e) => eprintln!("Failed to post status: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct TweetBot<T = HttpTransport> {
    pub(crate) transport: T,
}

impl TweetBot<HttpTransport> {
    /// Creates a bot client backed by the default HTTP transport.
    ///
    /// The credentials are forwarded verbatim to the transport's constructor.
    /// Construction is configuration only and never fails; authentication
    /// problems surface on the first API call.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_transport(HttpTransport::connect(credentials))
    }
}

impl<T: Transport> TweetBot<T> {
    /// Creates a bot client over an externally supplied transport.
    ///
    /// This is the injection point for substituting a stub transport in
    /// tests.
    pub fn with_transport(transport: T) -> Self {
        TweetBot { transport }
    }

    /// Merges and dispatches one request, passing the outcome through.
    async fn dispatch(
        &self,
        verb: Verb,
        route: &str,
        primary: &[(&str, Value)],
        extra: Option<Value>,
    ) -> Result<Value> {
        let params = merge_params(primary, extra)?;
        debug!(
            "Dispatching {:?} to route '{}' with {} parameter(s)",
            verb,
            route,
            params.len()
        );

        let outcome = match verb {
            Verb::Read => self.transport.get(route, &params).await,
            Verb::Write => self.transport.post(route, &params).await,
        };
        outcome.map_err(Error::Transport)
    }

    /// Updates the authenticating user's current status, also known as
    /// tweeting.
    ///
    /// # Parameters
    ///
    /// - `status`: the text of the status update
    /// - `extra`: additional optional parameters as a JSON object
    ///
    /// # Returns
    ///
    /// The raw response payload, or the transport's error passed through
    /// verbatim.
    pub async fn post_status(&self, status: &str, extra: Option<Value>) -> Result<Value> {
        info!(
            "Starting status post for text: '{}'",
            sanitize_for_logging(status, 100)
        );
        self.dispatch(
            Verb::Write,
            STATUS_UPDATE,
            &[("status", Value::from(status))],
            extra,
        )
        .await
    }

    /// Posts a status update containing a link.
    ///
    /// Sets both the `status` and `attachment_url` fields together; when no
    /// status text is supplied the `status` field is sent as JSON null.
    ///
    /// # Parameters
    ///
    /// - `url`: the link to attach to the status
    /// - `status`: optional text of the status update
    /// - `extra`: additional optional parameters as a JSON object
    pub async fn post_status_with_link(
        &self,
        url: &str,
        status: Option<&str>,
        extra: Option<Value>,
    ) -> Result<Value> {
        info!(
            "Starting status post with link: '{}'",
            sanitize_for_logging(url, 100)
        );
        self.dispatch(
            Verb::Write,
            STATUS_UPDATE,
            &[
                ("status", status.map_or(Value::Null, Value::from)),
                ("attachment_url", Value::from(url)),
            ],
            extra,
        )
        .await
    }

    /// Returns a collection of relevant statuses matching a search query.
    ///
    /// # Parameters
    ///
    /// - `q`: the search query, 500 characters maximum including operators
    /// - `extra`: additional optional parameters as a JSON object
    pub async fn search_statuses(&self, q: &str, extra: Option<Value>) -> Result<Value> {
        info!(
            "Starting status search for query: '{}'",
            sanitize_for_logging(q, 100)
        );
        self.dispatch(Verb::Read, STATUS_SEARCH, &[("q", Value::from(q))], extra)
            .await
    }

    /// Provides a simple, relevance-based search over public user accounts.
    ///
    /// # Parameters
    ///
    /// - `q`: the search query to run against people search
    /// - `extra`: additional optional parameters as a JSON object
    pub async fn search_accounts(&self, q: &str, extra: Option<Value>) -> Result<Value> {
        info!(
            "Starting account search for query: '{}'",
            sanitize_for_logging(q, 100)
        );
        self.dispatch(Verb::Read, ACCOUNT_SEARCH, &[("q", Value::from(q))], extra)
            .await
    }

    /// Reposts an existing status. Returns the original status with repost
    /// details embedded.
    ///
    /// The identifier travels in the parameter map like every other
    /// operation's primary field; the transport substitutes it into the
    /// route's `:id` segment.
    ///
    /// # Parameters
    ///
    /// - `id`: the numerical id of the status to repost
    pub async fn repost_status(&self, id: &str) -> Result<Value> {
        info!(
            "Starting repost of status id: '{}'",
            sanitize_for_logging(id, 100)
        );
        self.dispatch(
            Verb::Write,
            STATUS_RETWEET,
            &[("id", Value::from(id))],
            None,
        )
        .await
    }
}
