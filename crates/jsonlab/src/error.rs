/// Failure of a single fetch-and-rank unit
///
/// Both network variants carry the URL that was being fetched so that the
/// message printed to stderr says which collection failed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The collection could not be retrieved: connection, DNS, body read or
    /// non-success HTTP status.
    #[error("Failed to fetch {url}: {message}")]
    Transport { url: String, message: String },

    /// The body was retrieved but is not a JSON array of the expected records.
    #[error("Failed to parse {url}: {message}")]
    Decode { url: String, message: String },

    /// The task driving the unit panicked or was aborted before settling.
    #[error("Task did not settle: {0}")]
    Task(String),
}

/// Terminal state of a fetch-and-rank unit
pub type Settled<T> = std::result::Result<T, Error>;
