use std::fmt;

/// Public JSONPlaceholder endpoint the demo talks to unless told otherwise
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// The four collections served under the base endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Posts,
    Comments,
    Users,
    Todos,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Posts,
        Resource::Comments,
        Resource::Users,
        Resource::Todos,
    ];

    /// Path segment of the collection, without leading slash
    pub fn path(self) -> &'static str {
        match self {
            Resource::Posts => "posts",
            Resource::Comments => "comments",
            Resource::Users => "users",
            Resource::Todos => "todos",
        }
    }

    /// Build the absolute collection URL for the given base endpoint
    ///
    /// Trailing slashes on `base_url` are ignored so that both
    /// `https://host` and `https://host/` resolve to `https://host/posts`.
    pub fn url(self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
