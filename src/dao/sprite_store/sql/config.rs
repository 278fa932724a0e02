/// Default SQLite location when `DATABASE_URL` is not set.
///
/// `mode=rwc` lets SQLite create the file on first start.
const DEFAULT_DATABASE_URL: &str = "sqlite://data/sprite-forge.db?mode=rwc";

/// Runtime configuration describing how to reach the SQL database.
#[derive(Debug, Clone)]
pub struct SqlConfig {
    /// Connection URL understood by the ORM (`sqlite://…`).
    pub url: String,
    /// Upper bound for the connection pool.
    pub max_connections: u32,
}

impl SqlConfig {
    /// Construct a configuration from an explicit connection URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
        }
    }

    /// Override the pool size.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Build a configuration from `DATABASE_URL`, falling back to the
    /// bundled SQLite file.
    pub fn from_env() -> Self {
        let url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        Self::new(url)
    }
}
