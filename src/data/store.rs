use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::QueryResult;

use crate::config::DatabaseConfig;
use crate::data::models::{Entry, StoreError};
use crate::data::repositories::EntryRepository;

#[cfg(not(feature = "mysql"))]
pub type DbConnection = diesel::SqliteConnection;
#[cfg(feature = "mysql")]
pub type DbConnection = diesel::MysqlConnection;

pub type DbPool = Pool<ConnectionManager<DbConnection>>;

/// Handle to the entry table shared by all handlers.
///
/// Cloning is cheap: clones share the same connection pool. Every query runs
/// on tokio's blocking thread pool with its own pooled connection.
#[derive(Clone)]
pub struct EntryStore {
    pool: DbPool,
}

impl EntryStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Builds the connection pool. Fails if no connection can be opened
    /// within the configured connect timeout.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<DbConnection>::new(config.url.as_str());
        let builder = Pool::builder()
            .max_size(config.pool_size)
            .connection_timeout(config.connect_timeout);

        // r2d2 waits for the first connections synchronously
        let pool = tokio::task::spawn_blocking(move || builder.build(manager)).await??;
        Ok(Self::new(pool))
    }

    /// Checks that the entry table is queryable. Returns whether it has rows.
    pub async fn ping(&self) -> Result<bool, StoreError> {
        self.run(EntryRepository::has_entries).await
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<Entry>, StoreError> {
        self.run(move |conn| EntryRepository::list(conn, limit)).await
    }

    pub async fn random_sample(&self, limit: i64) -> Result<Vec<Entry>, StoreError> {
        self.run(move |conn| EntryRepository::random_sample(conn, limit))
            .await
    }

    pub async fn search(&self, word: String) -> Result<Option<Entry>, StoreError> {
        self.run(move |conn| EntryRepository::search(conn, &word)).await
    }

    async fn run<T, F>(&self, query: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut DbConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            query(&mut conn).map_err(StoreError::from)
        })
        .await?
    }
}
