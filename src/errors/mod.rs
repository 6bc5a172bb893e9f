use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Every failure the tournament store can report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection unavailable: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("{context}: {source}")]
    Query {
        context: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("player name must not be empty")]
    EmptyName,

    #[error("player {0} cannot play against themselves")]
    SelfMatch(i32),

    #[error("player {0} is not registered")]
    UnknownPlayer(i32),
}

impl StoreError {
    /// True for errors raised before anything reached the database.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            StoreError::EmptyName | StoreError::SelfMatch(_) | StoreError::UnknownPlayer(_)
        )
    }
}

/// Attach the failed operation to a rusqlite error
pub trait QueryContext<T> {
    fn query_context(self, context: &'static str) -> StoreResult<T>;
}

impl<T> QueryContext<T> for rusqlite::Result<T> {
    fn query_context(self, context: &'static str) -> StoreResult<T> {
        self.map_err(|source| StoreError::Query { context, source })
    }
}
