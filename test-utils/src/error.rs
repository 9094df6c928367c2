use thiserror::Error;

/// Errors raised while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or to create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
