/// Store-agnostic error returned by probe helpers
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Store answered a probe with an error
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
