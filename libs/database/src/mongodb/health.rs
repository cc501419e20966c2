use mongodb::Database;
use mongodb::bson::doc;
use std::time::{Duration, Instant};

use crate::common::{DatabaseError, DatabaseResult};

/// Send `{ping: 1}` to the database and return the round-trip time.
pub async fn ping(db: &Database) -> DatabaseResult<Duration> {
    let start = Instant::now();
    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;
    Ok(start.elapsed())
}
