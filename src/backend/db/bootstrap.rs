/**
 * Connection Bootstrap
 *
 * Creates the Postgres connection pool before the server starts listening.
 *
 * # Policy
 *
 * 1. Open one connection (bounded by `ATTEMPT_TIMEOUT`), then the pool,
 *    and validate it with `SELECT 1`
 * 2. On failure, wait a fixed backoff (5 seconds) and try again
 * 3. Give up after a fixed number of attempts (5)
 *
 * Exhausting the attempts is fatal: the caller must exit instead of serving
 * requests against an unusable pool. There is no retry once the server is
 * running; reconnection after that point is left to the sqlx pool itself.
 */

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgConnection, PgPool};
use thiserror::Error;

/// Maximum number of connection attempts at startup
pub const MAX_CONNECT_ATTEMPTS: u32 = 5;

/// Wait between two connection attempts
pub const CONNECT_BACKOFF: Duration = Duration::from_secs(5);

/// Upper bound for a single connection attempt
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(3);

/// Retry policy for the startup connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_CONNECT_ATTEMPTS,
            backoff: CONNECT_BACKOFF,
        }
    }
}

/// Startup connection failure
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("database unreachable after {attempts} attempts: {last_error}")]
    Exhausted {
        attempts: u32,
        #[source]
        last_error: sqlx::Error,
    },
}

/// Run `attempt` until it succeeds or the policy is exhausted
///
/// `attempt` receives the 1-based attempt number. The backoff is slept
/// between attempts, never after the last one. A policy with zero attempts
/// still tries once.
pub async fn retry_connect<T, F, Fut>(policy: RetryPolicy, mut attempt: F) -> Result<T, BootstrapError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut current = 1;

    loop {
        match attempt(current).await {
            Ok(value) => {
                tracing::info!("Database connection established (attempt {})", current);
                return Ok(value);
            }
            Err(e) => {
                tracing::error!(
                    "Database connection attempt {}/{} failed: {}",
                    current,
                    max_attempts,
                    e
                );

                if current >= max_attempts {
                    return Err(BootstrapError::Exhausted {
                        attempts: current,
                        last_error: e,
                    });
                }

                tracing::info!("Retrying in {} seconds...", policy.backoff.as_secs());
                tokio::time::sleep(policy.backoff).await;
                current += 1;
            }
        }
    }
}

/// Create a validated connection pool, retrying per `policy`
///
/// # Arguments
///
/// * `database_url` - Postgres connection URL
/// * `max_connections` - Upper bound of the pool size
/// * `policy` - Retry policy
pub async fn connect_with_retry(
    database_url: &str,
    max_connections: u32,
    policy: RetryPolicy,
) -> Result<PgPool, BootstrapError> {
    retry_connect(policy, move |_| open_pool(database_url, max_connections)).await
}

/// One connection attempt
///
/// A single checked connection surfaces the real connect error instead of the
/// pool's generic acquire timeout.
async fn open_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let options: PgConnectOptions = database_url.parse()?;

    let check = tokio::time::timeout(ATTEMPT_TIMEOUT, PgConnection::connect_with(&options))
        .await
        .map_err(|_| {
            sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                format!("connection timed out after {} seconds", ATTEMPT_TIMEOUT.as_secs()),
            ))
        })??;
    check.close().await?;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ATTEMPT_TIMEOUT)
        .connect_with(options)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.backoff, Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausts_after_five_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let start = Instant::now();

        let counter = calls.clone();
        let result: Result<(), _> = retry_connect(RetryPolicy::default(), move |_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(sqlx::Error::PoolTimedOut)
            }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 5);
        match result {
            Err(BootstrapError::Exhausted { attempts, .. }) => assert_eq!(attempts, 5),
            Ok(_) => panic!("Expected exhausted retries"),
        }

        // Four waits between five attempts, none after the last.
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(20), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(25), "elapsed {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_succeeds_on_third_attempt() {
        let calls = Arc::new(AtomicU32::new(0));
        let start = Instant::now();

        let counter = calls.clone();
        let result = retry_connect(RetryPolicy::default(), move |attempt| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                if attempt < 3 {
                    Err(sqlx::Error::PoolTimedOut)
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(10), "elapsed {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(15), "elapsed {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_tries_once() {
        let policy = RetryPolicy {
            max_attempts: 0,
            backoff: Duration::ZERO,
        };
        let calls = Arc::new(AtomicU32::new(0));

        let counter = calls.clone();
        let result: Result<(), _> = retry_connect(policy, move |_| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err(sqlx::Error::PoolClosed)
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unreachable_database_fails_fast() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let policy = RetryPolicy {
            max_attempts: 1,
            backoff: CONNECT_BACKOFF,
        };
        let start = std::time::Instant::now();

        let result = connect_with_retry(&format!("postgres://u:p@127.0.0.1:{port}/db"), 5, policy).await;

        let elapsed = start.elapsed();
        assert!(elapsed < Duration::from_secs(5), "elapsed {:?}", elapsed);
        match result {
            Err(BootstrapError::Exhausted { attempts, last_error }) => {
                assert_eq!(attempts, 1);
                assert!(
                    !matches!(last_error, sqlx::Error::PoolTimedOut),
                    "last error {:?}",
                    last_error
                );
            }
            Ok(_) => panic!("Expected connection failure"),
        }
    }
}
