use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use tokio::sync::{Mutex, OnceCell};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::error::{ConnectionError, QueryError};
use crate::models::User;

const SELECT_ALL_USERS: &str = "SELECT * FROM users";

// the one query the api needs, kept behind a trait so the router
// can be exercised without a running postgres
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, QueryError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Failed(String)
}

type ConnectOutcome = Result<Mutex<PgConnection>, ConnectionError>;

/// Handle to the single PostgreSQL connection shared by every request.
///
/// The connection is opened by a background task. Until that task finishes the
/// handle reports [`ConnectionStatus::Connecting`] and queries fail fast with
/// [`QueryError::NotConnected`]. A failed connect is never retried.
#[derive(Clone, Default)]
pub struct Database {
    outcome: Arc<OnceCell<ConnectOutcome>>
}

impl Database {

    pub fn new() -> Self {

        Self::default()

    }

    pub fn connect_in_background(&self, options: PgConnectOptions) -> JoinHandle<()> {

        let outcome = Arc::clone(&self.outcome);

        tokio::spawn(async move {

            let result = match PgConnection::connect_with(&options).await {
                Ok(connection) => {
                    info!("Connected to PostgreSQL");
                    Ok(Mutex::new(connection))
                }
                Err(e) => {
                    let err = ConnectionError::from(e);
                    error!(error = %err, "Connection error");
                    Err(err)
                }
            };

            if outcome.set(result).is_err() {
                warn!("database connection was already resolved, dropping the new one");
            }

        })

    }

    pub fn status(&self) -> ConnectionStatus {

        match self.outcome.get() {
            None => ConnectionStatus::Connecting,
            Some(Ok(_)) => ConnectionStatus::Connected,
            Some(Err(e)) => ConnectionStatus::Failed(e.to_string())
        }

    }

}

#[async_trait]
impl UserStore for Database {

    async fn fetch_users(&self) -> Result<Vec<User>, QueryError> {

        let connection = match self.outcome.get() {
            None => return Err(QueryError::NotConnected),
            Some(Err(e)) => return Err(QueryError::ConnectionFailed(e.to_string())),
            Some(Ok(connection)) => connection
        };

        // PgConnection takes &mut per query, so requests queue here
        let mut connection = connection.lock().await;

        let users = sqlx::query_as::<_, User>(SELECT_ALL_USERS)
            .fetch_all(&mut *connection)
            .await?;

        Ok(users)

    }

}
