use serde::{Deserialize, Serialize};

// one row of the users table, relayed as-is
// name and email are nullable VARCHAR(100) columns
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>
}
