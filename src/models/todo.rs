use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};

use crate::error::{Result, TodoError};

const INSERT_TODO: &str = "INSERT INTO todos (description) VALUES ($1) RETURNING id";
const SELECT_TODO: &str = "SELECT id, description, done FROM todos WHERE id = $1";

/// Todo represents a single to-do item
/// Maps to `todos` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub description: String,
    pub done: bool,
}

impl Todo {
    /// Insert a new todo and return the identifier generated by the store.
    ///
    /// The executor is anything sqlx can run a Postgres query on (a pool, a
    /// connection or a transaction); connection lifecycle stays with the caller.
    pub async fn create<'e, E>(executor: E, description: &str) -> Result<i32>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, i32>(INSERT_TODO)
            .bind(description)
            .fetch_optional(executor)
            .await?
            .ok_or(TodoError::OperationFailed)
    }

    /// Fetch a todo by ID
    ///
    /// A missing row is reported as [`TodoError::OperationFailed`], the same as
    /// any other empty result.
    pub async fn fetch<'e, E>(executor: E, id: i32) -> Result<Todo>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Todo>(SELECT_TODO)
            .bind(id)
            .fetch_optional(executor)
            .await?
            .ok_or(TodoError::OperationFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_json_shape() {
        let todo = Todo {
            id: 7,
            description: "Search a job".to_string(),
            done: false,
        };

        assert_eq!(
            serde_json::to_value(&todo).unwrap(),
            json!({ "id": 7, "description": "Search a job", "done": false })
        );
    }

    #[test]
    fn test_statements_bind_parameters() {
        assert!(INSERT_TODO.ends_with("VALUES ($1) RETURNING id"));
        assert!(SELECT_TODO.ends_with("WHERE id = $1"));
        assert!(SELECT_TODO.starts_with("SELECT id, description, done"));
    }
}
