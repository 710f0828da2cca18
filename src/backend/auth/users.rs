/**
 * User Model and Credential Store
 *
 * This module defines the user record and the `CredentialStore` trait, with
 * implementations for the Postgres and in-memory stores.
 *
 * # Uniqueness
 *
 * Email uniqueness is enforced by the storage layer (`UNIQUE` constraint in
 * Postgres, insert-if-absent under a write lock in memory). A violation
 * surfaces as `StoreError::DuplicateEmail`, which is the authoritative
 * conflict signal even when a preceding lookup found nothing.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::backend::db::{MemoryStore, PgStore};
use crate::shared::UserResponse;

/// User record as stored in the `users` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique numeric ID assigned on creation
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email address (unique, login key)
    pub email: String,
    /// Salted bcrypt hash, never the plaintext
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public profile without the password hash
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Store failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// The email is already registered
    #[error("email already in use")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence of user identity records
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user
    ///
    /// Fails with `StoreError::DuplicateEmail` if the email is taken.
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> Result<User, StoreError>;

    /// Look up a user by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }

    async fn create(&self, name: &str, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool())
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StoreError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|user| user.email == email).cloned())
    }

    async fn create(&self, name: &str, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|user| user.email == email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: tables.allocate_user_id(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|user| user.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_memory_create_and_lookup() {
        let store = MemoryStore::new();

        let user = store.create("Ana", "ana@example.com", "hash").await.unwrap();
        assert_eq!(user.id, 1);

        let by_email = store.find_by_email("ana@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);

        let by_id = store.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "ana@example.com");
        assert_eq!(by_id.name, "Ana");
    }

    #[tokio::test]
    async fn test_memory_missing_user() {
        let store = MemoryStore::new();
        assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
        assert!(store.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_rejects_duplicate_email() {
        let store = MemoryStore::new();
        store.create("Ana", "ana@example.com", "hash").await.unwrap();

        let result = store.create("Other", "ana@example.com", "hash2").await;
        assert_matches!(result, Err(StoreError::DuplicateEmail));
        assert_eq!(store.count_users_with_email("ana@example.com").await, 1);
    }

    #[tokio::test]
    async fn test_memory_concurrent_creates_keep_one_record() {
        let store = std::sync::Arc::new(MemoryStore::new());

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(&format!("user{i}"), "same@example.com", "hash")
                    .await
                    .is_ok()
            }));
        }

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(store.count_users_with_email("same@example.com").await, 1);
    }

    #[test]
    fn test_to_response_drops_hash() {
        let user = User {
            id: 3,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "$2b$10$secret".to_string(),
            created_at: Utc::now(),
        };

        let response = user.to_response();
        assert_eq!(response.id, 3);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret"));
    }
}
