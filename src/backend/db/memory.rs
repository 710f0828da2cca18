/**
 * In-Memory Store
 *
 * Keeps users and words in process memory behind a single async lock.
 * Used by the test suite and for running the server without Postgres.
 *
 * Inserts hold the write lock across the uniqueness check and the insert,
 * so `create` is an atomic insert-if-absent, matching the `UNIQUE`
 * constraint of the Postgres schema.
 */

use tokio::sync::RwLock;

use crate::backend::auth::users::User;
use crate::backend::words::db::Word;

#[derive(Debug, Default)]
pub(crate) struct MemoryTables {
    pub(crate) users: Vec<User>,
    pub(crate) words: Vec<Word>,
    pub(crate) next_user_id: i64,
    pub(crate) next_word_id: i64,
}

impl MemoryTables {
    pub(crate) fn allocate_user_id(&mut self) -> i64 {
        self.next_user_id += 1;
        self.next_user_id
    }

    pub(crate) fn allocate_word_id(&mut self) -> i64 {
        self.next_word_id += 1;
        self.next_word_id
    }
}

/// In-process store implementing both `CredentialStore` and `WordStore`
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) tables: RwLock<MemoryTables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of user records with the given email
    pub async fn count_users_with_email(&self, email: &str) -> usize {
        self.tables
            .read()
            .await
            .users
            .iter()
            .filter(|user| user.email == email)
            .count()
    }

    /// Total number of user records
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    /// Remove a user and their words
    pub async fn delete_user(&self, id: i64) -> bool {
        let mut tables = self.tables.write().await;
        let before = tables.users.len();
        tables.users.retain(|user| user.id != id);
        tables.words.retain(|word| word.user_id != id);
        tables.users.len() != before
    }
}
