/**
 * Word Model and Database Operations
 *
 * `WordStore` persists words owned by a user. Every operation takes the
 * owner's ID explicitly; callers pass the ID from the verified session.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::backend::auth::users::StoreError;
use crate::backend::db::{MemoryStore, PgStore};
use crate::shared::WordResponse;

/// Word record as stored in the `words` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Word {
    pub id: i64,
    pub word: String,
    pub translation: String,
    /// Stored image file name
    pub image_url: String,
    /// Owning user
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Word {
    pub fn to_response(&self) -> WordResponse {
        WordResponse {
            id: self.id,
            word: self.word.clone(),
            translation: self.translation.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Input for a new word
#[derive(Debug, Clone)]
pub struct NewWord {
    pub word: String,
    pub translation: String,
    pub image_url: String,
}

/// Persistence of per-user words
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Insert a word owned by `user_id`
    async fn create_word(&self, user_id: i64, word: NewWord) -> Result<Word, StoreError>;

    /// All words owned by `user_id`, oldest first
    async fn list_words(&self, user_id: i64) -> Result<Vec<Word>, StoreError>;
}

#[async_trait]
impl WordStore for PgStore {
    async fn create_word(&self, user_id: i64, word: NewWord) -> Result<Word, StoreError> {
        let word = sqlx::query_as::<_, Word>(
            r#"
            INSERT INTO words (word, translation, image_url, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, word, translation, image_url, user_id, created_at
            "#,
        )
        .bind(&word.word)
        .bind(&word.translation)
        .bind(&word.image_url)
        .bind(user_id)
        .fetch_one(self.pool())
        .await?;

        Ok(word)
    }

    async fn list_words(&self, user_id: i64) -> Result<Vec<Word>, StoreError> {
        let words = sqlx::query_as::<_, Word>(
            r#"
            SELECT id, word, translation, image_url, user_id, created_at
            FROM words
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;

        Ok(words)
    }
}

#[async_trait]
impl WordStore for MemoryStore {
    async fn create_word(&self, user_id: i64, word: NewWord) -> Result<Word, StoreError> {
        let mut tables = self.tables.write().await;

        let word = Word {
            id: tables.allocate_word_id(),
            word: word.word,
            translation: word.translation,
            image_url: word.image_url,
            user_id,
            created_at: Utc::now(),
        };
        tables.words.push(word.clone());

        Ok(word)
    }

    async fn list_words(&self, user_id: i64) -> Result<Vec<Word>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .words
            .iter()
            .filter(|word| word.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_word(word: &str) -> NewWord {
        NewWord {
            word: word.to_string(),
            translation: format!("{word}-translated"),
            image_url: format!("{word}.png"),
        }
    }

    #[tokio::test]
    async fn test_words_are_scoped_by_owner() {
        let store = MemoryStore::new();
        store.create_word(1, new_word("cat")).await.unwrap();
        store.create_word(2, new_word("dog")).await.unwrap();
        store.create_word(1, new_word("bird")).await.unwrap();

        let mine: Vec<String> = store
            .list_words(1)
            .await
            .unwrap()
            .into_iter()
            .map(|w| w.word)
            .collect();
        assert_eq!(mine, vec!["cat", "bird"]);

        let theirs = store.list_words(2).await.unwrap();
        assert_eq!(theirs.len(), 1);
        assert_eq!(theirs[0].word, "dog");

        assert!(store.list_words(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_to_response() {
        let store = MemoryStore::new();
        let word = store.create_word(1, new_word("cat")).await.unwrap();
        let response = word.to_response();
        assert_eq!(response.id, word.id);
        assert_eq!(response.translation, "cat-translated");
        assert_eq!(response.image_url, "cat.png");
    }
}
