//! Event persistence against SQLite.

use crate::error::AppError;
use crate::models::{Event, EventUpdate};
use sqlx::types::Json;
use sqlx::SqlitePool;

const SELECT_COLUMNS: &str = "id, title, image, description, tags, location";

/// Outcome of clearing the event table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    NothingToDelete,
    Deleted(u64),
}

pub struct EventService;

impl EventService {
    /// All events ordered by id.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Event>, AppError> {
        let sql = format!("SELECT {} FROM event ORDER BY id", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Event>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one event by primary key.
    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<Event>, AppError> {
        let sql = format!("SELECT {} FROM event WHERE id = ?", SELECT_COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one event and return its id. An explicit id that is already taken is a conflict.
    pub async fn create(pool: &SqlitePool, event: &Event) -> Result<i64, AppError> {
        let sql = "INSERT INTO event (id, title, image, description, tags, location) VALUES (?, ?, ?, ?, ?, ?)";
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(sql)
            .bind(event.id)
            .bind(&event.title)
            .bind(&event.image)
            .bind(&event.description)
            .bind(Json(&event.tags))
            .bind(&event.location)
            .execute(pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db)
                    if db.is_unique_violation() || db.message().contains("UNIQUE constraint failed") =>
                {
                    AppError::Conflict("Event with supplied ID already exists".into())
                }
                other => AppError::Db(other),
            })?;
        Ok(result.last_insert_rowid())
    }

    /// Read, patch and write back one event inside a single transaction.
    /// Returns the updated event, or None when the id does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        changes: EventUpdate,
    ) -> Result<Option<Event>, AppError> {
        let mut tx = pool.begin().await?;
        let select = format!("SELECT {} FROM event WHERE id = ?", SELECT_COLUMNS);
        let Some(mut event) = sqlx::query_as::<_, Event>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        changes.apply_to(&mut event);

        let sql = "UPDATE event SET title = ?, image = ?, description = ?, tags = ?, location = ? WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query (tx)");
        sqlx::query(sql)
            .bind(&event.title)
            .bind(&event.image)
            .bind(&event.description)
            .bind(Json(&event.tags))
            .bind(&event.location)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(event))
    }

    /// Delete one event. Returns false when no row had that id.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM event WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all(pool: &SqlitePool) -> Result<ClearOutcome, AppError> {
        let sql = "DELETE FROM event";
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(sql).execute(pool).await?;
        Ok(match result.rows_affected() {
            0 => ClearOutcome::NothingToDelete,
            n => ClearOutcome::Deleted(n),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;

    async fn pool() -> SqlitePool {
        let pool = store::connect("sqlite::memory:", 1).await.unwrap();
        store::ensure_tables(&pool).await.unwrap();
        pool
    }

    fn meetup(title: &str) -> Event {
        Event {
            id: None,
            title: title.into(),
            image: "https://linktomyimage.com/image.png".into(),
            description: "Monthly meetup".into(),
            tags: vec!["rust".into(), "meetup".into()],
            location: "Berlin".into(),
        }
    }

    #[tokio::test]
    async fn create_then_read_round_trips_tags() {
        let pool = pool().await;
        let id = EventService::create(&pool, &meetup("Rust Berlin")).await.unwrap();
        let event = EventService::read(&pool, id).await.unwrap().unwrap();
        assert_eq!(event.id, Some(id));
        assert_eq!(event.tags, vec!["rust", "meetup"]);
    }

    #[tokio::test]
    async fn explicit_duplicate_id_conflicts() {
        let pool = pool().await;
        let mut event = meetup("first");
        event.id = Some(7);
        EventService::create(&pool, &event).await.unwrap();
        let err = EventService::create(&pool, &event).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_missing_row_returns_none() {
        let pool = pool().await;
        let res = EventService::update(&pool, 42, EventUpdate::default()).await.unwrap();
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn update_persists_partial_changes() {
        let pool = pool().await;
        let id = EventService::create(&pool, &meetup("old")).await.unwrap();
        let changes = EventUpdate {
            title: Some("new".into()),
            ..Default::default()
        };
        let updated = EventService::update(&pool, id, changes).await.unwrap().unwrap();
        assert_eq!(updated.title, "new");
        let stored = EventService::read(&pool, id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn delete_all_reports_whether_anything_was_removed() {
        let pool = pool().await;
        assert_eq!(EventService::delete_all(&pool).await.unwrap(), ClearOutcome::NothingToDelete);
        EventService::create(&pool, &meetup("a")).await.unwrap();
        EventService::create(&pool, &meetup("b")).await.unwrap();
        assert_eq!(EventService::delete_all(&pool).await.unwrap(), ClearOutcome::Deleted(2));
        assert!(EventService::list(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_false() {
        let pool = pool().await;
        assert!(!EventService::delete(&pool, 3).await.unwrap());
    }
}
