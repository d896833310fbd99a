//! `SQLite` implementation of [`PlaceRepository`].

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use placebook_app::ports::PlaceRepository;
use placebook_domain::comment::Comment;
use placebook_domain::error::PlacebookError;
use placebook_domain::id::{PersonId, PlaceId};
use placebook_domain::place::Place;

use crate::error::{StorageError, decode};
use crate::person_repo::parse_timestamp;

struct Wrapper(Place);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Place> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let owner_id: Option<String> = row.try_get("owner_id")?;
        let comments_json: String = row.try_get("comments")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let owner = owner_id
            .map(|s| PersonId::from_str(&s))
            .transpose()
            .map_err(decode)?;
        let comments: Vec<Comment> = serde_json::from_str(&comments_json).map_err(decode)?;

        Ok(Self(Place {
            id: PlaceId::from_str(&id).map_err(decode)?,
            name: row.try_get("name")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            country: row.try_get("country")?,
            owner,
            comments,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO places (id, name, latitude, longitude, country, owner_id, comments, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM places ORDER BY rowid";
const UPDATE: &str = r"
    UPDATE places
    SET name = ?, latitude = ?, longitude = ?, country = ?, owner_id = ?, comments = ?, updated_at = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";

/// `SQLite`-backed place repository.
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    async fn create(&self, place: Place) -> Result<Place, PlacebookError> {
        let comments_json = serde_json::to_string(&place.comments).map_err(StorageError::from)?;

        sqlx::query(INSERT)
            .bind(place.id.to_string())
            .bind(&place.name)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(&place.country)
            .bind(place.owner.map(|id| id.to_string()))
            .bind(&comments_json)
            .bind(place.created_at.to_rfc3339())
            .bind(place.updated_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(place)
    }

    async fn get_by_id(&self, id: PlaceId) -> Result<Option<Place>, PlacebookError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Place>, PlacebookError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, place: Place) -> Result<Place, PlacebookError> {
        let comments_json = serde_json::to_string(&place.comments).map_err(StorageError::from)?;

        sqlx::query(UPDATE)
            .bind(&place.name)
            .bind(place.latitude)
            .bind(place.longitude)
            .bind(&place.country)
            .bind(place.owner.map(|id| id.to_string()))
            .bind(&comments_json)
            .bind(place.updated_at.to_rfc3339())
            .bind(place.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(place)
    }

    async fn delete(&self, id: PlaceId) -> Result<(), PlacebookError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
