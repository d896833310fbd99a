//! `SQLite` implementation of [`PersonRepository`].

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Row, Sqlite, SqlitePool};

use placebook_app::ports::PersonRepository;
use placebook_domain::error::PlacebookError;
use placebook_domain::id::PersonId;
use placebook_domain::person::{Person, PersonSummary};

use crate::error::{StorageError, decode};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Person);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Person> {
        value.map(|w| w.0)
    }
}

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(decode)
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let first_name: String = row.try_get("first_name")?;
        let last_name: String = row.try_get("last_name")?;
        let dob: String = row.try_get("dob")?;
        let height: f64 = row.try_get("height")?;
        let weight: f64 = row.try_get("weight")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Person {
            id: PersonId::from_str(&id).map_err(decode)?,
            first_name,
            last_name,
            dob: NaiveDate::parse_from_str(&dob, DATE_FORMAT).map_err(decode)?,
            height,
            weight,
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        }))
    }
}

/// Row shape of the owner projection.
struct SummaryWrapper(PersonSummary);

impl<'r> FromRow<'r, SqliteRow> for SummaryWrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        Ok(Self(PersonSummary {
            id: PersonId::from_str(&id).map_err(decode)?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO people (id, first_name, last_name, dob, height, weight, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM people WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM people ORDER BY rowid";
const SELECT_SUMMARIES: &str = "SELECT id, first_name, last_name FROM people WHERE id IN (";
const UPDATE: &str = r"
    UPDATE people
    SET first_name = ?, last_name = ?, dob = ?, height = ?, weight = ?, updated_at = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM people WHERE id = ?";

/// `SQLite`-backed person repository.
pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PersonRepository for SqlitePersonRepository {
    async fn create(&self, person: Person) -> Result<Person, PlacebookError> {
        sqlx::query(INSERT)
            .bind(person.id.to_string())
            .bind(&person.first_name)
            .bind(&person.last_name)
            .bind(person.dob.format(DATE_FORMAT).to_string())
            .bind(person.height)
            .bind(person.weight)
            .bind(person.created_at.to_rfc3339())
            .bind(person.updated_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(person)
    }

    async fn get_by_id(&self, id: PersonId) -> Result<Option<Person>, PlacebookError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }

    async fn get_all(&self) -> Result<Vec<Person>, PlacebookError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn get_summaries(
        &self,
        ids: Vec<PersonId>,
    ) -> Result<Vec<PersonSummary>, PlacebookError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = QueryBuilder::<Sqlite>::new(SELECT_SUMMARIES);
        let mut separated = query.separated(", ");
        for id in &ids {
            separated.push_bind(id.to_string());
        }
        separated.push_unseparated(")");

        let rows: Vec<SummaryWrapper> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, person: Person) -> Result<Person, PlacebookError> {
        sqlx::query(UPDATE)
            .bind(&person.first_name)
            .bind(&person.last_name)
            .bind(person.dob.format(DATE_FORMAT).to_string())
            .bind(person.height)
            .bind(person.weight)
            .bind(person.updated_at.to_rfc3339())
            .bind(person.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(person)
    }

    async fn delete(&self, id: PersonId) -> Result<(), PlacebookError> {
        sqlx::query(DELETE_BY_ID)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }
}
