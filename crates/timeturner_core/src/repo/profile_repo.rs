//! Profile repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the single birth-profile record under its fixed key.
//! - Keep SQL and JSON codec details inside the persistence boundary.
//!
//! # Invariants
//! - Saves are last-write-wins upserts; there is no versioning and no
//!   migration of the record payload itself.
//! - A corrupted stored record surfaces as `InvalidData`, never a panic.

use crate::db::DbError;
use crate::model::profile::{BirthProfile, ProfileValidationError, PROFILE_RECORD_KEY};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for profile persistence and decoding.
#[derive(Debug)]
pub enum RepoError {
    Validation(ProfileValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted profile record: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ProfileValidationError> for RepoError {
    fn from(value: ProfileValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value contract for the persisted birth profile.
pub trait ProfileRepository {
    fn save_profile(&self, profile: &BirthProfile) -> RepoResult<()>;
    fn load_profile(&self) -> RepoResult<Option<BirthProfile>>;
}

/// SQLite-backed profile repository over the `kv_records` table.
pub struct SqliteProfileRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfileRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProfileRepository for SqliteProfileRepository<'_> {
    fn save_profile(&self, profile: &BirthProfile) -> RepoResult<()> {
        profile.validate()?;

        let payload = serde_json::to_string(profile)
            .map_err(|err| RepoError::InvalidData(format!("profile encode failed: {err}")))?;

        self.conn.execute(
            "INSERT INTO kv_records (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![PROFILE_RECORD_KEY, payload],
        )?;

        Ok(())
    }

    fn load_profile(&self) -> RepoResult<Option<BirthProfile>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_records WHERE key = ?1;",
                [PROFILE_RECORD_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        let profile: BirthProfile = serde_json::from_str(&payload).map_err(|err| {
            RepoError::InvalidData(format!("profile decode failed under key `{PROFILE_RECORD_KEY}`: {err}"))
        })?;
        profile.validate()?;

        Ok(Some(profile))
    }
}
