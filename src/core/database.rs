use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

use crate::core::error::UnsupportedTypeError;

/// The closed set of database kinds the factory knows how to create.
///
/// Each variant maps to exactly one tag string. Tags are matched exactly,
/// so `"MySQL"` or `"Postgres"` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    MySql,
    Postgres,
}

impl DbType {
    pub const MYSQL_TAG: &'static str = "mysql";
    pub const POSTGRES_TAG: &'static str = "postgres";

    /// The canonical tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            DbType::MySql => Self::MYSQL_TAG,
            DbType::Postgres => Self::POSTGRES_TAG,
        }
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbType {
    type Err = UnsupportedTypeError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            DbType::MYSQL_TAG => Ok(DbType::MySql),
            DbType::POSTGRES_TAG => Ok(DbType::Postgres),
            _ => Err(UnsupportedTypeError::new(tag)),
        }
    }
}

/// Placeholder handed out by `Database::client`.
///
/// No connection is opened. The session id is generated per call so two
/// clients are always distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    pub db_type: DbType,
    pub session_id: Uuid,
}

impl Client {
    fn placeholder(db_type: DbType) -> Self {
        Self {
            db_type,
            session_id: Uuid::new_v4(),
        }
    }
}

/// The `Database` trait is the common interface of every handle the factory
/// returns.
pub trait Database {
    /// Obtains a client for this database.
    ///
    /// # Returns
    /// A placeholder `Client`. The supported implementations never fail.
    fn client(&self) -> Result<Client>;

    /// Reports which kind of database this handle represents.
    fn db_type(&self) -> DbType;
}

pub struct MysqlDatabase;

impl Database for MysqlDatabase {
    fn client(&self) -> Result<Client> {
        Ok(Client::placeholder(DbType::MySql))
    }

    fn db_type(&self) -> DbType {
        DbType::MySql
    }
}

pub struct PostgresDatabase;

impl Database for PostgresDatabase {
    fn client(&self) -> Result<Client> {
        Ok(Client::placeholder(DbType::Postgres))
    }

    fn db_type(&self) -> DbType {
        DbType::Postgres
    }
}

pub fn new_mysql() -> Box<dyn Database> {
    Box::new(MysqlDatabase)
}

pub fn new_postgres() -> Box<dyn Database> {
    Box::new(PostgresDatabase)
}

/// Creates a fresh handle for an already parsed `DbType`.
pub fn new_database_of(db_type: DbType) -> Box<dyn Database> {
    debug!(%db_type, "creating database handle");
    match db_type {
        DbType::MySql => new_mysql(),
        DbType::Postgres => new_postgres(),
    }
}

/// Maps a tag to a new database handle.
///
/// # Arguments
/// * `tag`: Either `"mysql"` or `"postgres"`, matched case-sensitively.
///
/// # Returns
/// A freshly constructed handle owned by the caller, or
/// `UnsupportedTypeError` for any other tag. Nothing is cached between calls.
pub fn new_database(tag: &str) -> Result<Box<dyn Database>, UnsupportedTypeError> {
    let db_type = tag.parse::<DbType>()?;
    Ok(new_database_of(db_type))
}
