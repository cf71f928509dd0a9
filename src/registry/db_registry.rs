use std::cell::RefCell;
use std::path;

use crate::error::{Result, Error};
use crate::home::DataRoot;
use crate::location::{Location, LocationId, LocationType, CloudStorage};
use super::registry::{LocationRegistry, PerspectiveId};


/// Database file name.
const DATABASE_FILE: &str = "locations.db";


/// Kind of location as it is stored in a database, payload
/// of cloud locations lives in separate columns.
#[derive(Clone, Copy, PartialEq)]
enum KindTag {
    Local,
    Cloud,
}


impl From<&LocationType> for KindTag {
    fn from(value: &LocationType) -> Self {
        match value {
            LocationType::Local    => KindTag::Local,
            LocationType::Cloud(_) => KindTag::Cloud,
        }
    }
}


/// Implementation of [`rusqlite::types::ToSql`] trait for [`KindTag`].
/// 
/// [`KindTag::Local`] translates into 0, [`KindTag::Cloud`] -- into 1.
impl rusqlite::types::ToSql for KindTag {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        let internal_value = match self {
            KindTag::Local => 0i64,
            KindTag::Cloud => 1i64,
        };

        Ok(rusqlite::types::ToSqlOutput::Borrowed(
            rusqlite::types::ValueRef::Integer(internal_value)
        ))
    }
}


/// Implementation of [`rusqlite::types::FromSql`] for [`KindTag`].
/// 
/// Checks for invalid values in database, translates only valid values.
impl rusqlite::types::FromSql for KindTag {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        match value.as_i64()? {
            0 => Ok(KindTag::Local),
            1 => Ok(KindTag::Cloud),

            // Other integer values are wrong!
            v => Err(rusqlite::types::FromSqlError::OutOfRange(v)),
        }
    }
}


/// Registry persisted in SQLite.
pub struct DbRegistry {
    /// Database connection
    db: rusqlite::Connection,

    /// Current location identifier, lives as long as the session
    current: RefCell<Option<LocationId>>,
}


impl DbRegistry {
    /// Opens an existing database in provided data root.
    /// 
    /// * `root` - data root provider
    pub fn open<R: DataRoot>(root: &R) -> Result<Self> {
        let db = rusqlite::Connection::open(Self::db_path(root)?)?;
        Ok(Self::with_connection(db))
    }

    /// Creates a database in provided data root.
    /// 
    /// * `root` - data root provider
    pub fn create<R: DataRoot>(root: &R) -> Result<Self> {
        //
        // Create root path if it doesn't exist
        //

        root.create_if_absent()?;

        //
        // Now I just open DB and create schema
        //

        let registry = Self::open(root)?;
        registry
            .create_db()
            .and(Ok(registry))
    }

    /// Creates a database, that lives in memory only.
    pub fn in_memory() -> Result<Self> {
        let registry = Self::with_connection(rusqlite::Connection::open_in_memory()?);
        registry
            .create_db()
            .and(Ok(registry))
    }

    /// Register a perspective.
    /// 
    /// * `perspective` - perspective identifier
    pub fn add_perspective(&self, perspective: &str) -> Result<()> {
        let statement_fmt = r#"
            INSERT OR IGNORE INTO perspectives (perspective_id)
            VALUES (?1)
        "#;

        self.db
            .execute(statement_fmt, rusqlite::params![perspective])?;

        Ok(())
    }
}


impl LocationRegistry for DbRegistry {
    fn locations(&self) -> Result<Vec<Location>> {
        let statement = r#"
            SELECT uuid, type, name, path, is_default, is_read_only, persist_index,
                   bucket, region, endpoint, access_key_id, secret_access_key
              FROM locations
             ORDER BY position ASC
        "#;

        self.query(statement, Self::location_from_row)
    }

    fn add_location(&self, location: Location, open_after_create: bool) -> Result<()> {
        if self.contains(location.uuid())? {
            return Err(Error::DuplicateLocation(location.uuid().clone()));
        }

        //
        // Clearing other defaults and writing the row either both
        // happen or neither does
        //

        let transaction = self.db.unchecked_transaction()?;

        if location.is_default {
            Self::clear_default_except(&transaction, location.uuid())?;
        }

        let statement_fmt = r#"
            INSERT INTO locations (uuid, type, name, path, is_default, is_read_only, persist_index,
                                   bucket, region, endpoint, access_key_id, secret_access_key)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
        "#;

        let cloud = Self::cloud_columns(&location.kind);
        transaction
            .execute(statement_fmt, rusqlite::params![location.uuid(), KindTag::from(&location.kind),
                location.name, location.path, location.is_default, location.is_read_only,
                location.persist_index, cloud.bucket, cloud.region, cloud.endpoint,
                cloud.access_key_id, cloud.secret_access_key])?;

        transaction.commit()?;

        if open_after_create {
            *self.current.borrow_mut() = Some(location.uuid().clone());
        }

        Ok(())
    }

    fn edit_location(&self, location: Location) -> Result<()> {
        if !self.contains(location.uuid())? {
            return Err(Error::UnknownLocation(location.uuid().clone()));
        }

        let transaction = self.db.unchecked_transaction()?;

        if location.is_default {
            Self::clear_default_except(&transaction, location.uuid())?;
        }

        let statement_fmt = r#"
            UPDATE locations
               SET type = ?1,
                   name = ?2,
                   path = ?3,
                   is_default = ?4,
                   is_read_only = ?5,
                   persist_index = ?6,
                   bucket = ?7,
                   region = ?8,
                   endpoint = ?9,
                   access_key_id = ?10,
                   secret_access_key = ?11
             WHERE uuid = ?12
        "#;

        let cloud = Self::cloud_columns(&location.kind);
        transaction
            .execute(statement_fmt, rusqlite::params![KindTag::from(&location.kind), location.name,
                location.path, location.is_default, location.is_read_only, location.persist_index,
                cloud.bucket, cloud.region, cloud.endpoint, cloud.access_key_id,
                cloud.secret_access_key, location.uuid()])?;

        transaction.commit()?;

        Ok(())
    }

    fn remove_location(&self, uuid: &LocationId) -> Result<()> {
        let statement_fmt = r#"
            DELETE FROM locations
             WHERE uuid = ?1
        "#;

        let removed = self.db
            .execute(statement_fmt, rusqlite::params![uuid])?;

        if removed == 0 {
            return Err(Error::UnknownLocation(uuid.clone()));
        }

        let mut current = self.current.borrow_mut();
        if current.as_ref() == Some(uuid) {
            *current = None;
        }

        Ok(())
    }

    fn current_location(&self) -> Result<Option<LocationId>> {
        Ok(self.current.borrow().clone())
    }

    fn perspectives(&self) -> Result<Vec<PerspectiveId>> {
        let statement = r#"
            SELECT perspective_id
              FROM perspectives
             ORDER BY rowid ASC
        "#;

        self.query(statement, |row| Ok(row.get(0)?))
    }

    fn location(&self, uuid: &LocationId) -> Result<Option<Location>> {
        let statement_fmt = r#"
            SELECT uuid, type, name, path, is_default, is_read_only, persist_index,
                   bucket, region, endpoint, access_key_id, secret_access_key
              FROM locations
             WHERE uuid = ?1
        "#;

        let mut result = self.query_with_params(statement_fmt,
            rusqlite::params![uuid], Self::location_from_row)?;

        //
        // Identifiers are unique, hence at most one row is returned here
        //

        Ok(result.pop())
    }
}


impl DbRegistry {
    fn with_connection(db: rusqlite::Connection) -> Self {
        DbRegistry {
            db: db,
            current: RefCell::new(None),
        }
    }

    fn create_db(&self) -> Result<()> {
        let create_statement = r#"
            CREATE TABLE locations (
                position            INTEGER     PRIMARY KEY AUTOINCREMENT,
                uuid                TEXT        NOT NULL UNIQUE,
                type                INTEGER     NOT NULL,
                name                TEXT        NOT NULL,
                path                TEXT        NOT NULL,
                is_default          BOOLEAN     NOT NULL,
                is_read_only        BOOLEAN     NOT NULL,
                persist_index       BOOLEAN     NOT NULL,
                bucket              TEXT,
                region              TEXT,
                endpoint            TEXT,
                access_key_id       TEXT,
                secret_access_key   TEXT
            );

            CREATE TABLE perspectives (
                perspective_id      TEXT        PRIMARY KEY
            );
        "#;

        self.db
            .execute_batch(create_statement)
            .map_err(Error::from)
    }

    fn db_path<R: DataRoot>(root: &R) -> Result<path::PathBuf> {
        Ok(root.root()?
            .join(DATABASE_FILE))
    }

    fn contains(&self, uuid: &LocationId) -> Result<bool> {
        let statement_fmt = r#"
            SELECT COUNT(*)
              FROM locations
             WHERE uuid = ?1
        "#;

        let count: i64 = self.db
            .query_row(statement_fmt, rusqlite::params![uuid], |row| row.get(0))?;

        Ok(count > 0)
    }

    fn clear_default_except(db: &rusqlite::Connection, uuid: &LocationId) -> Result<()> {
        let statement_fmt = r#"
            UPDATE locations
               SET is_default = 0
             WHERE uuid <> ?1
        "#;

        db
            .execute(statement_fmt, rusqlite::params![uuid])?;

        Ok(())
    }

    fn cloud_columns(kind: &LocationType) -> CloudStorage {
        match kind {
            LocationType::Local        => CloudStorage::default(),
            LocationType::Cloud(cloud) => cloud.clone(),
        }
    }

    fn query_with_params<T, P, C>(&self, statement: &str, params: P, convert: C) -> Result<Vec<T>>
    where
        P: rusqlite::Params,
        C: Fn(&rusqlite::Row<'_>) -> Result<T>
    {
        let mut statement = self.db.prepare(statement)?;
        let mut rows = statement.query(params)?;

        let mut result = Vec::new();
        while let Some(row) = rows.next()? {
            result.push(convert(row)?)
        }

        Ok(result)
    }

    fn query<T, C>(&self, statement: &str, convert: C) -> Result<Vec<T>>
    where
        C: Fn(&rusqlite::Row<'_>) -> Result<T>
    {
        self.query_with_params(statement, [], convert)
    }
}


impl DbRegistry {
    fn location_from_row(row: &rusqlite::Row<'_>) -> Result<Location> {
        let uuid: LocationId = row.get(0)?;
        let kind = match row.get::<_, KindTag>(1)? {
            KindTag::Local => LocationType::Local,
            KindTag::Cloud => LocationType::Cloud(CloudStorage {
                bucket: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
                region: row.get(8)?,
                endpoint: row.get(9)?,
                access_key_id: row.get(10)?,
                secret_access_key: row.get(11)?,
            }),
        };

        let mut location = Location::with_uuid(uuid, kind, row.get::<_, String>(2)?, row.get::<_, String>(3)?);
        location.is_default = row.get(4)?;
        location.is_read_only = row.get(5)?;
        location.persist_index = row.get(6)?;

        Ok(location)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::DirectoryDataRoot;

    fn cloud_location() -> Location {
        Location::new(LocationType::Cloud(CloudStorage {
            bucket: "photos".to_owned(),
            region: Some("eu-central-1".to_owned()),
            endpoint: None,
            access_key_id: Some("AKIA".to_owned()),
            secret_access_key: Some("secret".to_owned()),
        }), "Photos", "2023/")
    }

    #[test]
    fn stores_locations_in_insertion_order() {
        let registry = DbRegistry::in_memory().unwrap();
        let local = Location::local("Zeta", "/z").read_only(true);
        let cloud = cloud_location().persistent_index(true);

        registry.add_location(local.clone(), false).unwrap();
        registry.add_location(cloud.clone(), false).unwrap();

        assert_eq!(registry.locations().unwrap(), vec![local, cloud]);
    }

    #[test]
    fn rejects_duplicate_identifier() {
        let registry = DbRegistry::in_memory().unwrap();
        let location = Location::local("Docs", "/docs");

        registry.add_location(location.clone(), false).unwrap();
        let result = registry.add_location(location, false);

        assert!(matches!(result, Err(Error::DuplicateLocation(_))));
        assert_eq!(registry.locations().unwrap().len(), 1);
    }

    #[test]
    fn edits_by_identifier() {
        let registry = DbRegistry::in_memory().unwrap();
        let location = Location::with_uuid("1", LocationType::Local, "Docs", "/docs");
        registry.add_location(location.clone(), false).unwrap();

        let mut edited = location;
        edited.name = "Documents".to_owned();
        edited.kind = cloud_location().kind;
        registry.edit_location(edited.clone()).unwrap();

        assert_eq!(registry.location(&"1".to_owned()).unwrap(), Some(edited));
    }

    #[test]
    fn reports_unknown_identifier() {
        let registry = DbRegistry::in_memory().unwrap();
        let stray = Location::local("Stray", "/stray");

        assert!(matches!(registry.edit_location(stray.clone()), Err(Error::UnknownLocation(_))));
        assert!(matches!(registry.remove_location(stray.uuid()), Err(Error::UnknownLocation(_))));
    }

    #[test]
    fn failed_write_keeps_previous_default() {
        let registry = DbRegistry::in_memory().unwrap();
        let first = Location::local("First", "/first").default_location(true);
        registry.add_location(first.clone(), false).unwrap();

        registry.db
            .execute_batch(r#"
                CREATE TRIGGER reject_broken_insert BEFORE INSERT ON locations
                WHEN NEW.name = 'Broken'
                BEGIN SELECT RAISE(ABORT, 'rejected'); END;

                CREATE TRIGGER reject_broken_update BEFORE UPDATE ON locations
                WHEN NEW.name = 'Broken'
                BEGIN SELECT RAISE(ABORT, 'rejected'); END;
            "#)
            .unwrap();

        let broken = Location::local("Broken", "/broken").default_location(true);
        assert!(matches!(registry.add_location(broken, false), Err(Error::Database(_))));

        let second = Location::local("Second", "/second");
        registry.add_location(second.clone(), false).unwrap();

        let mut edited = second;
        edited.name = "Broken".to_owned();
        edited.is_default = true;
        assert!(matches!(registry.edit_location(edited), Err(Error::Database(_))));

        let defaults: Vec<_> = registry.locations().unwrap()
            .into_iter()
            .filter(|location| location.is_default)
            .map(|location| location.name)
            .collect();
        assert_eq!(defaults, vec!["First"]);
        assert_eq!(registry.locations().unwrap().len(), 2);
    }

    #[test]
    fn keeps_single_default_and_tracks_current() {
        let registry = DbRegistry::in_memory().unwrap();
        let first = Location::local("First", "/first").default_location(true);
        let second = Location::local("Second", "/second").default_location(true);
        let second_id = second.uuid().clone();

        registry.add_location(first.clone(), false).unwrap();
        registry.add_location(second, true).unwrap();

        let stored_first = registry.location(first.uuid()).unwrap().unwrap();
        assert!(!stored_first.is_default);
        assert_eq!(registry.current_location().unwrap(), Some(second_id.clone()));

        registry.remove_location(&second_id).unwrap();
        assert_eq!(registry.current_location().unwrap(), None);
    }

    #[test]
    fn persists_between_connections() {
        let scratch = tempfile::tempdir().unwrap();
        let root = DirectoryDataRoot::new(scratch.path().join("data"));
        let location = Location::local("Docs", "/docs");

        {
            let registry = DbRegistry::create(&root).unwrap();
            registry.add_location(location.clone(), false).unwrap();
            registry.add_perspective("grid").unwrap();
            registry.add_perspective("grid").unwrap();
        }

        let registry = DbRegistry::open(&root).unwrap();
        assert_eq!(registry.locations().unwrap(), vec![location]);
        assert_eq!(registry.perspectives().unwrap(), vec!["grid"]);
    }
}
