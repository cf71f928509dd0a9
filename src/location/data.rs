use serde::{Serialize, Deserialize};


/// Location identifier type (lowercase hyphenated v4 uuid).
pub type LocationId = String;


/// Generates a fresh, globally unique location identifier.
pub fn new_location_id() -> LocationId {
    let mut buffer = uuid::Uuid::encode_buffer();
    uuid::Uuid::new_v4()
        .hyphenated()
        .encode_lower(&mut buffer)
        .to_owned()
}


/// Connection details of an object-storage bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudStorage {
    /// Bucket name
    pub bucket: String,

    /// Storage region, if the provider needs one
    pub region: Option<String>,

    /// Custom endpoint for S3-compatible providers
    pub endpoint: Option<String>,

    /// Access key identifier
    pub access_key_id: Option<String>,

    /// Secret access key
    pub secret_access_key: Option<String>,
}


/// Kinds of locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationType {
    /// Directory on a local (or locally mounted) filesystem
    Local,

    /// Prefix inside an object-storage bucket
    Cloud(CloudStorage),
}


/// What downstream subsystems are allowed to do with a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Filesystem change notifications can be subscribed to
    pub watch_changes: bool,

    /// Files can be handed over to native applications directly
    pub open_natively: bool,

    /// Subdirectories and files may be created or deleted
    pub writable: bool,

    /// Search index survives across sessions
    pub persistent_index: bool,
}


/// A named, typed root path, that is browsed and indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Identity, assigned once
    uuid: LocationId,

    /// Kind of location
    pub kind: LocationType,

    /// Display label, not necessarily unique
    pub name: String,

    /// Root path or URI
    pub path: String,

    /// Initial/primary location marker
    pub is_default: bool,

    /// Mutations of the location's tree must be rejected
    pub is_read_only: bool,

    /// Search index should be kept between sessions
    pub persist_index: bool,
}


impl Location {
    /// Creates a location with a freshly generated identifier.
    /// All flags are cleared.
    /// 
    /// * `kind` - kind of location
    /// * `name` - display label
    /// * `path` - root path or URI
    pub fn new<N: Into<String>, P: Into<String>>(kind: LocationType, name: N, path: P) -> Self {
        Self::with_uuid(new_location_id(), kind, name, path)
    }

    /// Creates a location with a known identifier, e.g. when
    /// restoring it from storage.
    /// 
    /// * `uuid` - identifier to use
    /// * `kind` - kind of location
    /// * `name` - display label
    /// * `path` - root path or URI
    pub fn with_uuid<I, N, P>(uuid: I, kind: LocationType, name: N, path: P) -> Self
    where
        I: Into<LocationId>,
        N: Into<String>,
        P: Into<String>
    {
        Location {
            uuid: uuid.into(),
            kind: kind,
            name: name.into(),
            path: path.into(),
            is_default: false,
            is_read_only: false,
            persist_index: false,
        }
    }

    /// Shorthand for a local location with a fresh identifier.
    pub fn local<N: Into<String>, P: Into<String>>(name: N, path: P) -> Self {
        Self::new(LocationType::Local, name, path)
    }

    /// Location identifier.
    pub fn uuid(&self) -> &LocationId {
        &self.uuid
    }

    /// Sets default marker.
    pub fn default_location(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Sets read-only marker.
    pub fn read_only(mut self, is_read_only: bool) -> Self {
        self.is_read_only = is_read_only;
        self
    }

    /// Sets index persistence marker.
    pub fn persistent_index(mut self, persist_index: bool) -> Self {
        self.persist_index = persist_index;
        self
    }

    /// Checks if location is backed by object storage.
    pub fn is_cloud(&self) -> bool {
        matches!(self.kind, LocationType::Cloud(_))
    }

    /// Capabilities of the location. The flags are advisory, they
    /// are enforced by the subsystems consuming them.
    pub fn capabilities(&self) -> Capabilities {
        let writable = !self.is_read_only;
        let persistent_index = self.persist_index;

        match &self.kind {
            LocationType::Local => Capabilities {
                watch_changes: true,
                open_natively: true,
                writable,
                persistent_index,
            },

            LocationType::Cloud(_) => Capabilities {
                watch_changes: false,
                open_natively: false,
                writable,
                persistent_index,
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_location_has_cleared_flags() {
        let location = Location::local("Docs", "/docs");

        assert_eq!(location.kind, LocationType::Local);
        assert!(!location.is_default);
        assert!(!location.is_read_only);
        assert!(!location.persist_index);
    }

    #[test]
    fn identifiers_are_unique_uuids() {
        let first = Location::local("A", "/a");
        let second = Location::local("A", "/a");

        assert_ne!(first.uuid(), second.uuid());
        assert!(uuid::Uuid::parse_str(first.uuid()).is_ok());
        assert_eq!(first.uuid(), &first.uuid().to_lowercase());
    }

    #[test]
    fn capabilities_follow_kind_and_flags() {
        let local = Location::local("Docs", "/docs").read_only(true);
        let caps = local.capabilities();
        assert!(caps.watch_changes);
        assert!(caps.open_natively);
        assert!(!caps.writable);

        let cloud = Location::new(
            LocationType::Cloud(CloudStorage { bucket: "photos".into(), ..Default::default() }),
            "Photos", "2023/")
            .persistent_index(true);
        let caps = cloud.capabilities();
        assert!(cloud.is_cloud());
        assert!(!caps.watch_changes);
        assert!(!caps.open_natively);
        assert!(caps.writable);
        assert!(caps.persistent_index);
    }
}
