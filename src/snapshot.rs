use serde::{Serialize, Deserialize};

use crate::datetime::{self, Timestamp};
use crate::error::{Result, Error};
use crate::location::{self, Location};
use crate::registry::LocationRegistry;


/// Point-in-time copy of a registry's locations, used to export
/// locations and to import them on another instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSnapshot {
    /// When the snapshot was taken.
    pub taken_at: Timestamp,

    /// Locations in registry order.
    pub locations: Vec<Location>,
}


impl LocationSnapshot {
    /// Creates a snapshot from its binary representation.
    /// 
    /// * `binary_snapshot` - bytes produced by [`LocationSnapshot::as_bytes`]
    pub fn new(binary_snapshot: &[u8]) -> Result<Self> {
        flexbuffers::from_slice(binary_snapshot)
            .map_err(Error::from)
    }

    /// Takes a snapshot of all registered locations.
    /// 
    /// * `registry` - registry to copy locations from
    pub fn capture<R: LocationRegistry>(registry: &R) -> Result<Self> {
        Ok(LocationSnapshot {
            taken_at: datetime::now(),
            locations: registry.locations()?,
        })
    }

    /// Converts the snapshot into a binary representation.
    pub fn as_bytes(&self) -> Result<Vec<u8>> {
        flexbuffers::to_vec(self)
            .map_err(Error::from)
    }

    /// Adds locations, that are not registered yet, preserving their
    /// identifiers. Invalid locations and locations with identifiers,
    /// that are not uuids, are skipped.
    /// Returns number of added locations.
    /// 
    /// * `registry` - registry to add locations to
    pub fn restore_into<R: LocationRegistry>(self, registry: &R) -> Result<usize> {
        let mut added = 0;

        for candidate in self.locations {
            if let Err(error) = location::validate(&candidate) {
                tracing::warn!(uuid = %candidate.uuid(), %error, "skipping invalid location from snapshot");
                continue;
            }

            if uuid::Uuid::parse_str(candidate.uuid()).is_err() {
                tracing::warn!(uuid = %candidate.uuid(), "skipping location with malformed identifier from snapshot");
                continue;
            }

            if registry.location(candidate.uuid())?.is_some() {
                continue;
            }

            registry.add_location(candidate, false)?;
            added += 1;
        }

        tracing::info!(added, "locations restored from snapshot");
        Ok(added)
    }
}
