use crate::error::Result;
use crate::location::{Location, LocationId};


/// Perspective identifier. Perspectives are opaque here, they are
/// only passed through to the presentation layer.
pub type PerspectiveId = String;


/// Ordered collection of locations and its mutation API.
/// 
/// Registries serialize their own mutations. All methods take `&self`,
/// hence a registry may be shared between the coordinator and the
/// code that renders the location list.
pub trait LocationRegistry {
    /// Return all locations in insertion order.
    fn locations(&self) -> Result<Vec<Location>>;

    /// Add a new location.
    /// 
    /// Fails with [`crate::error::Error::DuplicateLocation`] if a
    /// location with the same identifier is already registered.
    /// 
    /// * `location` - location to add
    /// * `open_after_create` - if true, the location becomes current
    fn add_location(&self, location: Location, open_after_create: bool) -> Result<()>;

    /// Replace a location with the same identifier.
    /// 
    /// Fails with [`crate::error::Error::UnknownLocation`] if there is
    /// no such location.
    /// 
    /// * `location` - new location data
    fn edit_location(&self, location: Location) -> Result<()>;

    /// Remove a location.
    /// 
    /// Fails with [`crate::error::Error::UnknownLocation`] if there is
    /// no such location.
    /// 
    /// * `uuid` - identifier of a location to remove
    fn remove_location(&self, uuid: &LocationId) -> Result<()>;

    /// Identifier of the location opened last with `open_after_create`.
    fn current_location(&self) -> Result<Option<LocationId>>;

    /// Return all perspectives.
    fn perspectives(&self) -> Result<Vec<PerspectiveId>>;

    /// Return a location with a given identifier, if any.
    /// 
    /// * `uuid` - identifier to look up
    fn location(&self, uuid: &LocationId) -> Result<Option<Location>> {
        Ok(self.locations()?
            .into_iter()
            .find(|location| location.uuid() == uuid))
    }

    /// Checks if there are no locations at all.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.locations()?.is_empty())
    }
}
