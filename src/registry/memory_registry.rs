use std::cell::RefCell;

use crate::error::{Result, Error};
use crate::location::{Location, LocationId};
use super::registry::{LocationRegistry, PerspectiveId};


/// Registry, that keeps locations in memory only.
#[derive(Default)]
pub struct MemoryRegistry {
    /// Locations in insertion order
    locations: RefCell<Vec<Location>>,

    /// Current location identifier
    current: RefCell<Option<LocationId>>,

    /// Perspectives
    perspectives: Vec<PerspectiveId>,
}


impl MemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry prefilled with locations.
    /// 
    /// * `locations` - initial locations, identifiers must be unique
    pub fn with_locations(locations: Vec<Location>) -> Result<Self> {
        let registry = Self::new();
        for location in locations {
            registry.add_location(location, false)?;
        }

        Ok(registry)
    }

    /// Sets perspectives exposed by the registry.
    /// 
    /// * `perspectives` - perspective identifiers
    pub fn perspectives_from(mut self, perspectives: Vec<PerspectiveId>) -> Self {
        self.perspectives = perspectives;
        self
    }

    fn clear_default_except(locations: &mut [Location], uuid: &LocationId) {
        locations
            .iter_mut()
            .filter(|location| location.uuid() != uuid)
            .for_each(|location| location.is_default = false);
    }
}


impl LocationRegistry for MemoryRegistry {
    fn locations(&self) -> Result<Vec<Location>> {
        Ok(self.locations.borrow().clone())
    }

    fn add_location(&self, location: Location, open_after_create: bool) -> Result<()> {
        let mut locations = self.locations.borrow_mut();
        if locations.iter().any(|existing| existing.uuid() == location.uuid()) {
            return Err(Error::DuplicateLocation(location.uuid().clone()));
        }

        if location.is_default {
            Self::clear_default_except(&mut locations, location.uuid());
        }

        if open_after_create {
            *self.current.borrow_mut() = Some(location.uuid().clone());
        }

        locations.push(location);
        Ok(())
    }

    fn edit_location(&self, location: Location) -> Result<()> {
        let mut locations = self.locations.borrow_mut();
        let position = locations
            .iter()
            .position(|existing| existing.uuid() == location.uuid())
            .ok_or_else(|| Error::UnknownLocation(location.uuid().clone()))?;

        if location.is_default {
            Self::clear_default_except(&mut locations, location.uuid());
        }

        locations[position] = location;
        Ok(())
    }

    fn remove_location(&self, uuid: &LocationId) -> Result<()> {
        let mut locations = self.locations.borrow_mut();
        let position = locations
            .iter()
            .position(|existing| existing.uuid() == uuid)
            .ok_or_else(|| Error::UnknownLocation(uuid.clone()))?;

        locations.remove(position);

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
        Ok(self.perspectives.clone())
    }
}
