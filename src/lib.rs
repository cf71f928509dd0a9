//! # liblocations
//! 
//! `liblocations` keeps track of locations -- named roots of directory
//! trees, that a file organizer browses and indexes -- and drives the
//! modal workflows used to create, edit and delete them.

extern crate dirs;
extern crate chrono;
extern crate rusqlite;

//
// Public modules
//

pub mod home;
pub mod location;
pub mod registry;
pub mod platform;
pub mod manager;
pub mod snapshot;
pub mod config;
pub mod datetime;
pub mod error;

pub use self::config::{Config, Deployment};
pub use self::error::{Error, Result, ValidationError};
pub use self::location::{Location, LocationId, LocationType};
pub use self::manager::{LocationManager, Workflow};
pub use self::registry::LocationRegistry;
