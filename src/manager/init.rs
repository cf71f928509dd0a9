use crate::config::Config;
use crate::location::{self, Location, LocationType};
use crate::platform::Platform;


/// Synthesizes one local location per device folder reported by the
/// platform, in the platform's order. Only in constrained deployments
/// the folder matching the configured default path is marked default.
/// 
/// * `platform` - platform collaborator
/// * `config` - deployment configuration
pub(crate) fn default_locations<P: Platform>(platform: &P, config: &Config) -> Vec<Location> {
    platform
        .device_paths()
        .into_iter()
        .map(|(label, path)| {
            let is_default = config.is_constrained() && path == config.default_path();

            Location::new(LocationType::Local, label, path)
                .default_location(is_default)
                .read_only(false)
                .persistent_index(false)
        })
        .filter(|candidate| match location::validate(candidate) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(name = %candidate.name, path = %candidate.path, %error, "skipping device folder");
                false
            }
        })
        .collect()
}
