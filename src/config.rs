use serde::{Serialize, Deserialize};

use crate::error::{Result, Error};
use crate::home::DataRoot;


/// File with serialized configuration.
const CONFIG_FILE: &str = "config";

/// Path, that is marked as default in web deployments.
const WEB_DEFAULT_PATH: &str = "/files/";


/// How the application is deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deployment {
    /// Regular desktop application
    Desktop,

    /// Constrained web deployment with a designated default path
    Web,
}


/// Location manager configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Deployment mode
    deployment: Deployment,

    /// Path of the default location in constrained deployments
    default_path: String,

    /// Locations cannot be created, edited or deleted by the user
    locations_read_only: bool,
}


impl Default for Config {
    fn default() -> Self {
        Config {
            deployment: Deployment::Desktop,
            default_path: WEB_DEFAULT_PATH.to_owned(),
            locations_read_only: false,
        }
    }
}


impl Config {
    /// Creates a configuration.
    /// 
    /// * `deployment` - deployment mode
    /// * `default_path` - path of the default location in web deployments
    /// * `locations_read_only` - forbid location management workflows
    pub fn new<P: Into<String>>(deployment: Deployment, default_path: P, locations_read_only: bool) -> Self {
        Config {
            deployment: deployment,
            default_path: default_path.into(),
            locations_read_only: locations_read_only,
        }
    }

    /// Web deployment with the stock default path.
    pub fn web() -> Self {
        Self::new(Deployment::Web, WEB_DEFAULT_PATH, false)
    }

    /// Opens an existing configuration.
    /// 
    /// * `root` - data root provider
    pub fn open<R: DataRoot>(root: &R) -> Result<Self> {
        let raw_config = std::fs::read(Self::config_file(root)?)?;

        flexbuffers::from_slice(&raw_config)
            .map_err(Error::from)
    }

    /// Stores a configuration and then loads it back.
    /// 
    /// * `root` - data root provider
    /// * `config` - configuration to store
    pub fn create<R: DataRoot>(root: &R, config: &Config) -> Result<Self> {
        root.create_if_absent()?;

        std::fs::write(Self::config_file(root)?,
            flexbuffers::to_vec(config)?)?;

        tracing::debug!(deployment = ?config.deployment, "configuration stored");

        Self::open(root)
    }

    /// Deployment mode.
    pub fn deployment(&self) -> Deployment {
        self.deployment
    }

    /// Checks if running in the constrained (web) deployment.
    pub fn is_constrained(&self) -> bool {
        self.deployment == Deployment::Web
    }

    /// Path of the default location in constrained deployments.
    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    /// Location management workflows are disabled.
    pub fn locations_read_only(&self) -> bool {
        self.locations_read_only
    }
}


impl Config {
    fn config_file<R: DataRoot>(root: &R) -> Result<std::path::PathBuf> {
        Ok(root.root()?
            .join(CONFIG_FILE))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::DirectoryDataRoot;

    #[test]
    fn default_is_writable_desktop() {
        let config = Config::default();

        assert_eq!(config.deployment(), Deployment::Desktop);
        assert!(!config.is_constrained());
        assert!(!config.locations_read_only());
        assert_eq!(config.default_path(), "/files/");
    }

    #[test]
    fn stored_configuration_is_loaded_back() {
        let scratch = tempfile::tempdir().unwrap();
        let root = DirectoryDataRoot::new(scratch.path());
        let config = Config::new(Deployment::Web, "/srv/files/", true);

        let created = Config::create(&root, &config).unwrap();
        assert_eq!(created, config);
        assert_eq!(Config::open(&root).unwrap(), config);
    }

    #[test]
    fn missing_configuration_is_an_error() {
        let scratch = tempfile::tempdir().unwrap();
        let root = DirectoryDataRoot::new(scratch.path());

        assert!(matches!(Config::open(&root), Err(Error::Io(_))));
    }
}
