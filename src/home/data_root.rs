use crate::error::Result;


/// Trait, that manages the directory where the crate keeps its own
/// data: configuration file and location database.
pub trait DataRoot {
    /// Get root path of the data directory.
    fn root(&self) -> Result<std::path::PathBuf>;

    /// Checks if root directory is present.
    fn exists(&self) -> bool {
        self.root()
            .map(|root| root.exists())
            .unwrap_or(false)
    }

    /// Create root directory if it doesn't exist.
    fn create_if_absent(&self) -> Result<()> {
        let root = self.root()?;
        if !root.exists() {
            tracing::debug!(root = %root.display(), "creating data root");
            std::fs::create_dir_all(root)?;
        }

        Ok(())
    }
}
