use crate::error::{Result, Error};
use super::data_root::DataRoot;


/// Root folder for the crate's data.
const ROOT_FOLDER: &str = ".locations";


/// Data root based on current user's home directory.
pub struct HomeDataRoot;


impl HomeDataRoot {
    /// Just creates an instance.
    pub fn new() -> Self {
        HomeDataRoot
    }
}


impl Default for HomeDataRoot {
    fn default() -> Self {
        Self::new()
    }
}


impl DataRoot for HomeDataRoot {
    fn root(&self) -> Result<std::path::PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(ROOT_FOLDER))
            .ok_or(Error::NoHomeDirectory)
    }
}


/// Data root placed in an explicitly chosen directory.
pub struct DirectoryDataRoot {
    /// Directory to keep data in
    directory: std::path::PathBuf,
}


impl DirectoryDataRoot {
    /// Creates an instance bound to a directory.
    /// 
    /// * `directory` - directory to keep data in, created lazily
    pub fn new<P: Into<std::path::PathBuf>>(directory: P) -> Self {
        DirectoryDataRoot {
            directory: directory.into()
        }
    }
}


impl DataRoot for DirectoryDataRoot {
    fn root(&self) -> Result<std::path::PathBuf> {
        Ok(self.directory.clone())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_root_is_created_on_demand() {
        let scratch = tempfile::tempdir().unwrap();
        let root = DirectoryDataRoot::new(scratch.path().join("nested").join("data"));

        assert!(!root.exists());
        root.create_if_absent().unwrap();
        assert!(root.exists());

        // Second call is a no-op
        root.create_if_absent().unwrap();
    }

    #[test]
    fn home_root_lives_under_home_directory() {
        if let Some(home) = dirs::home_dir() {
            let root = HomeDataRoot::new().root().unwrap();
            assert_eq!(root, home.join(ROOT_FOLDER));
        }
    }
}
