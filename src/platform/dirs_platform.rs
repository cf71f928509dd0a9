use std::path::PathBuf;

use lazy_static::lazy_static;

use super::platform::{Platform, DevicePaths};


/// Function, that resolves a well-known folder.
type FolderLookup = fn() -> Option<PathBuf>;


lazy_static! {
    /// Well-known folders in the order they are offered.
    static ref DEVICE_FOLDERS: Vec<(&'static str, FolderLookup)> = vec![
        ("Desktop",   dirs::desktop_dir as FolderLookup),
        ("Documents", dirs::document_dir as FolderLookup),
        ("Downloads", dirs::download_dir as FolderLookup),
        ("Music",     dirs::audio_dir as FolderLookup),
        ("Pictures",  dirs::picture_dir as FolderLookup),
        ("Videos",    dirs::video_dir as FolderLookup),
        ("Home",      dirs::home_dir as FolderLookup),
    ];
}


/// Platform, that reports the current user's folders.
/// Folders unknown to the OS are skipped.
#[derive(Default)]
pub struct DirsPlatform;


impl DirsPlatform {
    /// Just creates an instance.
    pub fn new() -> Self {
        DirsPlatform
    }
}


impl Platform for DirsPlatform {
    fn device_paths(&self) -> DevicePaths {
        DEVICE_FOLDERS
            .iter()
            .filter_map(|(label, lookup)| {
                lookup().map(|path| ((*label).to_owned(), path.to_string_lossy().into_owned()))
            })
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_home_last_when_known() {
        let paths = DirsPlatform::new().device_paths();

        if let Some(home) = dirs::home_dir() {
            let (label, path) = paths.last().unwrap();
            assert_eq!(label, "Home");
            assert_eq!(path, &home.to_string_lossy().into_owned());
        }

        assert!(paths.iter().all(|(_, path)| !path.is_empty()));
    }
}
