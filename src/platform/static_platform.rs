use super::platform::{Platform, DevicePaths};


/// Platform with a fixed set of device folders, e.g. for web
/// deployments where folders are configured by an administrator.
#[derive(Default, Clone)]
pub struct StaticPlatform {
    paths: DevicePaths,
}


impl StaticPlatform {
    /// Creates a platform reporting the given folders.
    /// 
    /// * `paths` - (label, path) pairs
    pub fn new<L, P, I>(paths: I) -> Self
    where
        L: Into<String>,
        P: Into<String>,
        I: IntoIterator<Item = (L, P)>
    {
        StaticPlatform {
            paths: paths
                .into_iter()
                .map(|(label, path)| (label.into(), path.into()))
                .collect()
        }
    }
}


impl Platform for StaticPlatform {
    fn device_paths(&self) -> DevicePaths {
        self.paths.clone()
    }
}
