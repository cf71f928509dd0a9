/// Device folders as (label, path) pairs in the platform's own order.
pub type DevicePaths = Vec<(String, String)>;


/// Platform I/O collaborator.
pub trait Platform {
    /// Well-known device folders, that are offered as default locations.
    fn device_paths(&self) -> DevicePaths;
}
