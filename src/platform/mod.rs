mod platform;
mod dirs_platform;
mod static_platform;

pub use self::platform::{Platform, DevicePaths};
pub use self::dirs_platform::DirsPlatform;
pub use self::static_platform::StaticPlatform;
