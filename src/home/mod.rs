mod data_root;
mod home;

pub use self::data_root::DataRoot;
pub use self::home::{HomeDataRoot, DirectoryDataRoot};
