mod data;
mod validation;

pub use self::data::*;
pub use self::validation::validate;
