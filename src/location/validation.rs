use crate::error::ValidationError;
use super::data::Location;


/// Checks a location candidate before it is handed over to a registry.
/// 
/// Path existence is not checked here, it is up to the platform
/// at the moment the location is used.
/// 
/// * `candidate` - location to check
pub fn validate(candidate: &Location) -> std::result::Result<(), ValidationError> {
    if candidate.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if candidate.path.trim().is_empty() {
        return Err(ValidationError::EmptyPath);
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_named_location_with_path() {
        assert_eq!(validate(&Location::local("Docs", "/docs")), Ok(()));
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(validate(&Location::local("", "/docs")), Err(ValidationError::EmptyName));
        assert_eq!(validate(&Location::local("   ", "/docs")), Err(ValidationError::EmptyName));
    }

    #[test]
    fn rejects_empty_path() {
        assert_eq!(validate(&Location::local("Docs", "")), Err(ValidationError::EmptyPath));
    }

    #[test]
    fn name_is_checked_first() {
        assert_eq!(validate(&Location::local("", "")), Err(ValidationError::EmptyName));
    }

    #[test]
    fn nonexistent_path_is_accepted() {
        assert_eq!(validate(&Location::local("Gone", "/definitely/not/here")), Ok(()));
    }
}
