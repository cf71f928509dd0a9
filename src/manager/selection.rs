/// Path, that a directory pick or directory creation workflow
/// currently targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTarget {
    path: Option<String>,
}


impl DirectoryTarget {
    /// Replaces the target. An empty seed clears it.
    /// 
    /// * `path` - new target path
    pub fn seed(&mut self, path: &str) {
        self.path = if path.is_empty() {
            None
        } else {
            Some(path.to_owned())
        };
    }

    /// Current target, if any.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_seed_clears_target() {
        let mut target = DirectoryTarget::default();
        assert_eq!(target.path(), None);

        target.seed("/a/b");
        assert_eq!(target.path(), Some("/a/b"));

        target.seed("");
        assert_eq!(target.path(), None);
    }
}
