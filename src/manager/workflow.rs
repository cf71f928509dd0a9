/// Modal user interactions driven by the location manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workflow {
    /// Create a new location
    CreateLocation,

    /// Edit the selected location
    EditLocation,

    /// Confirm removal of the selected location
    DeleteLocation,

    /// Pick a directory (nested in create/edit dialogs)
    SelectDirectory,

    /// Create a subdirectory under the target path
    CreateDirectory,
}


impl Workflow {
    /// All workflows.
    pub const ALL: [Workflow; 5] = [
        Workflow::CreateLocation,
        Workflow::EditLocation,
        Workflow::DeleteLocation,
        Workflow::SelectDirectory,
        Workflow::CreateDirectory,
    ];

    /// Top-level workflows are started from menus and list items,
    /// the rest are helpers nested inside them.
    pub fn is_top_level(self) -> bool {
        match self {
            Workflow::CreateLocation |
            Workflow::EditLocation |
            Workflow::DeleteLocation => true,

            Workflow::SelectDirectory |
            Workflow::CreateDirectory => false,
        }
    }
}


/// Open/closed flag for every workflow. Flags are independent,
/// opening one never closes another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Workflows {
    create: bool,
    edit: bool,
    delete: bool,
    select_directory: bool,
    create_directory: bool,
}


impl Workflows {
    /// Checks if a workflow is open.
    pub fn is_open(&self, workflow: Workflow) -> bool {
        match workflow {
            Workflow::CreateLocation  => self.create,
            Workflow::EditLocation    => self.edit,
            Workflow::DeleteLocation  => self.delete,
            Workflow::SelectDirectory => self.select_directory,
            Workflow::CreateDirectory => self.create_directory,
        }
    }

    /// Open workflows.
    pub fn open_workflows(&self) -> Vec<Workflow> {
        Workflow::ALL
            .into_iter()
            .filter(|workflow| self.is_open(*workflow))
            .collect()
    }

    /// Open top-level workflows.
    pub fn open_top_level(&self) -> Vec<Workflow> {
        self.open_workflows()
            .into_iter()
            .filter(|workflow| workflow.is_top_level())
            .collect()
    }

    /// Checks if nothing is open.
    pub fn is_idle(&self) -> bool {
        *self == Workflows::default()
    }

    pub(crate) fn open(&mut self, workflow: Workflow) {
        *self.flag_mut(workflow) = true;
    }

    pub(crate) fn close(&mut self, workflow: Workflow) {
        *self.flag_mut(workflow) = false;
    }

    fn flag_mut(&mut self, workflow: Workflow) -> &mut bool {
        match workflow {
            Workflow::CreateLocation  => &mut self.create,
            Workflow::EditLocation    => &mut self.edit,
            Workflow::DeleteLocation  => &mut self.delete,
            Workflow::SelectDirectory => &mut self.select_directory,
            Workflow::CreateDirectory => &mut self.create_directory,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_independent() {
        let mut workflows = Workflows::default();
        assert!(workflows.is_idle());

        workflows.open(Workflow::EditLocation);
        workflows.open(Workflow::SelectDirectory);
        assert_eq!(workflows.open_workflows(), vec![Workflow::EditLocation, Workflow::SelectDirectory]);
        assert_eq!(workflows.open_top_level(), vec![Workflow::EditLocation]);

        workflows.close(Workflow::SelectDirectory);
        assert!(workflows.is_open(Workflow::EditLocation));
        assert!(!workflows.is_open(Workflow::SelectDirectory));

        workflows.close(Workflow::EditLocation);
        assert!(workflows.is_idle());
    }

    #[test]
    fn directory_workflows_are_nested_helpers() {
        assert!(Workflow::CreateLocation.is_top_level());
        assert!(!Workflow::SelectDirectory.is_top_level());
        assert!(!Workflow::CreateDirectory.is_top_level());
    }
}
