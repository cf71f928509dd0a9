use crate::config::Config;
use crate::error::{Result, Error};
use crate::location::{self, Location, LocationId};
use crate::platform::Platform;
use crate::registry::{LocationRegistry, PerspectiveId};
use super::init;
use super::scope::WorkflowScope;
use super::selection::DirectoryTarget;
use super::workflow::{Workflow, Workflows};


/// Location manager: owns the modal workflow state and threads the
/// selected location and the target directory between workflows.
///
/// All transitions are synchronous. Registry failures are logged,
/// they are the registry's concern and never surface from here.
pub struct LocationManager<R, P>
where
    R: LocationRegistry,
    P: Platform
{
    /// Registry with locations
    registry: R,

    /// Platform collaborator used to discover device folders
    platform: P,

    /// Deployment configuration
    config: Config,

    /// Workflow flags
    workflows: Workflows,

    /// Location targeted by edit and delete workflows
    selected: Option<LocationId>,

    /// Path targeted by directory workflows
    target: DirectoryTarget,

    /// Whether the location manager menu is shown
    menu_open: bool,

    /// Whether default locations were already considered
    initialized: bool,
}


impl<R, P> LocationManager<R, P>
where
    R: LocationRegistry,
    P: Platform
{
    /// Creates a location manager in its initial state: nothing is open,
    /// nothing is selected.
    ///
    /// * `registry` - registry with locations
    /// * `platform` - platform collaborator
    /// * `config` - deployment configuration
    pub fn new(registry: R, platform: P, config: Config) -> Self {
        LocationManager {
            registry: registry,
            platform: platform,
            config: config,
            workflows: Workflows::default(),
            selected: None,
            target: DirectoryTarget::default(),
            menu_open: false,
            initialized: false,
        }
    }

    /// Adds a location per device folder if the registry is empty.
    ///
    /// Runs once per manager: later calls do nothing, even if all
    /// locations were removed in the meantime.
    /// Returns number of added locations.
    pub fn initialize(&mut self) -> usize {
        if self.initialized {
            tracing::debug!("locations are already initialized");
            return 0;
        }

        self.initialized = true;

        match self.registry.is_empty() {
            Ok(true) => {},
            Ok(false) => return 0,
            Err(error) => {
                tracing::warn!(%error, "cannot list locations, skipping initialization");
                return 0;
            }
        }

        let mut added = 0;
        for location in init::default_locations(&self.platform, &self.config) {
            let uuid = location.uuid().clone();
            match self.registry.add_location(location, false) {
                Ok(()) => added += 1,
                Err(error) => tracing::warn!(%uuid, %error, "cannot add default location"),
            }
        }

        tracing::info!(added, "default locations initialized");
        added
    }

    //
    // Menu
    //

    /// Shows the location manager menu.
    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    /// Hides the location manager menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Checks if the location manager menu is shown.
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// "Create location" menu action: hides the menu and opens
    /// the create workflow.
    pub fn menu_create(&mut self) -> bool {
        self.close_menu();
        self.open_create()
    }

    //
    // Top-level workflows
    //

    /// Opens the create workflow. No location is selected for it.
    /// Returns false if location management is disabled.
    pub fn open_create(&mut self) -> bool {
        self.open_top_level(Workflow::CreateLocation)
    }

    /// Validates a new location and adds it to the registry, then
    /// closes the create workflow.
    ///
    /// Nothing happens if the create workflow is not open. Invalid
    /// locations are rejected and the workflow stays open.
    ///
    /// * `location` - location to add
    /// * `open_after_create` - whether the location should be opened
    pub fn commit_create(&mut self, location: Location, open_after_create: bool) -> Result<()> {
        if !self.is_open(Workflow::CreateLocation) {
            tracing::debug!("create workflow is not open, nothing to add");
            return Ok(());
        }

        location::validate(&location)?;

        let uuid = location.uuid().clone();
        match self.registry.add_location(location, open_after_create) {
            Ok(()) => tracing::info!(%uuid, open_after_create, "location added"),
            Err(error) => tracing::warn!(%uuid, %error, "registry failed to add location"),
        }

        self.close(Workflow::CreateLocation);
        Ok(())
    }

    /// Opens the edit workflow for a location and selects it.
    /// Returns false if location management is disabled.
    ///
    /// * `location` - location to edit
    pub fn open_edit(&mut self, location: &Location) -> bool {
        if !self.open_top_level(Workflow::EditLocation) {
            return false;
        }

        self.select(location);
        true
    }

    /// Validates edited data of the selected location and hands it
    /// over to the registry, then closes the edit workflow.
    ///
    /// Nothing happens if the edit workflow is not open or no location
    /// is selected. Invalid data and data of another location are
    /// rejected, the workflow stays open.
    ///
    /// * `location` - edited location, identifier must not change
    pub fn commit_edit(&mut self, location: Location) -> Result<()> {
        if !self.is_open(Workflow::EditLocation) {
            tracing::debug!("edit workflow is not open, nothing to edit");
            return Ok(());
        }

        let Some(selected) = self.selected.as_ref() else {
            tracing::debug!("no location selected, nothing to edit");
            return Ok(());
        };

        if location.uuid() != selected {
            return Err(Error::IdentityChanged {
                expected: selected.clone(),
                actual: location.uuid().clone(),
            });
        }

        location::validate(&location)?;

        let uuid = location.uuid().clone();
        match self.registry.edit_location(location) {
            Ok(()) => tracing::info!(%uuid, "location edited"),
            Err(error) => tracing::warn!(%uuid, %error, "registry failed to edit location"),
        }

        self.close(Workflow::EditLocation);
        Ok(())
    }

    /// Opens the delete confirmation for a location and selects it.
    /// Returns false if location management is disabled.
    ///
    /// * `location` - location to delete
    pub fn open_delete(&mut self, location: &Location) -> bool {
        if !self.open_top_level(Workflow::DeleteLocation) {
            return false;
        }

        self.select(location);
        true
    }

    /// Handles the delete confirmation result: removes the selected
    /// location if confirmed. The delete workflow is closed anyway.
    /// Nothing happens if the delete workflow is not open.
    ///
    /// * `confirmed` - user's answer
    pub fn confirm_delete(&mut self, confirmed: bool) {
        if !self.is_open(Workflow::DeleteLocation) {
            tracing::debug!("delete workflow is not open, nothing to confirm");
            return;
        }

        if confirmed {
            match self.selected.take() {
                Some(uuid) => match self.registry.remove_location(&uuid) {
                    Ok(()) => tracing::info!(%uuid, "location removed"),
                    Err(error) => tracing::warn!(%uuid, %error, "registry failed to remove location"),
                },

                None => tracing::debug!("no location selected, nothing to remove"),
            }
        }

        self.close(Workflow::DeleteLocation);
    }

    //
    // Directory workflows
    //

    /// Opens the directory picker. An empty seed ("browse") clears
    /// the target path, otherwise the seed ("change path") becomes it.
    ///
    /// * `seed_path` - initial target path
    pub fn open_select_directory(&mut self, seed_path: &str) {
        self.open_directory_workflow(Workflow::SelectDirectory, seed_path);
    }

    /// Directory picker callback: keeps the picker open on the chosen
    /// path, which the calling dialog reads back as the target path.
    ///
    /// * `path` - chosen directory
    pub fn choose_directory(&mut self, path: &str) {
        self.open_directory_workflow(Workflow::SelectDirectory, path);
    }

    /// Opens subdirectory creation under a path.
    ///
    /// * `path` - parent directory
    pub fn create_directory_under(&mut self, path: &str) {
        self.open_directory_workflow(Workflow::CreateDirectory, path);
    }

    //
    // Closing
    //

    /// Closes a workflow. Only its own flag is reset, selection and
    /// target path are kept until overwritten.
    ///
    /// * `workflow` - workflow to close
    pub fn close(&mut self, workflow: Workflow) {
        if self.workflows.is_open(workflow) {
            tracing::debug!(?workflow, "workflow closed");
        }

        self.workflows.close(workflow);
    }

    /// Returns a guard for an open workflow, that closes it when
    /// dropped. Returns nothing if the workflow is not open.
    ///
    /// * `workflow` - workflow to guard
    pub fn scoped(&mut self, workflow: Workflow) -> Option<WorkflowScope<'_, R, P>> {
        if self.is_open(workflow) {
            Some(WorkflowScope::new(self, workflow))
        } else {
            None
        }
    }

    //
    // State access
    //

    /// Checks if a workflow is open.
    pub fn is_open(&self, workflow: Workflow) -> bool {
        self.workflows.is_open(workflow)
    }

    /// All workflow flags.
    pub fn workflows(&self) -> Workflows {
        self.workflows
    }

    /// Identifier of the selected location.
    pub fn selected_location_id(&self) -> Option<&LocationId> {
        self.selected.as_ref()
    }

    /// Selected location as currently stored in the registry.
    /// Returns nothing if it is not registered anymore.
    pub fn selected_location(&self) -> Option<Location> {
        let uuid = self.selected.as_ref()?;
        match self.registry.location(uuid) {
            Ok(location) => location,
            Err(error) => {
                tracing::warn!(%uuid, %error, "cannot look up selected location");
                None
            }
        }
    }

    /// Path targeted by directory workflows.
    pub fn target_path(&self) -> Option<&str> {
        self.target.path()
    }

    /// Registered locations in registry order, empty if the registry
    /// cannot be read.
    pub fn locations(&self) -> Vec<Location> {
        self.registry.locations().unwrap_or_else(|error| {
            tracing::warn!(%error, "cannot list locations");
            Vec::new()
        })
    }

    /// Perspectives of the registry, passed through as is.
    pub fn perspectives(&self) -> Vec<PerspectiveId> {
        self.registry.perspectives().unwrap_or_else(|error| {
            tracing::warn!(%error, "cannot list perspectives");
            Vec::new()
        })
    }

    /// Location opened last after creation.
    pub fn current_location(&self) -> Option<LocationId> {
        self.registry.current_location().unwrap_or_else(|error| {
            tracing::warn!(%error, "cannot read current location");
            None
        })
    }

    /// Underlying registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Deployment configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}


impl<R, P> LocationManager<R, P>
where
    R: LocationRegistry,
    P: Platform
{
    fn open_top_level(&mut self, workflow: Workflow) -> bool {
        if self.config.locations_read_only() {
            tracing::info!(?workflow, "locations are read-only, workflow not opened");
            return false;
        }

        //
        // Callers open one top-level workflow at a time,
        // others are not closed here
        //

        let others: Vec<_> = self.workflows
            .open_top_level()
            .into_iter()
            .filter(|open| *open != workflow)
            .collect();

        if !others.is_empty() {
            tracing::warn!(?workflow, ?others, "opening workflow while others are open");
        }

        self.workflows.open(workflow);
        tracing::debug!(?workflow, "workflow opened");
        true
    }

    fn open_directory_workflow(&mut self, workflow: Workflow, path: &str) {
        self.target.seed(path);
        self.workflows.open(workflow);
        tracing::debug!(?workflow, path, "workflow opened");
    }

    fn select(&mut self, location: &Location) {
        self.selected = Some(location.uuid().clone());
    }
}
