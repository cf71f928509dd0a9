use crate::platform::Platform;
use crate::registry::LocationRegistry;
use super::manager::LocationManager;
use super::workflow::Workflow;


/// Guard for an open workflow, that gives access to the manager and
/// closes exactly this workflow when dropped, whatever way the dialog
/// is left (confirmation, cancellation or dismissal).
pub struct WorkflowScope<'a, R, P>
where
    R: LocationRegistry,
    P: Platform
{
    manager: &'a mut LocationManager<R, P>,
    workflow: Workflow,
}


impl<'a, R, P> WorkflowScope<'a, R, P>
where
    R: LocationRegistry,
    P: Platform
{
    pub(crate) fn new(manager: &'a mut LocationManager<R, P>, workflow: Workflow) -> Self {
        WorkflowScope {
            manager: manager,
            workflow: workflow,
        }
    }

    /// Guarded workflow.
    pub fn workflow(&self) -> Workflow {
        self.workflow
    }
}


impl<'a, R, P> std::ops::Deref for WorkflowScope<'a, R, P>
where
    R: LocationRegistry,
    P: Platform
{
    type Target = LocationManager<R, P>;

    fn deref(&self) -> &Self::Target {
        self.manager
    }
}


impl<'a, R, P> std::ops::DerefMut for WorkflowScope<'a, R, P>
where
    R: LocationRegistry,
    P: Platform
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.manager
    }
}


impl<'a, R, P> Drop for WorkflowScope<'a, R, P>
where
    R: LocationRegistry,
    P: Platform
{
    fn drop(&mut self) {
        self.manager.close(self.workflow);
    }
}
