// ============================================================================
// VIEWMODELS - One per management page
// ============================================================================
// Each page composes the generic state primitives (search, modals, forms,
// confirm dialog). The async handlers here are what the page hooks run.
// ============================================================================

pub mod activities_viewmodel;
pub mod hours_viewmodel;
pub mod outcome;
pub mod volunteers_viewmodel;

#[cfg(test)]
pub(crate) mod test_support;

pub use activities_viewmodel::{ActivitiesAction, ActivitiesPage};
pub use hours_viewmodel::{HoursAction, HoursPage};
pub use volunteers_viewmodel::{project_assignment, AssignmentChange, VolunteersAction, VolunteersPage};
