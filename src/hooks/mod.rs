pub mod use_activities_page;
pub mod use_auth;
pub mod use_confirm_dialog;
pub mod use_debounce;
pub mod use_fetch;
pub mod use_form_data;
pub mod use_hours_page;
pub mod use_modal;
pub mod use_search_and_filter;
pub mod use_volunteers_page;

pub use use_activities_page::{use_activities_page, UseActivitiesPageHandle};
pub use use_auth::{use_auth, UseAuthHandle};
pub use use_confirm_dialog::{use_confirm_dialog, UseConfirmDialogHandle};
pub use use_debounce::use_debounce;
pub use use_fetch::{use_fetch, UseFetchHandle};
pub use use_form_data::{use_form_data, UseFormDataHandle};
pub use use_hours_page::{use_hours_page, UseHoursPageHandle};
pub use use_modal::{use_modal, UseModalHandle};
pub use use_search_and_filter::{use_search_and_filter, UseSearchAndFilterHandle};
pub use use_volunteers_page::{use_volunteers_page, UseVolunteersPageHandle};
