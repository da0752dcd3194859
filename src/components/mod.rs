//! UI Components
//!
//! Reusable Leptos components and the page components built from them.

mod avatar_stack;
mod date_range_field;
mod delete_confirm_button;
mod form_actions;
mod form_field;
mod link;
mod login_form;
mod page_header;
mod progress_bar;
mod signup_form;
mod study_card;
mod study_create_page;
mod study_detail_page;
mod study_edit_page;
mod study_form;
mod study_list_page;
mod theme_toggle;

pub use avatar_stack::{AvatarStack, ParticipantList};
pub use date_range_field::DateRangeField;
pub use delete_confirm_button::DeleteConfirmButton;
pub use form_actions::FormActions;
pub use form_field::{FieldError, FieldKind, FormField};
pub use link::Link;
pub use login_form::LoginPage;
pub use page_header::PageHeader;
pub use progress_bar::ProgressBar;
pub use signup_form::SignupPage;
pub use study_card::StudyCard;
pub use study_create_page::StudyCreatePage;
pub use study_detail_page::StudyDetailPage;
pub use study_edit_page::StudyEditPage;
pub use study_form::StudyForm;
pub use study_list_page::StudyListPage;
pub use theme_toggle::ThemeToggle;
