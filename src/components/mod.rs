//! UI Components
//!
//! Reusable Leptos components.

mod add_chore_dialog;
mod chore_form_fields;
mod chore_list;
mod delete_confirm_button;
mod detail_dialog;
mod email_button;
mod filter_tab_bar;
mod notice_bar;

pub use add_chore_dialog::AddChoreDialog;
pub use chore_form_fields::ChoreFormFields;
pub use chore_list::ChoreList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use detail_dialog::DetailDialogView;
pub use email_button::EmailChoresButton;
pub use filter_tab_bar::FilterTabBar;
pub use notice_bar::NoticeBar;
