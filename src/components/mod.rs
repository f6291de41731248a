//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod todo_list;
mod todo_row;
mod delete_confirm_button;
mod status_line;

pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use delete_confirm_button::DeleteConfirmButton;
pub use status_line::StatusLine;
