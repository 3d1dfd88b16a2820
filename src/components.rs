mod directory_view;
pub use directory_view::*;
mod employee_list;
pub use employee_list::*;
mod employee_row;
pub use employee_row::*;
mod record_editor;
pub use record_editor::*;
