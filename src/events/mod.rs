pub mod forms;
pub mod pointer;

pub use forms::{wire_login_page, wire_settings_page};
pub use pointer::wire_page_lifecycle;
