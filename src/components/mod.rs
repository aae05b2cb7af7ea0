//! UI Components
//!
//! Leptos components making up the board.

mod source_table;
mod target_table;
mod toast;
mod toolbar;

pub use source_table::SourceTable;
pub use target_table::TargetTable;
pub use toast::Toast;
pub use toolbar::Toolbar;
