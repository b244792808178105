pub mod apply_mode;
pub mod list;
