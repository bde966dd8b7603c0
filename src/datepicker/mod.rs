pub mod format;
pub mod widget;
