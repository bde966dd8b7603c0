pub mod merge;
pub mod value_model;
