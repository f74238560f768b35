pub mod delete;
pub mod edit;
pub mod project;
pub mod tree;
pub mod types;
