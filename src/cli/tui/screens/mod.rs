/// Screen modules
pub mod gallery;
pub mod wizard;
