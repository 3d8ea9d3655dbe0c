pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateCampCommand, CreateCampError};
pub use delete::{DeleteCampCommand, DeleteCampError};
pub use update::{UpdateCampCommand, UpdateCampError};
