pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateTalkCommand, CreateTalkError};
pub use delete::{DeleteTalkCommand, DeleteTalkError};
pub use update::{UpdateTalkCommand, UpdateTalkError};
