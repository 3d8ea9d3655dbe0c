pub mod get;
pub mod list;

pub use get::{GetTalkError, GetTalkQuery};
pub use list::{ListTalksError, ListTalksQuery};
