pub mod get;
pub mod list;
pub mod search;

pub use get::{GetCampError, GetCampQuery};
pub use list::{ListCampsError, ListCampsQuery};
pub use search::{SearchCampsError, SearchCampsQuery};
