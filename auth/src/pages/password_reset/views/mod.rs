mod request;
mod sent;

pub use request::*;
pub use sent::*;
pub use super::state::ResetStage;
