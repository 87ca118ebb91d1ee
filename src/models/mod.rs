//! Request/response models

pub mod response;
pub mod survey;

pub use response::*;
pub use survey::*;
