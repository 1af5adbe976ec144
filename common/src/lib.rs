pub use application::*;
pub use request::*;
pub use response::*;

pub mod application;
pub mod error;
pub mod request;
pub mod response;
