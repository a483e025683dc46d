pub mod config;
pub mod error;
pub mod requests;

pub use config::*;
pub use error::*;
pub use requests::*;
