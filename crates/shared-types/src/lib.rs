pub mod auth;
pub mod billing;
pub mod catalog;
pub mod claims;
pub mod config;
pub mod error;
pub mod identity;
pub mod view;

pub use auth::*;
pub use billing::*;
pub use catalog::*;
pub use claims::*;
pub use config::*;
pub use error::*;
pub use identity::*;
pub use view::*;
