// Standalone components
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod spinner;

// Primitive wrappers
pub mod label;
pub mod separator;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use separator::*;
pub use spinner::*;
