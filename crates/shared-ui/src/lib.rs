//! Presentation primitives shared by every NoteVault screen.

pub mod components;

pub use components::*;
