//! Core data types for persona inference

mod item;
mod persona;

pub use item::TextItem;
pub use persona::{Demographics, Persona};
