//! Domain models for Niramay.

mod diet;
mod doctor;
mod medication;

pub use diet::*;
pub use doctor::*;
pub use medication::*;
