//! Data models

pub mod challenge;
pub mod drawing;

pub use challenge::*;
pub use drawing::*;
