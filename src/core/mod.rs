//! Core module
//!
//! Display-free logic behind the orb and its utilities.

pub mod gallery;
pub mod gesture;
pub mod image_ops;
pub mod launch;
pub mod menu;
