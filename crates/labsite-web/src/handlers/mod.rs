//! HTTP handlers for all web routes.

pub mod home;
pub mod publications;
pub mod people;
pub mod content;
pub mod system;
