//! labsite-web: the server-rendered lab homepage.
//! Provides:
//!   - the homepage with query-string driven people and publication filters
//!   - a JSON API over the same filters
//!   - a static export for hosting without a server

pub mod config;
pub mod error;
pub mod router;
pub mod handlers;
pub mod state;
pub mod view;
pub mod render;
pub mod assets;
pub mod export;
