//! labsite-common: records, the immutable content catalog, filters and errors.
//! shared by the lab homepage renderer.

pub mod error;
pub mod entities;
pub mod catalog;
pub mod filter;
pub mod site_profile;

// Re-export commonly used types
pub use catalog::Catalog;
pub use entities::{Course, Person, Publication, ResearchArea, Role};
pub use filter::{PublicationQuery, RoleFilter, YearFilter};
pub use site_profile::{Brand, SiteProfile};
