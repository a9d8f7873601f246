//! Geolocation subsystem.
//!
//! # Data Flow
//! ```text
//! edge network injects x-vercel-ip-* request headers
//!     → location.rs (extract with fallbacks)
//!     → Geolocation
//!     → content.rs (country code → localized content)
//!     → regional demo page / API payload
//! ```
//!
//! # Design Decisions
//! - Missing headers fall back to "Unknown" ("UTC" for timezone); the page
//!   always renders
//! - The country table is hard-coded; this is demo content, not a locale
//!   database

pub mod content;
pub mod location;

pub use content::CountryContent;
pub use location::Geolocation;
