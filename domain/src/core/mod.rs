//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — remote generation models forming the fallback chain
//! - [`keyword::Keyword`] — a validated keyword to generate a quote for

pub mod keyword;
pub mod model;
