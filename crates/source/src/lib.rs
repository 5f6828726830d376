//! Sources of inspection results pages.
//!
//! A page comes either from a live search against the results endpoint
//! ([`Fetcher`]) or from a copy saved earlier ([`load`]). Either way the
//! result is the same [`Page`]: raw bytes plus the encoding they declare,
//! ready for [`foodsafe_extract::Document::parse`].

pub mod error;
mod fetch;
mod page;
mod query;

pub use crate::fetch::Fetcher;
pub use crate::page::{Page, load};
pub use crate::query::{PARAMETERS, SearchQuery};
