// src/specs/mod.rs
//! # Page parsers
//!
//! Page-specific extraction for the documentation sites. Each module takes the
//! HTML of one page (or page family) and pulls out the facts a mode needs.
//!
//! ## What lives here
//! - **Pure HTML parsing**: functions take `&str` bodies and return plain data.
//!   No networking, no logging, no progress reporting.
//! - **Selector choice**: the CSS selectors and tag/attribute shapes each site
//!   uses. When the sites change, this is the place to look.
//! - **Strict lookups** through `core::html::find_tag`, so a missing container
//!   becomes a `QueryError::TagNotFound` instead of an empty result.
//!
//! ## What does **not** live here
//! - Fetching, URL joining, per-item error recovery, tallying: see `scrape`.
//! - Rendering and persistence: see `output`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_* → Fetch::get_page → specs::<page>::parse_*()
//!                            ↘ DataSet → output::render
//! ```
//!
//! ## Testing notes
//! Every page module is tested offline against trimmed copies of the real markup.
pub mod downloads;
pub mod latest_versions;
pub mod peps;
pub mod whats_new;
