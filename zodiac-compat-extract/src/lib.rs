//! Scrapes compatibility blocks out of the per-sign guide pages.
//!
//! [`blocks`] holds the text grammar; [`extractor`] walks one page per sign
//! and aggregates every block into a [`CompatTable`](zodiac_compat_core::CompatTable).

pub mod blocks;
pub mod error;
pub mod extractor;

pub use blocks::{ParsedBlock, parse_blocks};
pub use error::ExtractError;
pub use extractor::{Collision, DocumentLayout, ExtractReport, Extraction, extract_table};
