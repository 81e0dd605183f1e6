//! Shared data model for the zodiac compatibility pipeline.
//!
//! Both the extractor and the module generator depend on this crate, so the
//! twelve-sign enumeration, the canonical pair key and the artifact format
//! are each defined exactly once.

pub mod artifact;
pub mod error;
pub mod key;
pub mod sign;
pub mod table;
pub mod util;

pub use artifact::{read_artifact, write_artifact};
pub use error::ArtifactError;
pub use key::{CompatKey, KEY_SEPARATOR};
pub use sign::{Sign, SignParseError};
pub use table::{CompatEntry, CompatTable};
