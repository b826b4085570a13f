//! Marker-block editing of the workbench stylesheet
//!
//! Every block this crate manages starts with a literal CSS comment token and
//! runs until the next managed token or the end of the file. Anything before
//! the first token belongs to somebody else and is never touched.

pub mod blocks;
pub mod markers;
pub mod scrub;

pub use blocks::build_block;
pub use markers::{locate, present_markers, Marker};
pub use scrub::{compose, scrub, scrub_all, scrub_marker};
