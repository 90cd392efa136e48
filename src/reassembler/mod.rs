//! Subclip reassembly pipeline.
//!
//! This module provides functionality to reconstruct whole recordings from
//! directories of split subclips, grouping files by clip identifier and
//! concatenating them in numeric sequence order.

pub mod command;
mod grouper;
mod parser;
mod writer;

pub use grouper::{ClipGroup, Subclip, scan_subclips};
pub use parser::{SubclipName, parse_subclip_name};
pub use writer::WavWriter;
