//! Audio decoding.

mod decode;

pub use decode::{DecodedAudio, decode_subclip};
