//! Line framing and tag block decoding.

mod nom_parser;
pub mod tags;

pub use self::nom_parser::FramedLine;
pub use self::tags::Tags;
