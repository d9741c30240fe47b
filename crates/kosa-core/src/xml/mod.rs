pub mod element;
pub mod path;
pub mod reader;
pub mod sanitize;

pub use element::Element;
pub use path::TagPath;
pub use reader::TagPathReader;
pub use sanitize::{SanitizedXml, Sanitizer};
