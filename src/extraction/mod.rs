//! The extraction engine: walks loosely-typed interview documents and
//! recovers normalized semantic units. The three extractors are independent
//! of each other; every metric consumes their outputs, never the raw tree.

pub mod fields;
pub mod headings;
pub mod options;
pub mod text;

pub use fields::extract_fields;
pub use headings::extract_headings;
pub use text::extract_text;
