mod document;
mod record;
mod verdict;

pub use document::*;
pub use record::*;
pub use verdict::*;
