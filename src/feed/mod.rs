pub mod writer;
pub mod xml;

pub use writer::{write_outputs, WrittenFiles};
pub use xml::{generate_feed, FeedSummary};
