//! Listing source adapters.

mod file;
mod http;
mod sample;

pub use file::FileSource;
pub use http::HttpSource;
pub use sample::SampleSource;
