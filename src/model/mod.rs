pub mod downloader;
pub mod filename;
pub mod registry;

pub use downloader::{list_versions, Fetch, HttpFetcher, ModelDownloader};
pub use registry::{ModelRegistry, PretrainedModel};
