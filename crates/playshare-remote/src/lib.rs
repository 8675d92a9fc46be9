mod convert;
mod fetch;
mod http;
mod resolver;

pub use convert::collection_to_files;
pub use convert::MANIFEST_NAME;
pub use fetch::is_valid_reference_id;
pub use fetch::FetchError;
pub use fetch::RemoteCollection;
pub use fetch::RemoteFetcher;
pub use fetch::RemoteFile;
pub use http::HttpFetcher;
pub use resolver::RemoteProject;
pub use resolver::RemoteResolver;

pub use async_trait::async_trait;
