mod config;
mod file;
mod serializer;
pub mod token;

pub use config::FileConfig;
pub use config::ProjectConfig;
pub use file::compact;
pub use file::expand;
pub use file::CompactProjectFile;
pub use file::ProjectFile;
pub use serializer::deserialize;
pub use serializer::serialize;
pub use serializer::EncodeError;
pub use serializer::MalformedProjectError;
pub use serializer::ProjectTokenError;
pub use token::DecodeError;
