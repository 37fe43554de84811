pub mod archive;
pub mod download;
pub mod error;
pub mod http;
pub mod install;
pub mod platform;
pub mod progress;
pub mod runtime;
pub mod source;

pub use error::InstallError;
