use std::path::PathBuf;
use thiserror::Error;

use crate::http::FetchError;
use crate::platform::UnsupportedPlatform;

pub type Result<T> = std::result::Result<T, InstallError>;

/// Every way an installation run can fail. Each variant maps to its own
/// process exit code.
#[derive(Error, Debug)]
pub enum InstallError {
    #[error(transparent)]
    UnsupportedPlatform(#[from] UnsupportedPlatform),

    #[error("Error with http(s) request: {source}")]
    TransportFailure {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Error extracting archive: {source:#}")]
    ExtractionFailure {
        archive: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("{source:#}")]
    FilesystemFailure {
        #[source]
        source: anyhow::Error,
    },

    #[error("No extracted directory found in {}", .dir.display())]
    StructuralAssumptionViolated { dir: PathBuf },
}

impl InstallError {
    pub fn filesystem(source: impl Into<anyhow::Error>) -> Self {
        InstallError::FilesystemFailure {
            source: source.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            InstallError::UnsupportedPlatform(_) => 1,
            InstallError::TransportFailure { .. } => 2,
            InstallError::ExtractionFailure { .. } => 3,
            InstallError::FilesystemFailure { .. } => 4,
            InstallError::StructuralAssumptionViolated { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            InstallError::from(UnsupportedPlatform::LinuxArch {
                arch: "ia32".into(),
            }),
            InstallError::TransportFailure {
                url: "http://localhost".into(),
                source: FetchError::Status {
                    status: 404,
                    body: String::new(),
                },
            },
            InstallError::ExtractionFailure {
                archive: PathBuf::from("bin/instantclient.zip"),
                source: anyhow!("corrupt"),
            },
            InstallError::filesystem(anyhow!("exists")),
            InstallError::StructuralAssumptionViolated {
                dir: PathBuf::from("bin"),
            },
        ];

        let codes: Vec<u8> = errors.iter().map(InstallError::exit_code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_unsupported_platform_message_is_unchanged() {
        let err = InstallError::from(UnsupportedPlatform::Unknown {
            os: "aix".into(),
            arch: "ppc64".into(),
        });
        assert_eq!(
            err.to_string(),
            "Unexpected platform or architecture: aix ppc64"
        );
    }

    #[test]
    fn test_filesystem_message_includes_context_chain() {
        let source = anyhow!("File exists (os error 17)").context("Failed to create directory bin");
        let err = InstallError::filesystem(source);
        assert_eq!(
            err.to_string(),
            "Failed to create directory bin: File exists (os error 17)"
        );
    }

    #[test]
    fn test_structural_message() {
        let err = InstallError::StructuralAssumptionViolated {
            dir: PathBuf::from("bin"),
        };
        assert_eq!(err.to_string(), "No extracted directory found in bin");
    }
}
