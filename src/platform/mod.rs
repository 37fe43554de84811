//! Platform detection and resolution module
//!
//! Maps the host OS and architecture onto one of the three platforms the
//! vendor publishes an Instant Client build for. Resolution is a pure
//! function; unsupported hosts come back as [`UnsupportedPlatform`] and the
//! caller decides how to exit.

mod detection;

use std::fmt;
use thiserror::Error;

pub use detection::{DefaultPlatformDetector, Platform, PlatformDetector};

#[cfg(test)]
pub use detection::MockPlatformDetector;

/// Logical platform selecting which archive is downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKey {
    Win32,
    Linux64,
    Mac64,
}

impl PlatformKey {
    pub const ALL: [PlatformKey; 3] = [PlatformKey::Win32, PlatformKey::Linux64, PlatformKey::Mac64];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKey::Win32 => "win32",
            PlatformKey::Linux64 => "linux64",
            PlatformKey::Mac64 => "mac64",
        }
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host OS/architecture combination with no published build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedPlatform {
    #[error("Only Linux 64 bits supported.")]
    LinuxArch { arch: String },

    #[error("Only Mac 64 bits supported.")]
    MacArch { os: String, arch: String },

    #[error("Unexpected platform or architecture: {os} {arch}")]
    Unknown { os: String, arch: String },
}

/// Resolve a platform into the key of its download.
///
/// Windows is accepted for every architecture. BSDs share the macOS build.
pub fn resolve(platform: &Platform) -> Result<PlatformKey, UnsupportedPlatform> {
    let arch = platform.arch.as_str();
    match platform.os.as_str() {
        "linux" => match arch {
            "x64" | "arm64" => Ok(PlatformKey::Linux64),
            _ => Err(UnsupportedPlatform::LinuxArch {
                arch: arch.to_string(),
            }),
        },
        "darwin" | "freebsd" | "openbsd" | "netbsd" => match arch {
            "x64" => Ok(PlatformKey::Mac64),
            _ => Err(UnsupportedPlatform::MacArch {
                os: platform.os.clone(),
                arch: arch.to_string(),
            }),
        },
        "win32" => Ok(PlatformKey::Win32),
        other => Err(UnsupportedPlatform::Unknown {
            os: other.to_string(),
            arch: arch.to_string(),
        }),
    }
}
