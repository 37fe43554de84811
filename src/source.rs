//! Download locations for each supported platform.

use crate::platform::PlatformKey;

/// Vendor host serving the Instant Client archives.
pub const DEFAULT_BASE_URL: &str = "https://download.oracle.com/otn_software";

const CLIENT_TYPE: &str = "instantclient-basiclite";

/// Path of each archive below the base URL. The version is part of the path,
/// so this table decides which release gets installed.
fn archive_path(key: PlatformKey) -> String {
    match key {
        PlatformKey::Win32 => {
            format!("nt/instantclient/19600/{CLIENT_TYPE}-windows.x64-19.6.0.0.0dbru.zip")
        }
        PlatformKey::Linux64 => {
            format!("linux/instantclient/19600/{CLIENT_TYPE}-linux.x64-19.6.0.0.0dbru.zip")
        }
        PlatformKey::Mac64 => {
            format!("mac/instantclient/198000/{CLIENT_TYPE}-macos.x64-19.8.0.0.0dbru.zip")
        }
    }
}

/// Mapping from platform to the URL its archive is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTable {
    win32: String,
    linux64: String,
    mac64: String,
}

impl Default for SourceTable {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl SourceTable {
    /// Build the vendor table rooted at `base_url` instead of the vendor host.
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let url = |key| format!("{}/{}", base, archive_path(key));
        Self {
            win32: url(PlatformKey::Win32),
            linux64: url(PlatformKey::Linux64),
            mac64: url(PlatformKey::Mac64),
        }
    }

    fn slot_mut(&mut self, key: PlatformKey) -> &mut String {
        match key {
            PlatformKey::Win32 => &mut self.win32,
            PlatformKey::Linux64 => &mut self.linux64,
            PlatformKey::Mac64 => &mut self.mac64,
        }
    }

    /// Replace the URL for a single platform.
    pub fn set(&mut self, key: PlatformKey, url: impl Into<String>) {
        *self.slot_mut(key) = url.into();
    }

    pub fn url_for(&self, key: PlatformKey) -> &str {
        match key {
            PlatformKey::Win32 => &self.win32,
            PlatformKey::Linux64 => &self.linux64,
            PlatformKey::Mac64 => &self.mac64,
        }
    }
}
