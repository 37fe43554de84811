mod config;
mod finalize;

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::archive::{ArchiveExtractor, ZipExtractor};
use crate::download::download_file;
use crate::error::{InstallError, Result};
use crate::http::{FetchError, HttpClient};
use crate::platform::{DefaultPlatformDetector, PlatformDetector, resolve};
use crate::progress::ConsoleProgress;
use crate::runtime::Runtime;
use crate::source::{DEFAULT_BASE_URL, SourceTable};

pub use config::Config;
pub use finalize::{remove_archive, rename_extracted_dir};

/// Folder created below the working directory.
pub const BIN_DIR: &str = "bin";
/// File name the archive is downloaded to inside [`BIN_DIR`].
pub const ARCHIVE_NAME: &str = "instantclient.zip";
/// Name the extracted folder is renamed to.
pub const CANONICAL_DIR: &str = "instantclient";

/// Paths used by one installation, all derived from the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub bin_dir: PathBuf,
    pub archive: PathBuf,
    pub install_dir: PathBuf,
}

impl Layout {
    pub fn new(work_dir: &Path) -> Self {
        let bin_dir = work_dir.join(BIN_DIR);
        Self {
            archive: bin_dir.join(ARCHIVE_NAME),
            install_dir: bin_dir.join(CANONICAL_DIR),
            bin_dir,
        }
    }
}

/// Install the client for the host platform below `work_dir`, or the
/// current directory when none is given.
pub async fn install<R: Runtime + 'static>(
    runtime: R,
    work_dir: Option<PathBuf>,
    base_url: Option<String>,
) -> Result<PathBuf> {
    let base = base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let config = Config::new(base_url).map_err(|e| InstallError::TransportFailure {
        url: base,
        source: FetchError::Request(e),
    })?;

    let work_dir = match work_dir {
        Some(dir) => dir,
        None => runtime.current_dir().map_err(InstallError::filesystem)?,
    };

    let installer = Installer::new(runtime, DefaultPlatformDetector, ZipExtractor, config);
    installer.install(&work_dir).await
}

pub struct Installer<R: Runtime, P: PlatformDetector, E: ArchiveExtractor> {
    pub runtime: R,
    pub detector: P,
    pub extractor: E,
    pub client: HttpClient,
    pub sources: SourceTable,
}

impl<R: Runtime + 'static, P: PlatformDetector, E: ArchiveExtractor> Installer<R, P, E> {
    #[tracing::instrument(skip(runtime, detector, extractor, config))]
    pub fn new(runtime: R, detector: P, extractor: E, config: Config) -> Self {
        Self {
            runtime,
            detector,
            extractor,
            client: config.client,
            sources: config.sources,
        }
    }

    /// Run every stage in order; the first failure aborts the rest.
    #[tracing::instrument(skip(self))]
    pub async fn install(&self, work_dir: &Path) -> Result<PathBuf> {
        let platform = self.detector.detect();
        debug!("Detected platform {:?}", platform);
        let key = resolve(&platform)?;
        println!("Operating system is {}", key);

        let layout = Layout::new(work_dir);
        prepare_bin_dir(&self.runtime, &layout)?;

        let url = self.sources.url_for(key);
        download_file(
            &self.runtime,
            url,
            &layout.archive,
            &self.client,
            &mut ConsoleProgress,
        )
        .await?;

        extract_download(&self.runtime, &self.extractor, &layout)?;

        let installed = rename_extracted_dir(&self.runtime, &layout)?;
        remove_archive(&self.runtime, &layout)?;

        println!("Installed Oracle Instant Client to {}", installed.display());
        Ok(installed)
    }
}

/// Create the bin folder. An existing folder is an error.
#[tracing::instrument(skip(runtime, layout))]
pub fn prepare_bin_dir<R: Runtime>(runtime: &R, layout: &Layout) -> Result<()> {
    debug!("Creating {:?}", layout.bin_dir);
    runtime
        .create_dir(&layout.bin_dir)
        .map_err(InstallError::filesystem)
}

#[tracing::instrument(skip(runtime, extractor, layout))]
fn extract_download<R: Runtime + 'static, E: ArchiveExtractor>(
    runtime: &R,
    extractor: &E,
    layout: &Layout,
) -> Result<()> {
    println!("Extracting zip contents to {}.", layout.bin_dir.display());
    extractor
        .extract(runtime, &layout.archive, &layout.bin_dir)
        .map_err(|source| InstallError::ExtractionFailure {
            archive: layout.archive.clone(),
            source,
        })?;
    info!("Extraction complete.");
    Ok(())
}
