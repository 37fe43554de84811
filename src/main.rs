use clap::Parser;
use instantclient_installer::install::install;
use std::path::PathBuf;
use std::process::ExitCode;

/// instantclient-installer - Oracle Instant Client installer
///
/// Downloads the Instant Client (basic lite) archive for the host platform,
/// extracts it into ./bin and renames the extracted folder to
/// ./bin/instantclient.
///
/// Exit codes: 1 unsupported platform, 2 download failed, 3 extraction
/// failed, 4 filesystem error, 5 archive had no top-level directory.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Directory to install into (defaults to the current directory)
    #[arg(long = "dir", short = 'C', env = "INSTANTCLIENT_DIR", value_name = "PATH")]
    pub work_dir: Option<PathBuf>,

    /// Base URL the archives are fetched from (defaults to the Oracle download host)
    #[arg(long = "base-url", env = "INSTANTCLIENT_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = instantclient_installer::runtime::RealRuntime;

    match install(runtime, cli.work_dir, cli.base_url).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
