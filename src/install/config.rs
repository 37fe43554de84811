use log::debug;
use reqwest::Client;

use crate::http::HttpClient;
use crate::source::SourceTable;

const USER_AGENT: &str = concat!("instantclient-installer/", env!("CARGO_PKG_VERSION"));

/// Everything the installer needs from the outside world besides the
/// filesystem: the HTTP client and where each archive lives.
pub struct Config {
    pub client: HttpClient,
    pub sources: SourceTable,
}

impl Config {
    pub fn new(base_url: Option<String>) -> reqwest::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        let sources = match base_url {
            Some(base) => {
                debug!("Using base URL {}", base);
                SourceTable::with_base_url(&base)
            }
            None => SourceTable::default(),
        };

        Ok(Self {
            client: HttpClient::new(client),
            sources,
        })
    }
}
