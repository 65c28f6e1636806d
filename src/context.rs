use crate::landscape::ConfigFetcher;
use crate::traits::{CommandExecutor, Output, RealCommandExecutor, TerminalOutput};
#[cfg(test)]
use crate::traits::HttpClient;
use std::sync::Arc;

/// Application context that holds all dependencies for dependency injection
pub struct Context {
    pub output: Arc<dyn Output>,
    pub command: Arc<dyn CommandExecutor>,
    pub config: Arc<ConfigFetcher>,
}

impl Context {
    /// Create a new context with real implementations reading from `url`
    pub fn new(url: &str) -> Self {
        Self {
            output: Arc::new(TerminalOutput),
            command: Arc::new(RealCommandExecutor::new()),
            config: Arc::new(ConfigFetcher::new(url)),
        }
    }

    /// Create a test context with specific mock implementations
    #[cfg(test)]
    pub fn test_with(
        output: Arc<dyn Output>,
        command: Arc<dyn CommandExecutor>,
        http_client: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            output,
            command,
            config: Arc::new(ConfigFetcher::with_client(
                "http://landscapes.test/landscape.json",
                http_client,
            )),
        }
    }
}
