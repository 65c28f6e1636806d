pub mod command;
pub mod http;
pub mod output;

pub use command::{CommandExecutor, RealCommandExecutor};
pub use http::{HttpClient, ReqwestClient};
pub use output::{Output, TerminalOutput};

#[cfg(test)]
pub use command::MockCommandExecutor;
#[cfg(test)]
pub use http::MockHttpClient;
#[cfg(test)]
pub use output::MockOutput;
