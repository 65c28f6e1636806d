#[cfg(test)]
use std::sync::Mutex;

/// Output message captured by MockOutput for testing
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum OutputMessage {
    Error(String),
    Info(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Trait for terminal output operations to enable testing with mocks
pub trait Output: Send + Sync {
    /// Print an error message
    fn error(&self, message: &str);

    /// Print an info message
    fn info(&self, message: &str);

    /// Print a column-aligned table
    fn table(&self, headers: &[&str], rows: &[Vec<String>]);
}

/// Real terminal output implementation using the output module
pub struct TerminalOutput;

impl Output for TerminalOutput {
    fn error(&self, message: &str) {
        crate::output::error(message);
    }

    fn info(&self, message: &str) {
        crate::output::info(message);
    }

    fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        crate::output::table(headers, rows);
    }
}

/// Mock output implementation for testing (captures output)
#[cfg(test)]
pub struct MockOutput {
    messages: Mutex<Vec<OutputMessage>>,
}

#[cfg(test)]
impl MockOutput {
    /// Create new mock output
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Get all captured messages
    pub fn get_messages(&self) -> Vec<OutputMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Get all info messages
    pub fn get_infos(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| {
                if let OutputMessage::Info(msg) = m {
                    Some(msg.clone())
                } else {
                    None
                }
            })
            .collect()
    }

    /// Get the rows of every rendered table, in rendering order
    pub fn get_tables(&self) -> Vec<(Vec<String>, Vec<Vec<String>>)> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| {
                if let OutputMessage::Table { headers, rows } = m {
                    Some((headers.clone(), rows.clone()))
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
impl Default for MockOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Output for MockOutput {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Error(message.to_string()));
    }

    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(OutputMessage::Info(message.to_string()));
    }

    fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        self.messages.lock().unwrap().push(OutputMessage::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows.to_vec(),
        });
    }
}
