use std::io;
use std::process::{Command, Stdio};

/// Trait for executing external programs, allowing for mocking in tests
pub trait CommandExecutor: Send + Sync {
    /// Execute a command interactively (inherits stdin/stdout/stderr) and
    /// block until it exits. Returns the exit code, -1 when killed by a signal.
    fn execute_interactive(&self, command: &str, args: &[&str]) -> io::Result<i32>;
}

/// Real command executor using std::process::Command
pub struct RealCommandExecutor;

impl RealCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for RealCommandExecutor {
    fn execute_interactive(&self, command: &str, args: &[&str]) -> io::Result<i32> {
        tracing::debug!(command, ?args, "spawning interactive process");

        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;

        let status = child.wait()?;
        Ok(status.code().unwrap_or(-1))
    }
}

/// A single recorded invocation of the mock executor
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
}

/// Mock command executor for testing
#[cfg(test)]
pub struct MockCommandExecutor {
    /// Pre-configured exit codes keyed by command name
    exit_codes: std::sync::Mutex<Vec<(String, i32)>>,
    /// Commands that fail to launch
    launch_failures: std::sync::Mutex<Vec<String>>,
    invocations: std::sync::Mutex<Vec<Invocation>>,
}

#[cfg(test)]
impl MockCommandExecutor {
    pub fn new() -> Self {
        Self {
            exit_codes: std::sync::Mutex::new(Vec::new()),
            launch_failures: std::sync::Mutex::new(Vec::new()),
            invocations: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn with_exit_code(command: &str, exit_code: i32) -> Self {
        let executor = Self::new();
        executor
            .exit_codes
            .lock()
            .unwrap()
            .push((command.to_string(), exit_code));
        executor
    }

    pub fn with_launch_failure(command: &str) -> Self {
        let executor = Self::new();
        executor
            .launch_failures
            .lock()
            .unwrap()
            .push(command.to_string());
        executor
    }

    /// All invocations seen so far, in order
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Default for MockCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl CommandExecutor for MockCommandExecutor {
    fn execute_interactive(&self, command: &str, args: &[&str]) -> io::Result<i32> {
        self.invocations.lock().unwrap().push(Invocation {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });

        if self.launch_failures.lock().unwrap().iter().any(|c| c == command) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: command not found", command),
            ));
        }

        let exit_codes = self.exit_codes.lock().unwrap();
        if let Some((_, code)) = exit_codes.iter().find(|(c, _)| c == command) {
            return Ok(*code);
        }

        // Default: success
        Ok(0)
    }
}
