use crate::context::Context;
use crate::landscape::LandscapeError;

/// Remote-shell client used for jumpbox sessions and tunnels
pub const SSH_PROGRAM: &str = "ssh";

/// Cloud Foundry API client
pub const CF_PROGRAM: &str = "cf";

/// Helper functions for handing the terminal over to an external program
pub struct ExecutionHelper;

impl ExecutionHelper {
    /// Run `program` with inherited standard streams and block until it exits.
    /// A launch failure or a non-zero exit code is an error.
    pub fn run_interactive(
        ctx: &Context,
        program: &str,
        args: &[&str],
    ) -> Result<(), LandscapeError> {
        let command_line = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(%command_line, "executing");

        let code = ctx
            .command
            .execute_interactive(program, args)
            .map_err(|source| LandscapeError::ProcessLaunch {
                command_line: command_line.clone(),
                source,
            })?;

        if code != 0 {
            return Err(LandscapeError::ProcessExit { command_line, code });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{MockCommandExecutor, MockHttpClient, MockOutput};
    use std::sync::Arc;

    fn context(executor: MockCommandExecutor) -> Context {
        Context::test_with(
            Arc::new(MockOutput::new()),
            Arc::new(executor),
            Arc::new(MockHttpClient::with_response("{}")),
        )
    }

    #[test]
    fn test_run_interactive_success() {
        let ctx = context(MockCommandExecutor::new());
        assert!(ExecutionHelper::run_interactive(&ctx, SSH_PROGRAM, &["10.0.0.1"]).is_ok());
    }

    #[test]
    fn test_run_interactive_non_zero_exit() {
        let ctx = context(MockCommandExecutor::with_exit_code(SSH_PROGRAM, 255));

        let err = ExecutionHelper::run_interactive(&ctx, SSH_PROGRAM, &["10.0.0.1"]).unwrap_err();
        match err {
            LandscapeError::ProcessExit { command_line, code } => {
                assert_eq!(command_line, "ssh 10.0.0.1");
                assert_eq!(code, 255);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_interactive_launch_failure() {
        let ctx = context(MockCommandExecutor::with_launch_failure(CF_PROGRAM));

        let err = ExecutionHelper::run_interactive(&ctx, CF_PROGRAM, &["api"]).unwrap_err();
        assert!(matches!(err, LandscapeError::ProcessLaunch { .. }));
        assert!(err.to_string().starts_with("failed to launch 'cf api'"));
    }
}
