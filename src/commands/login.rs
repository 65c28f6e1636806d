use super::execution_helper::{CF_PROGRAM, ExecutionHelper};
use crate::context::Context;
use anyhow::Result;

pub struct LoginCommand;

impl LoginCommand {
    /// Point the cf CLI at the landscape's API endpoint
    pub fn execute(ctx: &Context, landscape_id: &str) -> Result<()> {
        let registry = ctx.config.load_registry()?;
        let landscape = registry.lookup(landscape_id)?;

        let endpoint = landscape.api_endpoint();
        ExecutionHelper::run_interactive(
            ctx,
            CF_PROGRAM,
            &["api", &endpoint, "--skip-ssl-validation"],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landscape::LandscapeError;
    use crate::test_helpers::{LandscapeDocument, TestEnv};
    use crate::traits::MockCommandExecutor;

    #[test]
    fn test_login_targets_api_endpoint() {
        let env = TestEnv::new(&LandscapeDocument::scenario().build());

        LoginCommand::execute(&env.ctx, "a").unwrap();

        let invocations = env.executor.invocations();
        assert_eq!(invocations.len(), 1);
        assert_eq!(invocations[0].command, "cf");
        assert_eq!(
            invocations[0].args,
            vec!["api", "https://api.cf.x.com", "--skip-ssl-validation"]
        );
    }

    #[test]
    fn test_login_missing_cf_binary() {
        let env = TestEnv::with_executor(
            &LandscapeDocument::scenario().build(),
            MockCommandExecutor::with_launch_failure("cf"),
        );

        let err = LoginCommand::execute(&env.ctx, "a").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LandscapeError>(),
            Some(LandscapeError::ProcessLaunch { .. })
        ));
    }

    #[test]
    fn test_login_fetch_failure_launches_nothing() {
        let env = TestEnv::with_status(404, "Not Found");

        let err = LoginCommand::execute(&env.ctx, "a").unwrap_err();

        assert!(err.to_string().contains("404"));
        assert!(env.executor.invocations().is_empty());
    }
}
