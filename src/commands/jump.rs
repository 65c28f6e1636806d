use super::execution_helper::{ExecutionHelper, SSH_PROGRAM};
use crate::context::Context;
use anyhow::Result;

pub struct JumpCommand;

impl JumpCommand {
    /// Open an interactive ssh session on the landscape's jumpbox
    pub fn execute(ctx: &Context, landscape_id: &str) -> Result<()> {
        let registry = ctx.config.load_registry()?;
        let landscape = registry.lookup(landscape_id)?;

        ExecutionHelper::run_interactive(ctx, SSH_PROGRAM, &[&landscape.jumpbox_ip])?;
        Ok(())
    }
}
