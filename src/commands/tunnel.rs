use super::execution_helper::{ExecutionHelper, SSH_PROGRAM};
use crate::context::Context;
use crate::landscape::TunnelTarget;
use anyhow::Result;

pub struct TunnelCommand;

impl TunnelCommand {
    /// Forward a local port to a landscape service through its jumpbox.
    /// Blocks until the ssh session ends.
    pub fn execute(ctx: &Context, landscape_id: &str, target: Option<&str>) -> Result<()> {
        let registry = ctx.config.load_registry()?;
        let landscape = registry.lookup(landscape_id)?;

        let target = TunnelTarget::parse(target.unwrap_or(""))?;
        let forward = target.forward(landscape).to_string();

        ctx.output.info(&format!("Tunnel open: {}", forward));

        // -n no stdin, -N no remote command, -T no pty, -L local forward
        ExecutionHelper::run_interactive(
            ctx,
            SSH_PROGRAM,
            &["-nNTL", &forward, &landscape.jumpbox_ip],
        )?;
        Ok(())
    }
}
