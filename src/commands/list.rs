use crate::context::Context;
use anyhow::Result;

const HEADERS: [&str; 8] = [
    "landscape-id",
    "type",
    "description",
    "owner",
    "jumpbox ip",
    "concourse ip",
    "director ip",
    "domain",
];

pub struct ListCommand;

impl ListCommand {
    /// Execute the list command
    pub fn execute(ctx: &Context) -> Result<()> {
        let registry = ctx.config.load_registry()?;
        if registry.is_empty() {
            tracing::warn!(url = ctx.config.url(), "landscape configuration has no landscapes");
        }

        // Registry iterates in identifier order
        let rows: Vec<Vec<String>> = registry
            .iter()
            .map(|(id, landscape)| {
                vec![
                    id.to_string(),
                    landscape.landscape_type.clone(),
                    landscape.description.clone(),
                    landscape.owner.clone(),
                    landscape.jumpbox_ip.clone(),
                    landscape.concourse_ip.clone(),
                    landscape.director_ip.clone(),
                    landscape.domain.clone(),
                ]
            })
            .collect();

        ctx.output.table(&HEADERS, &rows);
        Ok(())
    }
}
