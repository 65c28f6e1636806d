use crate::context::Context;
use crate::landscape::{LandscapeError, Properties};
use anyhow::Result;
use serde_json::Value;

pub struct DetailsCommand;

impl DetailsCommand {
    /// Execute the details command
    pub fn execute(ctx: &Context, landscape_id: &str) -> Result<()> {
        let registry = ctx.config.load_properties()?;
        let properties = registry.lookup(landscape_id)?;

        let rows = Self::rows(landscape_id, properties)?;
        ctx.output.table(&["property", "value"], &rows);

        Ok(())
    }

    /// One row per property, sorted by property name
    fn rows(
        landscape_id: &str,
        properties: &Properties,
    ) -> Result<Vec<Vec<String>>, LandscapeError> {
        properties
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Null | Value::Array(_) | Value::Object(_) => {
                        return Err(LandscapeError::NonScalarProperty {
                            landscape: landscape_id.to_string(),
                            property: key.clone(),
                            value: value.to_string(),
                        });
                    }
                };
                Ok(vec![key.clone(), rendered])
            })
            .collect()
    }
}
