use crate::association::AssociationStore;
use crate::catalog::CATALOG;
use crate::commands::{CommandContext, CommandExecutor};
use crate::runner::CommandRunner;
use anyhow::Result;
use log::debug;
use serde::Serialize;
use std::io::{self, Write};

pub struct StatusCommand {
    json: bool,
}

impl StatusCommand {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl CommandExecutor for StatusCommand {
    fn execute(self, ctx: &CommandContext) -> Result<()> {
        let config = ctx.load_config()?;
        ctx.ensure_supported(&config)?;

        let store = AssociationStore::new(ctx.runner(), &config.tools);
        let entries = collect_status(&store);
        render_status(&entries, self.json, &mut io::stdout())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub extension: String,
    pub application: Option<String>,
    pub bundle_id: Option<String>,
}

pub fn collect_status<R: CommandRunner>(store: &AssociationStore<'_, R>) -> Vec<StatusEntry> {
    CATALOG
        .iter()
        .map(|&extension| {
            let owner = store
                .current_owner(extension)
                .map_err(|e| debug!("No owner for .{extension}: {e}"))
                .ok();

            StatusEntry {
                extension: extension.to_string(),
                application: owner.as_ref().map(|record| record.name.clone()),
                bundle_id: owner.map(|record| record.bundle_id.to_string()),
            }
        })
        .collect()
}

pub fn render_status<W: Write>(entries: &[StatusEntry], json: bool, out: &mut W) -> Result<()> {
    if json {
        let payload = serde_json::json!({ "extensions": entries });
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
        return Ok(());
    }

    for entry in entries {
        let dotted = format!(".{}", entry.extension);
        match (&entry.bundle_id, &entry.application) {
            (Some(id), Some(name)) => writeln!(out, "{dotted:<6} {id} ({name})")?,
            (Some(id), None) => writeln!(out, "{dotted:<6} {id}")?,
            _ => writeln!(out, "{dotted:<6} (none)")?,
        }
    }

    Ok(())
}
