use crate::commands::{CommandContext, CommandExecutor};
use crate::resolver::ApplicationResolver;
use anyhow::{Context, Result};
use std::io::{self, Write};

pub struct ListAppsCommand {
    json: bool,
}

impl ListAppsCommand {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl CommandExecutor for ListAppsCommand {
    fn execute(self, ctx: &CommandContext) -> Result<()> {
        let config = ctx.load_config()?;
        ctx.ensure_supported(&config)?;

        let resolver = ApplicationResolver::new(ctx.runner(), &config.tools);
        let apps = resolver
            .installed_applications()
            .context("Failed to list installed applications")?;

        render_apps(&apps, self.json, &mut io::stdout())
    }
}

pub fn render_apps<W: Write>(apps: &[String], json: bool, out: &mut W) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(apps)?)?;
    } else {
        for app in apps {
            writeln!(out, "{app}")?;
        }
    }
    Ok(())
}
