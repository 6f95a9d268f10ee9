use crate::application::ApplicationIdentifier;
use crate::association::AssociationStore;
use crate::catalog::{self, Extension};
use crate::config::ToolsConfig;
use crate::prompt::Prompt;
use crate::resolver::ApplicationResolver;
use crate::runner::CommandRunner;
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

mod batch;
mod discovery;

pub use batch::BatchSummary;

const FALLBACK_QUESTION: &str = "Would you like to proceed with all supported extensions? (y/n): ";
const BATCH_QUESTION: &str = "Do you want to proceed? (y/n): ";

/// Where a run stopped because the operator said no.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelPoint {
    /// Nothing was assigned to the source app and the full catalog was refused.
    Fallback,
    /// The list of extensions to change was refused.
    Batch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(BatchSummary),
    Cancelled(CancelPoint),
}

/// Moves default-app associations from one application to another:
/// resolve both apps, find what the source owns, confirm, then reassign.
pub struct ReassignmentWorkflow<'a, R: CommandRunner, P: Prompt, W: Write> {
    pub(crate) resolver: ApplicationResolver<'a, R>,
    pub(crate) store: AssociationStore<'a, R>,
    pub(crate) prompt: &'a mut P,
    pub(crate) out: W,
}

impl<'a, R: CommandRunner, P: Prompt, W: Write> ReassignmentWorkflow<'a, R, P, W> {
    pub fn new(runner: &'a R, tools: &'a ToolsConfig, prompt: &'a mut P, out: W) -> Self {
        Self {
            resolver: ApplicationResolver::new(runner, tools),
            store: AssociationStore::new(runner, tools),
            prompt,
            out,
        }
    }

    pub fn run(&mut self, from: &str, to: &str, force: bool) -> Result<RunOutcome> {
        writeln!(self.out, "Changing default app from '{from}' to '{to}'")?;

        let from_app = self.resolve(from)?;
        let to_app = self.resolve(to)?;
        writeln!(self.out, "From app ID: {from_app}\nTo app ID: {to_app}")?;

        let extensions = match self.select_extensions(&from_app)? {
            Some(extensions) => extensions,
            None => return self.cancel(CancelPoint::Fallback),
        };

        writeln!(self.out, "The following extensions will be changed:")?;
        for extension in &extensions {
            writeln!(self.out, "- .{extension}")?;
        }

        if !force && !self.ask(BATCH_QUESTION)? {
            return self.cancel(CancelPoint::Batch);
        }

        let summary = self.reassign_batch(&to_app, &extensions, force)?;
        writeln!(
            self.out,
            "\nOperation completed. Successfully changed {} out of {} extensions.",
            summary.succeeded, summary.total
        )?;
        info!(
            "{} changed, {} declined, {} failed",
            summary.succeeded, summary.declined, summary.failed
        );

        Ok(RunOutcome::Completed(summary))
    }

    fn resolve(&self, name: &str) -> Result<ApplicationIdentifier> {
        self.resolver
            .resolve(name)
            .with_context(|| format!("Failed to get app ID from name `{name}`"))
    }

    /// Extensions owned by `from_app`, or the whole catalog if the operator
    /// accepts the fallback. `None` means the fallback was declined.
    fn select_extensions(
        &mut self,
        from_app: &ApplicationIdentifier,
    ) -> Result<Option<Vec<Extension>>> {
        match self.discover(from_app) {
            Ok(set) => {
                info!("{} extension(s) assigned to {}", set.extensions().len(), set.owner());
                Ok(Some(set.into_extensions()))
            }
            Err(none) => {
                writeln!(self.out, "Warning: {none}")?;
                if self.ask(FALLBACK_QUESTION)? {
                    Ok(Some(catalog::all()))
                } else {
                    Ok(None)
                }
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<bool> {
        self.out.flush()?;
        self.prompt.confirm(question)
    }

    fn cancel(&mut self, point: CancelPoint) -> Result<RunOutcome> {
        writeln!(self.out, "Operation cancelled.")?;
        info!("Run cancelled at {point:?}");
        Ok(RunOutcome::Cancelled(point))
    }
}
