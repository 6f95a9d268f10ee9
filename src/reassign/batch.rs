use super::ReassignmentWorkflow;
use crate::application::ApplicationIdentifier;
use crate::association::SetOwnerError;
use crate::catalog::Extension;
use crate::prompt::Prompt;
use crate::runner::CommandRunner;
use anyhow::Result;
use log::warn;
use std::io::Write;

/// What happened to one extension in a batch.
#[derive(Debug)]
pub enum ExtensionOutcome {
    Changed,
    Declined,
    Failed(SetOwnerError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub declined: usize,
    pub failed: usize,
    pub total: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &ExtensionOutcome) {
        match outcome {
            ExtensionOutcome::Changed => self.succeeded += 1,
            ExtensionOutcome::Declined => self.declined += 1,
            ExtensionOutcome::Failed(_) => self.failed += 1,
        }
    }
}

impl<R: CommandRunner, P: Prompt, W: Write> ReassignmentWorkflow<'_, R, P, W> {
    /// Point every extension at `app`, one `duti -s` per extension.
    ///
    /// Unless `force` is set each extension is confirmed individually, showing
    /// the exact command. A declined or failed extension never stops the batch.
    pub fn reassign_batch(
        &mut self,
        app: &ApplicationIdentifier,
        extensions: &[Extension],
        force: bool,
    ) -> Result<BatchSummary> {
        let mut summary = BatchSummary {
            total: extensions.len(),
            ..BatchSummary::default()
        };

        for &extension in extensions {
            write!(self.out, "Changing default app for .{extension}... ")?;
            let outcome = self.reassign_one(app, extension, force)?;

            match &outcome {
                ExtensionOutcome::Changed => writeln!(self.out, "Success")?,
                ExtensionOutcome::Declined => writeln!(self.out, "Operation cancelled.")?,
                ExtensionOutcome::Failed(err) => {
                    warn!("Could not change .{extension}: {err}");
                    writeln!(self.out, "Failed: {err}")?;
                }
            }

            summary.record(&outcome);
        }

        Ok(summary)
    }

    fn reassign_one(
        &mut self,
        app: &ApplicationIdentifier,
        extension: Extension,
        force: bool,
    ) -> Result<ExtensionOutcome> {
        let command = self.store.set_owner_command(app, extension);

        if !force {
            let question = format!(
                "Are you sure you want to set the default app for .{extension} to {app}? (y/n):\n{command}\n"
            );
            if !self.ask(&question)? {
                return Ok(ExtensionOutcome::Declined);
            }
        }

        Ok(match self.store.apply(&command) {
            Ok(()) => ExtensionOutcome::Changed,
            Err(err) => ExtensionOutcome::Failed(err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::config::ToolsConfig;
    use crate::runner::CommandOutput;
    use crate::test_support::{ScriptedPrompt, ScriptedRunner};

    fn ext(name: &str) -> Extension {
        Extension::from_catalog(name).unwrap()
    }

    fn target() -> ApplicationIdentifier {
        ApplicationIdentifier::new("com.microsoft.VSCode").unwrap()
    }

    #[test]
    fn test_forced_batch_never_prompts() {
        let runner = ScriptedRunner::new(|_| CommandOutput::ok(""));
        let tools = ToolsConfig::default();
        let mut prompt = ScriptedPrompt::silent();
        let mut out = Vec::new();
        let extensions = catalog::all();

        let summary = ReassignmentWorkflow::new(&runner, &tools, &mut prompt, &mut out)
            .reassign_batch(&target(), &extensions, true)
            .unwrap();

        assert!(prompt.messages.is_empty());
        assert_eq!(runner.calls().len(), extensions.len());
        assert_eq!(summary.succeeded, extensions.len());
        assert_eq!(summary.total, extensions.len());
    }

    #[test]
    fn test_each_extension_is_confirmed_with_its_command() {
        let runner = ScriptedRunner::new(|_| CommandOutput::ok(""));
        let tools = ToolsConfig::default();
        let mut prompt = ScriptedPrompt::answering(&[true, false, true]);
        let mut out = Vec::new();
        let extensions = [ext("md"), ext("json"), ext("yaml")];

        let summary = ReassignmentWorkflow::new(&runner, &tools, &mut prompt, &mut out)
            .reassign_batch(&target(), &extensions, false)
            .unwrap();

        assert_eq!(
            summary,
            BatchSummary {
                succeeded: 2,
                declined: 1,
                failed: 0,
                total: 3
            }
        );
        assert_eq!(prompt.messages.len(), 3);
        assert!(prompt.messages[1].contains("duti -s com.microsoft.VSCode .json all"));
        assert!(prompt.messages[1].starts_with(
            "Are you sure you want to set the default app for .json to com.microsoft.VSCode?"
        ));

        let applied: Vec<String> = runner.calls().iter().map(|call| call.args[2].clone()).collect();
        assert_eq!(applied, vec![".md", ".yaml"]);

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Changing default app for .json... Operation cancelled."));
    }

    #[test]
    fn test_failures_do_not_stop_the_batch() {
        let runner = ScriptedRunner::new(|invocation| {
            if invocation.args[2] == ".css" {
                CommandOutput::failed(1, "could not set handler")
            } else {
                CommandOutput::ok("")
            }
        });
        let tools = ToolsConfig::default();
        let mut prompt = ScriptedPrompt::silent();
        let mut out = Vec::new();
        let extensions = [ext("html"), ext("css"), ext("js")];

        let summary = ReassignmentWorkflow::new(&runner, &tools, &mut prompt, &mut out)
            .reassign_batch(&target(), &extensions, true)
            .unwrap();

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(runner.calls().len(), 3);

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Changing default app for .css... Failed:"));
        assert!(printed.contains("could not set handler"));
        assert!(printed.contains("Changing default app for .js... Success"));
    }

    #[test]
    fn test_declining_everything_changes_nothing() {
        let runner = ScriptedRunner::new(|_| CommandOutput::ok(""));
        let tools = ToolsConfig::default();
        let mut prompt = ScriptedPrompt::answering(&[false, false]);
        let mut out = Vec::new();
        let extensions = [ext("ini"), ext("conf")];

        let summary = ReassignmentWorkflow::new(&runner, &tools, &mut prompt, &mut out)
            .reassign_batch(&target(), &extensions, false)
            .unwrap();

        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.declined, 2);
        assert!(runner.calls().is_empty());
    }
}
