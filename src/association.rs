use crate::application::ApplicationIdentifier;
use crate::catalog::Extension;
use crate::config::ToolsConfig;
use crate::runner::{CommandRunner, Invocation};
use std::io;
use thiserror::Error;

/// Line (zero-based) of `duti -x` output that carries the bundle identifier.
const OWNER_ID_LINE: usize = 2;

#[derive(Debug, Error)]
pub enum OwnerQueryError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` exited with status {code:?}: {output}")]
    Failed {
        command: String,
        code: Option<i32>,
        output: String,
    },
    #[error("unexpected owner output ({lines} line(s)); expected name, path and bundle id")]
    UnexpectedFormat { lines: usize },
}

#[derive(Debug, Error)]
pub enum SetOwnerError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to set default app: exit status {code:?}\noutput: {output}")]
    Failed {
        command: String,
        code: Option<i32>,
        output: String,
    },
}

/// The application that currently opens an extension, as reported by `duti -x`:
///
/// ```text
/// TextEdit.app
/// /System/Applications/TextEdit.app
/// com.apple.TextEdit
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerRecord {
    pub name: String,
    pub path: String,
    pub bundle_id: ApplicationIdentifier,
}

impl OwnerRecord {
    pub fn parse(output: &str) -> Result<Self, OwnerQueryError> {
        let lines: Vec<&str> = output.lines().map(str::trim).collect();
        let unexpected = || OwnerQueryError::UnexpectedFormat { lines: lines.len() };

        let bundle_id = lines
            .get(OWNER_ID_LINE)
            .and_then(|line| ApplicationIdentifier::new(line))
            .ok_or_else(unexpected)?;

        Ok(Self {
            name: lines[0].to_string(),
            path: lines[1].to_string(),
            bundle_id,
        })
    }
}

/// Reads and writes default-application associations through `duti`.
pub struct AssociationStore<'a, R: CommandRunner> {
    runner: &'a R,
    tools: &'a ToolsConfig,
}

impl<'a, R: CommandRunner> AssociationStore<'a, R> {
    pub fn new(runner: &'a R, tools: &'a ToolsConfig) -> Self {
        Self { runner, tools }
    }

    pub fn owner_query(&self, extension: Extension) -> Invocation {
        Invocation::new(&self.tools.association)
            .arg("-x")
            .arg(extension.as_str())
    }

    pub fn set_owner_command(
        &self,
        app: &ApplicationIdentifier,
        extension: Extension,
    ) -> Invocation {
        Invocation::new(&self.tools.association)
            .arg("-s")
            .arg(app.as_str())
            .arg(extension.dotted())
            .arg("all")
    }

    pub fn current_owner(&self, extension: Extension) -> Result<OwnerRecord, OwnerQueryError> {
        let invocation = self.owner_query(extension);
        let output = self
            .runner
            .run(&invocation)
            .map_err(|source| OwnerQueryError::Spawn {
                command: invocation.to_shell_string(),
                source,
            })?;

        if !output.success {
            return Err(OwnerQueryError::Failed {
                command: invocation.to_shell_string(),
                code: output.code,
                output: output.combined(),
            });
        }

        OwnerRecord::parse(&output.stdout)
    }

    /// Run a command built by [`Self::set_owner_command`].
    pub fn apply(&self, invocation: &Invocation) -> Result<(), SetOwnerError> {
        let output = self
            .runner
            .run(invocation)
            .map_err(|source| SetOwnerError::Spawn {
                command: invocation.to_shell_string(),
                source,
            })?;

        if output.success {
            Ok(())
        } else {
            Err(SetOwnerError::Failed {
                command: invocation.to_shell_string(),
                code: output.code,
                output: output.combined(),
            })
        }
    }
}
