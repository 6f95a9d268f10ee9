use crate::application::{is_bundle_name, ApplicationIdentifier};
use crate::config::ToolsConfig;
use crate::runner::{CommandRunner, Invocation};
use itertools::Itertools;
use log::{debug, info};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` exited with status {}\noutput: {output}", describe_code(.code))]
    QueryFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },
    #[error("app ID not found for {name}")]
    NotFound { name: String },
}

/// Turns operator-supplied application names into bundle identifiers using
/// Spotlight (`mdfind`) and the AppleScript bridge (`osascript`).
pub struct ApplicationResolver<'a, R: CommandRunner> {
    runner: &'a R,
    tools: &'a ToolsConfig,
}

impl<'a, R: CommandRunner> ApplicationResolver<'a, R> {
    pub fn new(runner: &'a R, tools: &'a ToolsConfig) -> Self {
        Self { runner, tools }
    }

    /// Resolve `name` to an identifier.
    ///
    /// `.app` names go straight to the scripting bridge. Anything else is first
    /// looked up in the metadata index as a bundle identifier and returned
    /// unchanged when Spotlight knows it.
    pub fn resolve(&self, name: &str) -> Result<ApplicationIdentifier, ResolutionError> {
        let name = name.trim();

        if !is_bundle_name(name) && self.is_known_bundle_id(name)? {
            debug!("`{name}` is already a bundle identifier");
            return ApplicationIdentifier::new(name).ok_or_else(|| ResolutionError::NotFound {
                name: name.to_string(),
            });
        }

        let invocation = Invocation::new(&self.tools.scripting_bridge)
            .arg("-e")
            .arg(format!("id of app \"{}\"", escape_quoted(name)));
        let stdout = self.query(&invocation)?;

        let id = ApplicationIdentifier::new(&stdout).ok_or_else(|| ResolutionError::NotFound {
            name: name.to_string(),
        })?;
        info!("Resolved `{name}` to {id}");
        Ok(id)
    }

    /// Whether Spotlight has an application whose bundle identifier is exactly `candidate`.
    pub fn is_known_bundle_id(&self, candidate: &str) -> Result<bool, ResolutionError> {
        let invocation = Invocation::new(&self.tools.metadata_search).arg(format!(
            "kMDItemCFBundleIdentifier == \"{}\"",
            escape_quoted(candidate)
        ));
        let stdout = self.query(&invocation)?;
        Ok(!stdout.trim().is_empty())
    }

    /// Bundle names (`Foo.app`) of every application in the metadata index, sorted.
    pub fn installed_applications(&self) -> Result<Vec<String>, ResolutionError> {
        let invocation =
            Invocation::new(&self.tools.metadata_search).arg("kMDItemKind == \"Application\"");
        let stdout = self.query(&invocation)?;
        Ok(application_names(&stdout))
    }

    fn query(&self, invocation: &Invocation) -> Result<String, ResolutionError> {
        let output = self
            .runner
            .run(invocation)
            .map_err(|source| ResolutionError::Spawn {
                command: invocation.to_shell_string(),
                source,
            })?;

        if !output.success {
            return Err(ResolutionError::QueryFailed {
                command: invocation.to_shell_string(),
                code: output.code,
                output: output.combined(),
            });
        }

        Ok(output.stdout)
    }
}

/// Last path component of each line that names an `.app` bundle.
pub fn application_names(mdfind_output: &str) -> Vec<String> {
    mdfind_output
        .lines()
        .filter_map(|line| line.trim_end_matches('/').rsplit('/').next())
        .filter(|name| is_bundle_name(name))
        .map(str::to_string)
        .sorted()
        .dedup()
        .collect()
}

fn describe_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
