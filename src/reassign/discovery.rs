use super::ReassignmentWorkflow;
use crate::application::ApplicationIdentifier;
use crate::association::{AssociationStore, OwnerQueryError};
use crate::catalog::{Extension, CATALOG};
use crate::prompt::Prompt;
use crate::runner::CommandRunner;
use log::{debug, warn};
use std::io::Write;
use thiserror::Error;

/// Catalog extensions currently opened by one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentSet {
    owner: ApplicationIdentifier,
    extensions: Vec<Extension>,
}

impl AssignmentSet {
    pub fn owner(&self) -> &ApplicationIdentifier {
        &self.owner
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn into_extensions(self) -> Vec<Extension> {
        self.extensions
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no extensions found for {0}")]
pub struct NoAssignments(pub ApplicationIdentifier);

/// Query the owner of every catalog extension and keep those owned by `app`.
///
/// A failed or malformed owner query counts as "not assigned": `duti -x` exits
/// non-zero for extensions nobody has claimed, which is the common case.
pub fn discover_assignments<R: CommandRunner>(
    store: &AssociationStore<'_, R>,
    app: &ApplicationIdentifier,
) -> Result<AssignmentSet, NoAssignments> {
    let mut extensions = Vec::new();

    for extension in CATALOG {
        match store.current_owner(extension) {
            Ok(record) if record.bundle_id == *app => extensions.push(extension),
            Ok(record) => {
                debug!(".{extension} belongs to {} ({})", record.bundle_id, record.path);
            }
            Err(err @ OwnerQueryError::UnexpectedFormat { .. }) => {
                warn!("Treating .{extension} as unassigned: {err}");
            }
            Err(err) => debug!("No owner recorded for .{extension}: {err}"),
        }
    }

    if extensions.is_empty() {
        return Err(NoAssignments(app.clone()));
    }

    Ok(AssignmentSet {
        owner: app.clone(),
        extensions,
    })
}

impl<R: CommandRunner, P: Prompt, W: Write> ReassignmentWorkflow<'_, R, P, W> {
    pub fn discover(&self, app: &ApplicationIdentifier) -> Result<AssignmentSet, NoAssignments> {
        discover_assignments(&self.store, app)
    }
}
