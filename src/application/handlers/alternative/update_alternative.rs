//! UpdateAlternativeHandler - Command handler for editing a candidate site.

use std::sync::Arc;
use tracing::info;

use crate::domain::ahp::{AhpError, SubcriteriaPointMapper, SubcriteriaSelection};
use crate::domain::collection::Alternative;
use crate::domain::foundation::AlternativeId;
use crate::ports::AlternativeRepository;

/// Command to replace the name and/or selection of an alternative.
#[derive(Debug, Clone)]
pub struct UpdateAlternativeCommand {
    pub alternative_id: AlternativeId,
    pub name: Option<String>,
    pub selection: Option<SubcriteriaSelection>,
}

/// Handler for updating alternatives.
///
/// Stored scores are left as they are until the next recompute.
pub struct UpdateAlternativeHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    mapper: Arc<SubcriteriaPointMapper>,
}

impl UpdateAlternativeHandler {
    pub fn new(
        alternatives: Arc<dyn AlternativeRepository>,
        mapper: Arc<SubcriteriaPointMapper>,
    ) -> Self {
        Self {
            alternatives,
            mapper,
        }
    }

    pub async fn handle(&self, cmd: UpdateAlternativeCommand) -> Result<Alternative, AhpError> {
        let mut alternative = self
            .alternatives
            .find_by_id(&cmd.alternative_id)
            .await?
            .ok_or_else(|| AhpError::not_found("Alternative", cmd.alternative_id))?;

        if let Some(selection) = &cmd.selection {
            self.mapper.validate_selection(selection)?;
        }

        alternative.update(cmd.name, cmd.selection)?;
        self.alternatives.update(&alternative).await?;

        info!(alternative_id = %alternative.id(), "Alternative updated");
        Ok(alternative)
    }
}
