//! DeleteAlternativeHandler - Command handler for removing a candidate site.

use std::sync::Arc;
use tracing::info;

use crate::domain::ahp::AhpError;
use crate::domain::foundation::AlternativeId;
use crate::ports::AlternativeRepository;

/// Command to delete an alternative and its stored scores.
#[derive(Debug, Clone)]
pub struct DeleteAlternativeCommand {
    pub alternative_id: AlternativeId,
}

pub struct DeleteAlternativeHandler {
    alternatives: Arc<dyn AlternativeRepository>,
}

impl DeleteAlternativeHandler {
    pub fn new(alternatives: Arc<dyn AlternativeRepository>) -> Self {
        Self { alternatives }
    }

    pub async fn handle(&self, cmd: DeleteAlternativeCommand) -> Result<(), AhpError> {
        self.alternatives.delete(&cmd.alternative_id).await?;
        info!(alternative_id = %cmd.alternative_id, "Alternative deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::fixture;

    #[tokio::test]
    async fn deletes_existing_alternative() {
        let fx = fixture().await;
        let store = Arc::new(fx.store);
        let handler = DeleteAlternativeHandler::new(store.clone());
        let id = *fx.alternatives[0].id();

        handler
            .handle(DeleteAlternativeCommand { alternative_id: id })
            .await
            .unwrap();

        assert!(store.find_by_id(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_alternative_is_not_found() {
        let fx = fixture().await;
        let handler = DeleteAlternativeHandler::new(Arc::new(fx.store));

        let result = handler
            .handle(DeleteAlternativeCommand {
                alternative_id: AlternativeId::new(),
            })
            .await;

        assert!(matches!(result, Err(AhpError::NotFound(_))));
    }
}
