//! Back command handler
//!
//! Leaves the summary for the form. Entered values survive.

use crate::booking::traits::{CommandContext, CommandHandler, CommandMetadata, WizardResult};
use shared::booking::{EventPayload, WizardEvent, WizardEventType, WizardState};

/// Back action
#[derive(Debug, Clone)]
pub struct BackAction;

impl CommandHandler for BackAction {
    fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> WizardResult<Vec<WizardEvent>> {
        ctx.require_state("back", &[WizardState::Summary])?;

        let seq = ctx.next_sequence();
        Ok(vec![WizardEvent::new(
            seq,
            metadata.command_id.clone(),
            WizardEventType::SummaryLeft,
            EventPayload::SummaryLeft {},
        )])
    }
}
