//! Payment gateway seam
//!
//! [`CoinFlipGateway`] is a placeholder: it charges nothing and picks an
//! outcome at random. Only the two-outcome shape is meant to survive.

use async_trait::async_trait;
use rand::Rng;
use shared::models::{PaymentDraft, PaymentOutcome};

/// Processes one payment attempt
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn process(&self, draft: &PaymentDraft) -> PaymentOutcome;
}

/// Unweighted coin flip between success and failure
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinFlipGateway;

#[async_trait]
impl PaymentGateway for CoinFlipGateway {
    async fn process(&self, draft: &PaymentDraft) -> PaymentOutcome {
        // TODO: replace with a real card processor call
        let success = rand::thread_rng().gen_bool(0.5);
        tracing::debug!(card = %draft.masked_card_number(), success, "Coin flip gateway decided");
        if success {
            PaymentOutcome::Success
        } else {
            PaymentOutcome::Failure
        }
    }
}

/// Gateway that always returns the same outcome
#[derive(Debug, Clone, Copy)]
pub struct FixedGateway(pub PaymentOutcome);

#[async_trait]
impl PaymentGateway for FixedGateway {
    async fn process(&self, _draft: &PaymentDraft) -> PaymentOutcome {
        self.0
    }
}
