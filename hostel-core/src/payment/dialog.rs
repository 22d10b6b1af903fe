//! Payment dialog
//!
//! Collects card details for a fixed amount, holds the submit control
//! disabled for the processing period, then closes and yields a redirect to
//! the confirmation view. Closing the dialog early cancels the pending
//! attempt: no redirect is produced.

use super::gateway::PaymentGateway;
use crate::core::Config;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{ConfirmationRedirect, PaymentDraft, total_label};
use shared::types::FieldErrors;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub const PAY_NOW_LABEL: &str = "Pay Now";
pub const PROCESSING_LABEL: &str = "Processing...";

/// Payment dialog errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    #[error("Card details are incomplete: {0}")]
    Validation(FieldErrors),

    #[error("A payment is already being processed")]
    AlreadyProcessing,

    #[error("Payment dialog is closed")]
    DialogClosed,

    #[error("Amount mismatch: expected {expected}, got {actual}")]
    AmountMismatch { expected: Decimal, actual: Decimal },

    #[error("Payment task was cancelled")]
    Cancelled,

    #[error("Payment task failed: {0}")]
    TaskFailed(String),
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::Validation(errors) => {
                AppError::invalid_fields(ErrorCode::ValidationFailed, &errors)
            }
            PaymentError::AlreadyProcessing => AppError::new(ErrorCode::PaymentInProgress),
            PaymentError::DialogClosed => AppError::new(ErrorCode::PaymentDialogClosed),
            PaymentError::AmountMismatch { expected, actual } => AppError::with_message(
                ErrorCode::PaymentAmountMismatch,
                format!("Amount mismatch: expected {expected}, got {actual}"),
            )
            .with_detail("expected", expected.to_string())
            .with_detail("actual", actual.to_string()),
            PaymentError::Cancelled => AppError::new(ErrorCode::PaymentCancelled),
            PaymentError::TaskFailed(msg) => AppError::with_message(ErrorCode::TaskFailed, msg),
        }
    }
}

#[derive(Debug)]
struct DialogState {
    open: bool,
    processing: bool,
}

/// Card entry dialog for one amount
pub struct PaymentDialog {
    amount: Decimal,
    delay: Duration,
    confirmation_path: String,
    gateway: Arc<dyn PaymentGateway>,
    state: Arc<Mutex<DialogState>>,
    cancel: CancellationToken,
}

impl std::fmt::Debug for PaymentDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentDialog")
            .field("amount", &self.amount)
            .field("delay", &self.delay)
            .field("confirmation_path", &self.confirmation_path)
            .field("gateway", &"<dyn PaymentGateway>")
            .field("state", &*self.state.lock())
            .finish()
    }
}

impl PaymentDialog {
    /// Open the dialog for `amount`
    pub fn open(amount: Decimal, config: &Config, gateway: Arc<dyn PaymentGateway>) -> Self {
        tracing::debug!(%amount, "Payment dialog opened");
        Self {
            amount,
            delay: config.payment_delay(),
            confirmation_path: config.confirmation_path.clone(),
            gateway,
            state: Arc::new(Mutex::new(DialogState {
                open: true,
                processing: false,
            })),
            cancel: CancellationToken::new(),
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().open
    }

    pub fn is_processing(&self) -> bool {
        self.state.lock().processing
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        let state = self.state.lock();
        state.open && !state.processing
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_processing() {
            PROCESSING_LABEL
        } else {
            PAY_NOW_LABEL
        }
    }

    /// "Total: $X.XX"
    pub fn total_label(&self) -> String {
        total_label(self.amount)
    }

    /// Empty card form for this dialog's amount
    pub fn draft(&self) -> PaymentDraft {
        PaymentDraft::new(self.amount)
    }

    /// Submit card details and start the processing period
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&self, draft: PaymentDraft) -> Result<PaymentTask, PaymentError> {
        {
            let mut state = self.state.lock();
            if !state.open {
                return Err(PaymentError::DialogClosed);
            }
            if state.processing {
                tracing::warn!("Payment submitted while processing");
                return Err(PaymentError::AlreadyProcessing);
            }
            if draft.amount != self.amount {
                return Err(PaymentError::AmountMismatch {
                    expected: self.amount,
                    actual: draft.amount,
                });
            }
            draft.check().map_err(PaymentError::Validation)?;
            state.processing = true;
        }

        tracing::info!(card = %draft.masked_card_number(), amount = %self.amount, "Processing payment");

        let state = Arc::clone(&self.state);
        let gateway = Arc::clone(&self.gateway);
        let cancel = self.cancel.clone();
        let delay = self.delay;
        let path = self.confirmation_path.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    state.lock().processing = false;
                    tracing::debug!("Payment cancelled before completion");
                    None
                }
                _ = tokio::time::sleep(delay) => {
                    let outcome = gateway.process(&draft).await;
                    let mut state = state.lock();
                    state.processing = false;
                    if !state.open {
                        tracing::debug!(%outcome, "Payment outcome dropped, dialog closed");
                        return None;
                    }
                    state.open = false;
                    let redirect = ConfirmationRedirect::new(path, outcome);
                    tracing::info!(%outcome, redirect = %redirect, "Payment processed");
                    Some(redirect)
                }
            }
        });

        Ok(PaymentTask { handle })
    }

    /// Close the dialog; a pending attempt yields no redirect
    pub fn close(&self) {
        let mut state = self.state.lock();
        if state.open {
            tracing::debug!(processing = state.processing, "Payment dialog closed");
        }
        state.open = false;
        self.cancel.cancel();
    }
}

impl Drop for PaymentDialog {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Pending payment attempt
#[derive(Debug)]
pub struct PaymentTask {
    handle: JoinHandle<Option<ConfirmationRedirect>>,
}

impl PaymentTask {
    /// Wait for the attempt to finish
    ///
    /// `None` means the dialog was closed first.
    pub async fn outcome(self) -> Result<Option<ConfirmationRedirect>, PaymentError> {
        self.handle.await.map_err(|e| {
            if e.is_cancelled() {
                PaymentError::Cancelled
            } else {
                PaymentError::TaskFailed(e.to_string())
            }
        })
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
