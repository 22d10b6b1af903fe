//! Payment Models

use crate::types::FieldErrors;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Card details entered in the payment dialog
///
/// Every card field is only required to be non-empty. The amount is fixed by
/// whoever opens the dialog.
#[derive(Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    #[validate(length(min = 1, message = "Card number is required"))]
    pub card_number: String,
    /// MM/YY
    #[validate(length(min = 1, message = "Expiry date is required"))]
    pub expiry_date: String,
    #[validate(length(min = 1, message = "CVV is required"))]
    pub cvv: String,
    #[validate(length(min = 1, message = "Cardholder name is required"))]
    pub cardholder_name: String,
    pub amount: Decimal,
}

impl PaymentDraft {
    /// Empty draft for the given amount
    pub fn new(amount: Decimal) -> Self {
        Self {
            card_number: String::new(),
            expiry_date: String::new(),
            cvv: String::new(),
            cardholder_name: String::new(),
            amount,
        }
    }

    /// Check that every card field is filled in
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(|e| FieldErrors::from(&e))
    }

    /// Card number with everything but the last four digits hidden
    pub fn masked_card_number(&self) -> String {
        let digits: Vec<char> = self
            .card_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let visible = digits.len().min(4);
        let tail: String = digits[digits.len() - visible..].iter().collect();
        format!("{}{}", "*".repeat(digits.len() - visible), tail)
    }
}

impl fmt::Debug for PaymentDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentDraft")
            .field("card_number", &self.masked_card_number())
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"***")
            .field("cardholder_name", &self.cardholder_name)
            .field("amount", &self.amount)
            .finish()
    }
}

/// "Total: $X.XX"
///
/// Rounds the exact decimal amount half away from zero, so 1.005 shows as $1.01.
pub fn total_label(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("Total: ${:.2}", rounded)
}

/// Terminal result of a payment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOutcome {
    Success,
    Failure,
}

impl PaymentOutcome {
    /// Value of the `status` query parameter on the confirmation view
    pub fn status(&self) -> &'static str {
        match self {
            PaymentOutcome::Success => "success",
            PaymentOutcome::Failure => "failure",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentOutcome::Success)
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status())
    }
}

/// Navigation to the payment confirmation view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationRedirect {
    pub path: String,
    pub outcome: PaymentOutcome,
}

impl ConfirmationRedirect {
    pub fn new(path: impl Into<String>, outcome: PaymentOutcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }

    /// Full target, e.g. `/payment/confirmation?status=success`
    pub fn url(&self) -> String {
        format!("{}?status={}", self.path, self.outcome.status())
    }
}

impl fmt::Display for ConfirmationRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
