//! Payment dialog flows on a paused clock

use hostel_core::payment::{CoinFlipGateway, FixedGateway, PaymentDialog, PaymentError};
use hostel_core::{AppError, Config, ErrorCode};
use rust_decimal::Decimal;
use shared::models::{PaymentDraft, PaymentOutcome};
use std::sync::Arc;
use std::time::Duration;

fn filled(dialog: &PaymentDialog) -> PaymentDraft {
    let mut draft = dialog.draft();
    draft.card_number = "5555 5555 5555 4444".to_string();
    draft.expiry_date = "01/29".to_string();
    draft.cvv = "321".to_string();
    draft.cardholder_name = "Bilal Ahmed".to_string();
    draft
}

#[tokio::test(start_paused = true)]
async fn test_success_redirect() {
    let dialog = PaymentDialog::open(
        Decimal::new(12000, 0),
        &Config::default(),
        Arc::new(FixedGateway(PaymentOutcome::Success)),
    );
    assert_eq!(dialog.total_label(), "Total: $12000.00");

    let redirect = dialog.submit(filled(&dialog)).unwrap().outcome().await.unwrap();

    assert_eq!(
        redirect.map(|r| r.url()),
        Some("/payment/confirmation?status=success".to_string())
    );
    assert!(!dialog.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_configured_delay_and_path() {
    let mut config = Config::default().with_payment_delay(Duration::from_millis(300));
    config.confirmation_path = "/checkout/done".to_string();
    let dialog = PaymentDialog::open(
        Decimal::ONE,
        &config,
        Arc::new(FixedGateway(PaymentOutcome::Failure)),
    );

    let task = dialog.submit(filled(&dialog)).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(dialog.is_processing());
    assert!(!task.is_finished());

    let redirect = task.outcome().await.unwrap().unwrap();
    assert_eq!(redirect.url(), "/checkout/done?status=failure");
}

#[tokio::test(start_paused = true)]
async fn test_close_before_delay_suppresses_callback() {
    let dialog = PaymentDialog::open(
        Decimal::new(850050, 2),
        &Config::default(),
        Arc::new(CoinFlipGateway),
    );

    let task = dialog.submit(filled(&dialog)).unwrap();
    tokio::time::sleep(Duration::from_millis(1999)).await;
    dialog.close();

    assert_eq!(task.outcome().await.unwrap(), None);
    assert!(!dialog.is_open());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_dialog_cancels_attempt() {
    let dialog = PaymentDialog::open(
        Decimal::ONE,
        &Config::default(),
        Arc::new(FixedGateway(PaymentOutcome::Success)),
    );
    let task = dialog.submit(filled(&dialog)).unwrap();
    drop(dialog);

    assert_eq!(task.outcome().await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_coin_flip_outcome_shape() {
    let dialog = PaymentDialog::open(
        Decimal::ONE,
        &Config::default(),
        Arc::new(CoinFlipGateway),
    );
    let redirect = dialog.submit(filled(&dialog)).unwrap().outcome().await.unwrap().unwrap();
    let url = redirect.url();
    assert!(
        url == "/payment/confirmation?status=success"
            || url == "/payment/confirmation?status=failure"
    );
}

#[tokio::test]
async fn test_missing_fields_map_to_app_error() {
    let dialog = PaymentDialog::open(
        Decimal::ONE,
        &Config::default(),
        Arc::new(FixedGateway(PaymentOutcome::Success)),
    );
    let mut draft = filled(&dialog);
    draft.cardholder_name.clear();

    let err = dialog.submit(draft).unwrap_err();
    assert!(matches!(err, PaymentError::Validation(_)));

    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ValidationFailed);
    let fields = app.field_errors().unwrap();
    assert_eq!(fields.get("cardholder_name"), Some("Cardholder name is required"));
    assert_eq!(fields.len(), 1);
}
