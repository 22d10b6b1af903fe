use anyhow::{Context, bail};
use chrono::{Duration, Local};
use hostel_core::{
    CoinFlipGateway, HostelPage, PaymentDialog, print_banner, setup_environment,
};
use shared::booking::BookingInput;
use shared::models::Hostel;
use std::sync::Arc;

const SAMPLE_HOSTEL: &str = include_str!("../data/sample_hostel.json");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    let config = setup_environment();
    print_banner();
    tracing::info!(environment = %config.environment, "Hostel demo starting...");

    // 2. Hostel data
    let json = match &config.hostel_data {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read hostel data from {path}"))?,
        None => SAMPLE_HOSTEL.to_string(),
    };
    let hostel = Hostel::from_json(&json)?;

    let mut page = HostelPage::load(Some(hostel), &config)?;
    let Some(profile) = page.profile_mut() else {
        bail!("Hostel page did not load a profile");
    };

    for card in profile.room_cards() {
        tracing::info!(
            room = %card.name,
            kind = card.kind,
            beds = %card.beds,
            price = %card.price,
            availability = card.availability,
            "Room card"
        );
    }
    tracing::info!(map = %profile.map_url(), "Location link");

    let Some(index) = profile.room_cards().iter().position(|c| c.bookable) else {
        bail!("No bookable rooms in hostel data");
    };

    // 3. Booking
    let today = Local::now().date_naive();
    let input = BookingInput {
        name: "Ayesha Khan".to_string(),
        address: "House 12, Street 4, Lahore".to_string(),
        cnic: "3520212345671".to_string(),
        phone: "+923001234567".to_string(),
        check_in_date: Some(today + Duration::days(7)),
        check_out_date: Some(today + Duration::days(37)),
    };

    profile.book_now(index)?;
    let wizard = profile.wizard_mut();
    wizard.submit_draft(input.clone())?;
    if let Some(rows) = wizard.snapshot().summary() {
        for row in rows {
            tracing::info!(label = row.label, value = %row.value, "Summary");
        }
    }
    let request = wizard.confirm_booking()?;
    tracing::info!(record = %serde_json::to_string(&request)?, "Booking request record");
    for notice in wizard.take_notices() {
        tracing::info!(title = %notice.title, description = %notice.description, "Notice");
    }

    // 4. Cancellation
    profile.book_now(index)?;
    let wizard = profile.wizard_mut();
    wizard.submit_draft(input)?;
    wizard.request_cancellation()?;
    wizard.edit_cancellation_reason("Changed plans")?;
    wizard.confirm_cancellation("Changed plans")?;
    for notice in wizard.take_notices() {
        tracing::info!(title = %notice.title, description = %notice.description, "Notice");
    }

    // 5. Payment
    let amount = request.room.price;
    let dialog = PaymentDialog::open(amount, &config, Arc::new(CoinFlipGateway));
    tracing::info!(total = %dialog.total_label(), "Payment dialog");

    let mut draft = dialog.draft();
    draft.card_number = "4242 4242 4242 4242".to_string();
    draft.expiry_date = "12/28".to_string();
    draft.cvv = "123".to_string();
    draft.cardholder_name = "Ayesha Khan".to_string();

    match dialog.submit(draft)?.outcome().await? {
        Some(redirect) => tracing::info!(url = %redirect, "Navigating to confirmation"),
        None => tracing::info!("Payment dialog closed before completion"),
    }

    tracing::info!("Hostel demo finished");
    Ok(())
}
