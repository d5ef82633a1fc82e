use chrono::NaiveDate;
use fatoora::core::*;
use fatoora::{inspect, transport};
use rust_decimal_macros::dec;

fn main() {
    // Invoice facts as supplied by the invoicing layer
    let seller = Seller::new("Acme Trading Co.", "300000000000003");
    let totals = InvoiceTotals::new(
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap(),
        dec!(115.00),
        dec!(15.00),
    );

    let fields = QrFields::from_invoice(&seller, &totals, SchemaVersion::Basic);
    let payload = transport::encode_fields(&fields, SchemaVersion::Basic)
        .expect("record should fit the transport ceiling");

    println!("Transport string ({} chars):", payload.len());
    println!("{payload}");
    println!();

    match inspect::validate(&payload, SchemaVersion::Basic) {
        Ok(()) => println!("Payload validates under the basic schema."),
        Err(e) => println!("Validation failed: {e}"),
    }
}
