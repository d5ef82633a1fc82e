use chrono::NaiveDate;
use fatoora::core::*;
use fatoora::{inspect, transport};
use rust_decimal_macros::dec;

fn main() {
    let seller = Seller::new("شركة المثال", "310122393500003");
    let totals = InvoiceTotals::new(
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap(),
        dec!(4600.00),
        dec!(600.00),
    );

    let fields = QrFields::from_invoice(&seller, &totals, SchemaVersion::Extended);
    let payload = transport::encode_fields(&fields, SchemaVersion::Extended)
        .expect("record should fit the transport ceiling");

    // An auditor's diagnostics view of a scanned payload
    match inspect::inspect(&payload, SchemaVersion::Extended) {
        Ok(decoded) => println!("{decoded}"),
        Err(e) => println!("Inspection failed: {e}"),
    }

    // A tampered payload fails structurally, never silently
    let mut tampered = payload.clone();
    tampered.truncate(payload.len() - 8);
    match inspect::validate(&tampered, SchemaVersion::Extended) {
        Ok(()) => println!("unexpectedly valid"),
        Err(e) => println!("\nTampered payload rejected: {e}"),
    }
}
