use chrono::NaiveDate;
use fatoora::core::*;
use fatoora::{render, transport};
use rust_decimal_macros::dec;

fn main() {
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

    // Rendering failure is non-fatal: the payload itself stays usable.
    match render::render_png(&payload) {
        Ok(png) => {
            std::fs::write("fatoora_qr.png", &png).expect("write fatoora_qr.png");
            println!("Wrote fatoora_qr.png ({} bytes).", png.len());

            let embedded = render::render_png_base64(&payload).unwrap();
            println!(
                "HTML embedding: <img src=\"data:image/png;base64,{}...\">",
                &embedded[..32]
            );
        }
        Err(e) => println!("Rendering failed ({e}); payload is still usable: {payload}"),
    }
}
