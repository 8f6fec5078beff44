//! Sale contract rendered as HTML markup.
//!
//! Word processors open HTML saved with a `.doc` extension as a regular
//! document, so the contract is plain markup with inline styles.

use chrono::NaiveDate;

use super::format::{format_date, format_price};
use super::CarSheet;

/// Seller printed in the parties section.
pub const SELLER_NAME: &str = "AutoMir Dealership";

/// City printed under the title.
pub const CONTRACT_CITY: &str = "Moscow";

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }
.header { text-align: center; font-weight: bold; font-size: 16pt; margin-bottom: 30px; }
.place { text-align: center; margin-bottom: 30px; }
.section { margin-bottom: 20px; }
.section-title { font-weight: bold; font-size: 12pt; margin-bottom: 10px; }
.signature { margin-top: 50px; }
.signature-line { margin-top: 40px; }";

/// Render the sale contract for `car`, dated `date`.
pub fn render(car: &CarSheet, date: NaiveDate) -> String {
    let date = format_date(date);
    let price = format_price(car.price);

    let subject_items = [
        ("Make, model", car.make_and_model()),
        ("Year of manufacture", car.year.to_string()),
        ("Color", car.color.clone()),
        ("Mileage", format!("{} km", car.mileage)),
        ("Price", format!("{price} RUB")),
        ("Engine type", car.engine_type.clone()),
        ("Transmission", car.transmission.clone()),
        ("VIN", car.vin()),
        ("Engine No.", car.engine_number()),
        ("Body No.", car.body_number()),
    ];
    let subject: String = subject_items
        .iter()
        .map(|(label, value)| {
            format!(
                "        <li><strong>{label}:</strong> {}</li>\n",
                escape_html(value)
            )
        })
        .collect();

    format!(
        r#"<html>
<head>
<meta charset="UTF-8">
<title>Car Sale Contract</title>
<style>
{STYLE}
</style>
</head>
<body>
<div class="header">CAR SALE CONTRACT</div>
<div class="place">{city}, {date}</div>

<div class="section">
    <div class="section-title">1. Parties</div>
    <p><strong>Seller:</strong> {seller}</p>
    <p><strong>Buyer:</strong> [Buyer full name]</p>
</div>

<div class="section">
    <div class="section-title">2. Subject of the contract</div>
    <p>2.1. The Seller agrees to transfer, and the Buyer agrees to accept and pay for, a car with the following characteristics:</p>
    <ul>
{subject}    </ul>
</div>

<div class="section">
    <div class="section-title">3. Price and payment terms</div>
    <p>3.1. Total price: <strong>{price} RUB</strong></p>
    <p>3.2. The Buyer pays the full price on the day the contract is signed.</p>
</div>

<div class="section">
    <div class="section-title">4. Transfer conditions</div>
    <p>4.1. The car is handed over to the Buyer on the day the contract is signed.</p>
</div>

<div class="signature">
    <div class="section-title">5. Signatures</div>
    <div class="signature-line">
        <strong>Seller:</strong> ___________________ / {date}
    </div>
    <div class="signature-line">
        <strong>Buyer:</strong> ___________________ / {date}
    </div>
</div>

</body>
</html>
"#,
        city = CONTRACT_CITY,
        seller = SELLER_NAME,
    )
}

/// Escape the characters that would otherwise break the markup.
fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::sample_sheet;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn contract_lists_car_fields() {
        let html = render(&sample_sheet(), date());
        assert!(html.contains("CAR SALE CONTRACT"));
        assert!(html.contains("<strong>Make, model:</strong> Acme Roadster"));
        assert!(html.contains("<strong>Mileage:</strong> 15000 km"));
        assert!(html.contains("<strong>VIN:</strong> VIN_42"));
        assert!(html.contains("<strong>Engine No.:</strong> ENG_42"));
        assert!(html.contains("<strong>Body No.:</strong> BODY_42"));
    }

    #[test]
    fn price_is_formatted_everywhere() {
        let html = render(&sample_sheet(), date());
        assert_eq!(html.matches("1,234,567.50 RUB").count(), 2);
        assert!(!html.contains("1234567.5"));
    }

    #[test]
    fn signature_block_carries_the_date() {
        let html = render(&sample_sheet(), date());
        assert!(html.contains("Moscow, 05.03.2024"));
        assert!(html.contains("<strong>Seller:</strong> ___________________ / 05.03.2024"));
        assert!(html.contains("<strong>Buyer:</strong> ___________________ / 05.03.2024"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(&sample_sheet(), date()), render(&sample_sheet(), date()));
    }

    #[test]
    fn free_text_is_escaped() {
        let mut car = sample_sheet();
        car.color = "<b>Blue</b> & \"Grey\"".to_string();
        let html = render(&car, date());
        assert!(html.contains("&lt;b&gt;Blue&lt;/b&gt; &amp; &quot;Grey&quot;"));
    }
}
