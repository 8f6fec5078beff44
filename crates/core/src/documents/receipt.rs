//! State-fee receipt rendered as an XLSX workbook.
//!
//! Layout: a merged, centred title across `A1:F1`, then a fixed sequence
//! of label/value rows starting at row 3. Every data cell in `A:F` is
//! bordered; labels ending in `:` are bold. The workbook creation time is
//! the receipt date, so the same car and date always give the same bytes.

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook, XlsxError,
};

use super::format::{format_date, format_price};
use super::CarSheet;
use crate::error::CoreError;

/// Title in the merged header cell.
pub const RECEIPT_TITLE: &str = "RECEIPT";

/// Registration fee printed on every receipt, in roubles.
pub const STATE_FEE: f64 = 3300.0;

/// Column widths for `A` through `F`.
pub const COLUMN_WIDTHS: [f64; 6] = [25.0, 30.0, 15.0, 15.0, 15.0, 15.0];

/// Zero-based sheet row of the first label/value row (row 3 in Excel).
pub const FIRST_DATA_ROW: u32 = 2;

const SHEET_NAME: &str = "Receipt";

/// Value column content.
#[derive(Debug, Clone, PartialEq)]
pub enum ReceiptValue {
    Empty,
    Text(String),
    Number(f64),
}

/// One row of the receipt body: a label in column `A`, a value in `B`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptRow {
    pub label: &'static str,
    pub value: ReceiptValue,
}

impl ReceiptRow {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: ReceiptValue::Text(value.into()),
        }
    }

    fn blank() -> Self {
        Self {
            label: "",
            value: ReceiptValue::Empty,
        }
    }

    /// Labels ending in a colon are rendered bold.
    pub fn is_bold_label(&self) -> bool {
        self.label.ends_with(':')
    }
}

/// The label/value rows printed below the title.
pub fn rows(car: &CarSheet, date: NaiveDate) -> Vec<ReceiptRow> {
    vec![
        ReceiptRow::text("Date:", format_date(date)),
        ReceiptRow::blank(),
        ReceiptRow::text("Payer:", "[Payer full name]"),
        ReceiptRow::blank(),
        ReceiptRow::text("Payment purpose:", "State fee for vehicle registration"),
        ReceiptRow::blank(),
        ReceiptRow {
            label: "Car details:",
            value: ReceiptValue::Empty,
        },
        ReceiptRow::text("Make, model:", car.make_and_model()),
        ReceiptRow {
            label: "Year of manufacture:",
            value: ReceiptValue::Number(f64::from(car.year)),
        },
        ReceiptRow::text("Color:", car.color.clone()),
        ReceiptRow::text("VIN:", car.vin()),
        ReceiptRow::blank(),
        ReceiptRow::text("State fee:", format!("{} RUB", format_price(STATE_FEE))),
        ReceiptRow::blank(),
        ReceiptRow::text("Payer signature:", "___________________"),
    ]
}

/// Render the receipt workbook as XLSX bytes.
pub fn render(car: &CarSheet, date: NaiveDate) -> Result<Vec<u8>, CoreError> {
    build_workbook(car, date)
        .and_then(|mut workbook| workbook.save_to_buffer())
        .map_err(|e| CoreError::Internal(format!("failed to write receipt workbook: {e}")))
}

fn build_workbook(car: &CarSheet, date: NaiveDate) -> Result<Workbook, XlsxError> {
    let title = Format::new()
        .set_bold()
        .set_font_size(14)
        .set_align(FormatAlign::Center);
    let label = Format::new()
        .set_bold()
        .set_font_size(12)
        .set_border(FormatBorder::Thin);
    let normal = Format::new().set_font_size(11).set_border(FormatBorder::Thin);

    let mut workbook = Workbook::new();
    workbook.set_properties(&DocProperties::new().set_creation_datetime(&excel_date(date)?));

    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;
    sheet.merge_range(0, 0, 0, 5, RECEIPT_TITLE, &title)?;

    for (offset, row) in rows(car, date).into_iter().enumerate() {
        let r = FIRST_DATA_ROW + offset as u32;

        let label_format = if row.is_bold_label() { &label } else { &normal };
        if row.label.is_empty() {
            sheet.write_blank(r, 0, label_format)?;
        } else {
            sheet.write_string_with_format(r, 0, row.label, label_format)?;
        }

        match row.value {
            ReceiptValue::Empty => sheet.write_blank(r, 1, &normal)?,
            ReceiptValue::Text(text) => sheet.write_string_with_format(r, 1, &text, &normal)?,
            ReceiptValue::Number(n) => sheet.write_number_with_format(r, 1, n, &normal)?,
        };

        for col in 2..6 {
            sheet.write_blank(r, col, &normal)?;
        }
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    Ok(workbook)
}

fn excel_date(date: NaiveDate) -> Result<ExcelDateTime, XlsxError> {
    let year = u16::try_from(date.year())
        .map_err(|_| XlsxError::DateTimeRangeError(date.to_string()))?;
    ExcelDateTime::from_ymd(year, date.month() as u8, date.day() as u8)
}
