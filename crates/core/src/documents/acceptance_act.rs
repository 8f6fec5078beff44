//! Acceptance act rendered as a single-page A4 PDF.
//!
//! Text is placed at fixed positions given in PDF points from the bottom
//! left corner. The font is resolved once at construction time; if the
//! configured font cannot be read or embedded, the built-in Helvetica
//! family is used so that a missing font never fails a request.
//!
//! Output is byte-stable for a given car and date: the metadata dates are
//! midnight UTC of the act date and the file identifier is derived from
//! the car id.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use printpdf::lopdf::{self, Object, StringFormat};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, OffsetDateTime, PdfDocument, PdfDocumentReference,
};

use super::contract::CONTRACT_CITY;
use super::format::{format_date, format_price};
use super::CarSheet;
use crate::error::CoreError;

/// Title printed at the top of the page.
pub const ACT_TITLE: &str = "ACCEPTANCE ACT";

const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_PT: f32 = 100.0;
const LINE_SPACING_PT: f32 = 20.0;
const MM_PER_PT: f32 = 25.4 / 72.0;

// ---------------------------------------------------------------------------
// Font resolution
// ---------------------------------------------------------------------------

/// Font used for every line of the act.
#[derive(Debug, Clone, Default)]
pub enum ActFont {
    /// Built-in Helvetica (regular for body text, bold for headings).
    #[default]
    Builtin,
    /// A TrueType font read from disk at startup.
    External { path: PathBuf, data: Arc<[u8]> },
}

impl ActFont {
    /// Read the font at `path`, falling back to [`ActFont::Builtin`] when
    /// no path is configured or the file cannot be read.
    pub fn resolve(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::Builtin;
        };
        match std::fs::read(path) {
            Ok(data) => {
                tracing::info!(path = %path.display(), "Loaded document font");
                Self::External {
                    path: path.to_path_buf(),
                    data: data.into(),
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Document font unavailable, falling back to Helvetica"
                );
                Self::Builtin
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Typographic role of a line; decides font size and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Small,
    Body,
}

impl LineStyle {
    fn font_size(self) -> f32 {
        match self {
            Self::Title => 16.0,
            Self::Heading => 12.0,
            Self::Small => 10.0,
            Self::Body => 11.0,
        }
    }
}

/// One line of text at a fixed vertical position (points from the bottom).
#[derive(Debug, Clone, PartialEq)]
pub struct ActLine {
    pub y: f32,
    pub style: LineStyle,
    pub text: String,
}

impl ActLine {
    fn new(y: f32, style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            y,
            style,
            text: text.into(),
        }
    }
}

/// Compute every line of the act for `car`, dated `date`.
pub fn layout(car: &CarSheet, date: NaiveDate) -> Vec<ActLine> {
    let date = format_date(date);

    let mut lines = vec![
        ActLine::new(800.0, LineStyle::Title, ACT_TITLE),
        ActLine::new(780.0, LineStyle::Small, format!("{CONTRACT_CITY}, {date}")),
        ActLine::new(
            750.0,
            LineStyle::Heading,
            "1. The Seller hands over and the Buyer accepts the car:",
        ),
    ];

    let details = [
        format!("Make, model: {}", car.make_and_model()),
        format!("Year of manufacture: {}", car.year),
        format!("Color: {}", car.color),
        format!("Mileage: {} km", car.mileage),
        format!("Price: {} RUB", format_price(car.price)),
        format!("VIN: {}", car.vin()),
        format!("Engine No.: {}", car.engine_number()),
        format!("Body No.: {}", car.body_number()),
        format!("Engine type: {}", car.engine_type),
        format!("Transmission: {}", car.transmission),
    ];
    let mut y = 720.0;
    for text in details {
        lines.push(ActLine::new(y, LineStyle::Body, text));
        y -= LINE_SPACING_PT;
    }

    lines.extend([
        ActLine::new(520.0, LineStyle::Heading, "2. Transfer conditions:"),
        ActLine::new(
            500.0,
            LineStyle::Body,
            "The car has been inspected by the Buyer, no quality claims.",
        ),
        ActLine::new(
            480.0,
            LineStyle::Body,
            "Keys and documents have been handed over to the Buyer.",
        ),
        ActLine::new(420.0, LineStyle::Heading, "SIGNATURES:"),
        ActLine::new(400.0, LineStyle::Body, "Seller: _________________________"),
        ActLine::new(380.0, LineStyle::Body, "Buyer: _________________________"),
        ActLine::new(360.0, LineStyle::Body, format!("Date: {date}")),
    ]);

    lines
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Renders the acceptance act with the font chosen at startup.
#[derive(Debug, Clone, Default)]
pub struct AcceptanceActRenderer {
    font: ActFont,
}

impl AcceptanceActRenderer {
    pub fn new(font: ActFont) -> Self {
        Self { font }
    }

    pub fn font(&self) -> &ActFont {
        &self.font
    }

    /// Render the act as PDF bytes.
    pub fn render(&self, car: &CarSheet, date: NaiveDate) -> Result<Vec<u8>, CoreError> {
        let stamp = pdf_timestamp(date)?;
        let file_id = document_id(car, date);

        let (doc, page, layer) =
            PdfDocument::new(ACT_TITLE, Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
        let doc = doc
            .with_creation_date(stamp)
            .with_mod_date(stamp)
            .with_metadata_date(stamp)
            .with_document_id(file_id.clone());
        let fonts = self.load_fonts(&doc)?;
        let layer = doc.get_page(page).get_layer(layer);

        for line in layout(car, date) {
            let font = match line.style {
                LineStyle::Title | LineStyle::Heading => &fonts.bold,
                LineStyle::Small | LineStyle::Body => &fonts.regular,
            };
            layer.use_text(
                line.text,
                line.style.font_size(),
                Mm(LEFT_MARGIN_PT * MM_PER_PT),
                Mm(line.y * MM_PER_PT),
                font,
            );
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| CoreError::Internal(format!("failed to write acceptance act PDF: {e:?}")))?;
        pin_file_id(&bytes, &file_id)
    }

    fn load_fonts(&self, doc: &PdfDocumentReference) -> Result<Fonts, CoreError> {
        if let ActFont::External { path, data } = &self.font {
            match doc.add_external_font(Cursor::new(&data[..])) {
                Ok(font) => {
                    return Ok(Fonts {
                        regular: font.clone(),
                        bold: font,
                    })
                }
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = ?e,
                    "Document font could not be embedded, falling back to Helvetica"
                ),
            }
        }

        let builtin = |font: BuiltinFont| {
            doc.add_builtin_font(font)
                .map_err(|e| CoreError::Internal(format!("failed to add built-in font: {e:?}")))
        };
        Ok(Fonts {
            regular: builtin(BuiltinFont::Helvetica)?,
            bold: builtin(BuiltinFont::HelveticaBold)?,
        })
    }
}

/// Midnight UTC of `date`, used for every PDF metadata date.
fn pdf_timestamp(date: NaiveDate) -> Result<OffsetDateTime, CoreError> {
    let seconds = date.and_time(NaiveTime::MIN).and_utc().timestamp();
    OffsetDateTime::from_unix_timestamp(seconds)
        .map_err(|e| CoreError::Internal(format!("act date out of range: {e}")))
}

/// File identifier, a function of the car id and act date.
fn document_id(car: &CarSheet, date: NaiveDate) -> String {
    format!("AUTOMIR-ACT-{}-{:012}", date.format("%Y%m%d"), car.id)
}

/// Replace the trailer `/ID` pair, which printpdf fills from a process-wide
/// counter, with `document_id`.
fn pin_file_id(pdf: &[u8], document_id: &str) -> Result<Vec<u8>, CoreError> {
    let pin_error = |e: lopdf::Error| CoreError::Internal(format!("failed to stamp PDF id: {e}"));

    let mut document = lopdf::Document::load_mem(pdf).map_err(pin_error)?;
    let id = Object::String(document_id.as_bytes().to_vec(), StringFormat::Literal);
    document.trailer.set("ID", Object::Array(vec![id.clone(), id]));

    let mut out = Vec::with_capacity(pdf.len());
    document.save_to(&mut out).map_err(|e| CoreError::Internal(format!("failed to stamp PDF id: {e}")))?;
    Ok(out)
}
