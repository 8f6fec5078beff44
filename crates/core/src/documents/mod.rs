//! Document export pipeline.
//!
//! Three renderers turn a denormalized [`CarSheet`] plus a date into a
//! downloadable file:
//!
//! | Kind                         | Format                         | File name                 |
//! |------------------------------|--------------------------------|---------------------------|
//! | [`DocumentKind::Contract`]     | HTML markup opened as `.doc`   | `contract_car_<id>.doc`   |
//! | [`DocumentKind::AcceptanceAct`]| single-page A4 PDF             | `acceptance_act_<id>.pdf` |
//! | [`DocumentKind::Receipt`]      | XLSX workbook                  | `receipt_<id>.xlsx`       |
//!
//! Renderers are pure: the same record and date always produce the same
//! document, and none of them touch storage.

pub mod acceptance_act;
pub mod contract;
pub mod format;
pub mod receipt;

use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

pub use acceptance_act::{ActFont, AcceptanceActRenderer};

// ---------------------------------------------------------------------------
// Input record
// ---------------------------------------------------------------------------

/// A car joined with its model and manufacturer: everything a document
/// needs to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarSheet {
    pub id: DbId,
    pub manufacturer_name: String,
    pub manufacturer_country: String,
    pub model_name: String,
    pub color: String,
    pub price: f64,
    pub year: i32,
    pub engine_type: String,
    pub transmission: String,
    pub mileage: i32,
    pub status: String,
}

impl CarSheet {
    /// "Manufacturer Model", as printed on every document.
    pub fn make_and_model(&self) -> String {
        format!("{} {}", self.manufacturer_name, self.model_name)
    }

    /// Placeholder VIN derived from the car id.
    pub fn vin(&self) -> String {
        format!("VIN_{}", self.id)
    }

    /// Placeholder engine number derived from the car id.
    pub fn engine_number(&self) -> String {
        format!("ENG_{}", self.id)
    }

    /// Placeholder body number derived from the car id.
    pub fn body_number(&self) -> String {
        format!("BODY_{}", self.id)
    }
}

// ---------------------------------------------------------------------------
// Document kinds
// ---------------------------------------------------------------------------

/// The three printable documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Contract,
    AcceptanceAct,
    Receipt,
}

impl DocumentKind {
    /// Short machine name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::AcceptanceAct => "acceptance_act",
            Self::Receipt => "receipt",
        }
    }

    /// Media type sent in the `Content-Type` header.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Contract => "application/msword",
            Self::AcceptanceAct => "application/pdf",
            Self::Receipt => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Download file name for the given car.
    pub fn file_name(&self, car_id: DbId) -> String {
        match self {
            Self::Contract => format!("contract_car_{car_id}.doc"),
            Self::AcceptanceAct => format!("acceptance_act_{car_id}.pdf"),
            Self::Receipt => format!("receipt_{car_id}.xlsx"),
        }
    }
}

/// A rendered document ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct Document {
    pub kind: DocumentKind,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }

    /// Value for the `Content-Disposition` header.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}

// ---------------------------------------------------------------------------
// Renderer set
// ---------------------------------------------------------------------------

/// Holds the renderer configuration resolved at startup and dispatches a
/// [`DocumentKind`] to its renderer.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    act: AcceptanceActRenderer,
}

impl DocumentRenderer {
    /// Build the renderers. `font_path` is the optional TTF used by the
    /// acceptance act; when it cannot be loaded the built-in font is used.
    pub fn new(font_path: Option<&Path>) -> Self {
        Self {
            act: AcceptanceActRenderer::new(ActFont::resolve(font_path)),
        }
    }

    /// Render `kind` for `car`, dated `date`.
    pub fn render(
        &self,
        kind: DocumentKind,
        car: &CarSheet,
        date: NaiveDate,
    ) -> Result<Document, CoreError> {
        let bytes = match kind {
            DocumentKind::Contract => contract::render(car, date).into_bytes(),
            DocumentKind::AcceptanceAct => self.act.render(car, date)?,
            DocumentKind::Receipt => receipt::render(car, date)?,
        };

        tracing::debug!(
            kind = kind.as_str(),
            car_id = car.id,
            size = bytes.len(),
            "Rendered document"
        );

        Ok(Document {
            kind,
            file_name: kind.file_name(car.id),
            bytes,
        })
    }
}

impl Default for DocumentRenderer {
    fn default() -> Self {
        Self::new(None)
    }
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) fn sample_sheet() -> CarSheet {
    CarSheet {
        id: 42,
        manufacturer_name: "Acme".to_string(),
        manufacturer_country: "USA".to_string(),
        model_name: "Roadster".to_string(),
        color: "Red".to_string(),
        price: 1_234_567.5,
        year: 2021,
        engine_type: "Petrol".to_string(),
        transmission: "Manual".to_string(),
        mileage: 15_000,
        status: "available".to_string(),
    }
}
