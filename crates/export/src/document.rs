//! Paginated PDF report encoder.
//!
//! Landscape A4 with a header banner (title, generation stamp, record
//! count) and a fixed-column table; rows that overflow the page continue
//! on a fresh page under a repeated header row.

use std::io::BufWriter;

use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use opdreg_core::registration::Registration;

use crate::columns::{row_values, DOCUMENT_COLUMNS};
use crate::error::ExportError;

/// Report banner title.
const REPORT_TITLE: &str = "Hospital Registrations Report";

const PAGE_WIDTH: Mm = Mm(297.0);
const PAGE_HEIGHT: Mm = Mm(210.0);
const MARGIN_LEFT: Mm = Mm(15.0);
const TOP_Y: Mm = Mm(196.0);
const BOTTOM_Y: Mm = Mm(14.0);
const ROW_HEIGHT: Mm = Mm(5.0);

/// Left x offset of each column, parallel to
/// [`DOCUMENT_COLUMNS`](crate::columns::DOCUMENT_COLUMNS).
const COLUMN_X: &[Mm] = &[
    Mm(15.0),
    Mm(33.0),
    Mm(73.0),
    Mm(85.0),
    Mm(101.0),
    Mm(115.0),
    Mm(141.0),
    Mm(155.0),
    Mm(175.0),
];

/// Per-column character limit; longer values are clipped to keep the
/// fixed column grid readable.
const COLUMN_CHARS: &[usize] = &[10, 23, 6, 9, 8, 15, 8, 12, 12];

/// Encode the full filtered record set as a `.pdf` payload.
///
/// Pure over the record set plus the supplied generation timestamp.
pub fn encode_document(
    records: &[Registration],
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Document(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Document(format!("font error: {e}")))?;

    let mut layer = doc.get_page(page).get_layer(layer);
    let mut y = TOP_Y;

    // Banner
    layer.use_text(REPORT_TITLE, 16.0, MARGIN_LEFT, y, &bold);
    y -= Mm(7.0);
    layer.use_text(
        format!("Generated on: {}", generated_at.format("%d %b %Y %H:%M UTC")),
        9.0,
        MARGIN_LEFT,
        y,
        &font,
    );
    y -= Mm(5.0);
    layer.use_text(
        format!("Total Records: {}", records.len()),
        9.0,
        MARGIN_LEFT,
        y,
        &font,
    );
    y -= Mm(8.0);

    draw_header_row(&layer, y, &bold);
    y -= ROW_HEIGHT;

    for record in records {
        if y.0 < BOTTOM_Y.0 {
            let (next_page, next_layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = TOP_Y;
            draw_header_row(&layer, y, &bold);
            y -= ROW_HEIGHT;
        }
        for (col, value) in row_values(DOCUMENT_COLUMNS, record).iter().enumerate() {
            layer.use_text(clip(value, COLUMN_CHARS[col]), 8.0, COLUMN_X[col], y, &font);
        }
        y -= ROW_HEIGHT;
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Document(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Document(format!("buffer error: {e}")))
}

fn draw_header_row(layer: &PdfLayerReference, y: Mm, bold: &IndirectFontRef) {
    for (col, column) in DOCUMENT_COLUMNS.iter().enumerate() {
        layer.use_text(column.header, 8.0, COLUMN_X[col], y, bold);
    }
}

/// Truncate a cell value to its column's character limit.
fn clip(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use opdreg_core::registration::{Gender, PatientType};
    use uuid::Uuid;

    use super::*;

    fn record(number: i64) -> Registration {
        Registration {
            id: Uuid::from_u128(number as u128),
            registration_number: number,
            name: format!("Patient {number}"),
            age: 40,
            gender: Gender::Male,
            department: "Surgery".to_string(),
            patient_type: PatientType::General,
            room_number: None,
            address: None,
            aadhar_number: None,
            mobile_number: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 6, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 3, 6, 9, 0, 0).unwrap(),
        }
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn layout_tables_cover_every_column() {
        assert_eq!(COLUMN_X.len(), DOCUMENT_COLUMNS.len());
        assert_eq!(COLUMN_CHARS.len(), DOCUMENT_COLUMNS.len());
    }

    #[test]
    fn produces_a_pdf_payload() {
        let bytes = encode_document(&[record(1)], stamp()).unwrap();
        assert_eq!(&bytes[..4], b"%PDF");
    }

    #[test]
    fn empty_set_still_renders_the_banner() {
        let bytes = encode_document(&[], stamp()).unwrap();
        assert_eq!(&bytes[..4], b"%PDF");
    }

    #[test]
    fn many_records_overflow_onto_extra_pages() {
        let records: Vec<_> = (1..=120).map(record).collect();
        let bytes = encode_document(&records, stamp()).unwrap();
        // More rows than one page holds still encodes cleanly, and the
        // payload grows with the extra pages.
        let one_page = encode_document(&records[..5], stamp()).unwrap();
        assert!(bytes.len() > one_page.len());
    }

    #[test]
    fn clip_respects_character_limit() {
        assert_eq!(clip("Gastroenterology", 8), "Gastroen");
        assert_eq!(clip("ENT", 8), "ENT");
    }
}
