//! Procedure text assembly: render a record into the grounding context
//! handed to the generation service.

use egov_core::models::ProcedureRecord;
use egov_core::traits::IDocumentStore;

/// Sentinel returned when no record resolves for a key. Assembly never
/// errors; an unresolvable candidate just produces this text.
pub const NOT_FOUND_TEXT: &str = "Không tìm thấy thủ tục.";

/// Declared field order with display labels. Assembly walks this table,
/// not the record's serialized keys, so output order is fixed.
const FIELDS: &[(&str, fn(&ProcedureRecord) -> Option<&str>)] = &[
    ("Tên thủ tục", |r| r.name.as_deref()),
    ("Cách thức thực hiện", |r| r.execution_method.as_deref()),
    ("Thành phần hồ sơ", |r| r.required_documents.as_deref()),
    ("Trình tự thực hiện", |r| r.process_steps.as_deref()),
    ("Cơ quan thực hiện", |r| r.agency.as_deref()),
    ("Yêu cầu, điều kiện", |r| r.eligibility.as_deref()),
    ("Thủ tục liên quan", |r| r.related_procedures.as_deref()),
    ("Nguồn", |r| Some(r.source.as_str())),
];

/// Resolve a record by key and render its non-empty fields in declared
/// order, `Label:\n<value>` blocks joined with blank lines.
pub fn assemble(store: &dyn IDocumentStore, key: &str) -> String {
    match store.get(key) {
        Some(record) => render(record),
        None => NOT_FOUND_TEXT.to_string(),
    }
}

/// Render a resolved record. Empty and missing fields are skipped; a
/// record with nothing to show still reports its source.
pub fn render(record: &ProcedureRecord) -> String {
    let parts: Vec<String> = FIELDS
        .iter()
        .filter_map(|(label, accessor)| {
            accessor(record)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| format!("{label}:\n{v}"))
        })
        .collect();

    if parts.is_empty() {
        NOT_FOUND_TEXT.to_string()
    } else {
        parts.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProcedureRecord {
        let mut record = ProcedureRecord::new("https://dichvucong.gov.vn/tt/cccd");
        record.name = Some("Cấp thẻ Căn cước công dân".to_string());
        record.required_documents = Some("Sổ hộ khẩu; tờ khai CCCD".to_string());
        record.agency = Some("Công an cấp huyện".to_string());
        record
    }

    #[test]
    fn renders_fields_in_declared_order() {
        let rendered = render(&sample());
        let name_pos = rendered.find("Tên thủ tục").unwrap();
        let docs_pos = rendered.find("Thành phần hồ sơ").unwrap();
        let agency_pos = rendered.find("Cơ quan thực hiện").unwrap();
        let source_pos = rendered.find("Nguồn").unwrap();
        assert!(name_pos < docs_pos && docs_pos < agency_pos && agency_pos < source_pos);
    }

    #[test]
    fn skips_missing_fields() {
        let rendered = render(&sample());
        assert!(!rendered.contains("Trình tự thực hiện"));
        assert!(!rendered.contains("Yêu cầu, điều kiện"));
    }

    #[test]
    fn blocks_are_blank_line_separated() {
        let rendered = render(&sample());
        assert!(rendered.contains("Tên thủ tục:\nCấp thẻ Căn cước công dân\n\n"));
    }

    #[test]
    fn render_is_idempotent() {
        let record = sample();
        assert_eq!(render(&record), render(&record));
    }

    #[test]
    fn whitespace_only_field_is_skipped() {
        let mut record = sample();
        record.eligibility = Some("   ".to_string());
        assert!(!render(&record).contains("Yêu cầu"));
    }
}
