use serde::{Deserialize, Serialize};

/// One administrative procedure document.
///
/// Field names follow the upstream data dump from the national service
/// portal, so records deserialize straight from the raw JSON. Records are
/// immutable once loaded; the document store hands out references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureRecord {
    /// Primary key: the source URL on the service portal.
    #[serde(rename = "nguon")]
    pub source: String,

    /// Secondary key grouping chunked entries back to their parent record.
    #[serde(rename = "parent_id", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    /// Procedure name.
    #[serde(rename = "ten_thu_tuc", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// How the procedure is carried out (in person, online, postal).
    #[serde(
        rename = "cach_thuc_thuc_hien",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_method: Option<String>,

    /// Documents the applicant must submit.
    #[serde(
        rename = "thanh_phan_ho_so",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub required_documents: Option<String>,

    /// Step-by-step processing sequence.
    #[serde(
        rename = "trinh_tu_thuc_hien",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub process_steps: Option<String>,

    /// Agency responsible for processing.
    #[serde(
        rename = "co_quan_thuc_hien",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub agency: Option<String>,

    /// Eligibility requirements and conditions.
    #[serde(
        rename = "yeu_cau_dieu_kien",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub eligibility: Option<String>,

    /// Related procedures.
    #[serde(
        rename = "thu_tuc_lien_quan",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub related_procedures: Option<String>,
}

impl ProcedureRecord {
    /// Minimal record with only the primary key set.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            parent_id: None,
            name: None,
            execution_method: None,
            required_documents: None,
            process_steps: None,
            agency: None,
            eligibility: None,
            related_procedures: None,
        }
    }
}
