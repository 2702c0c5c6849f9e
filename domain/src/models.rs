use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A bounded-length piece of the knowledge corpus, in corpus order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSegment {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embedding {
    pub id: String,
    pub vector: Vec<f32>,
    pub text: String,
}

/// A segment returned by similarity search, with its score.
#[derive(Debug, Clone)]
pub struct SegmentMatch {
    pub id: String,
    pub text: String,
    pub score: f32,
}

/// Answer drafted for one clause, with the ids of the segments it drew on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedAnswer {
    pub label: String,
    pub text: String,
    pub sources: Vec<String>,
}

/// One row of the repeating clause list in the rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseEntry {
    pub details: String,
}

/// Everything the document template can reference: scalar fields plus the
/// ordered clause entries.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub fields: BTreeMap<String, String>,
    pub clauses: Vec<ClauseEntry>,
}

impl RenderContext {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Project metadata merged into the response document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub project_name: String,
    pub company_name: String,
    pub project_address: String,
    pub project_code: String,
    pub client_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub submitter_name: String,
}

impl ProjectInfo {
    /// Sample project used when the operator supplies no project file:
    /// the DVC Raghunathpur balance-of-plant tender.
    pub fn sample() -> Self {
        Self {
            project_name: "BALANCE OF PLANT (BOP) TURNKEY PACKAGE FOR RAGHUNATHPUR \
                           THERMAL POWER STATION PHASE-II (2X660MW)"
                .to_string(),
            company_name: "Damodar Valley Corporation".to_string(),
            project_address: "DPURULIA DISTRICT OF WEST BENGAL".to_string(),
            project_code: "DVC/C&M/Engineering/RTPS Ph-II/EPC/BOP".to_string(),
            client_name: "Damodar Sharma".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2023, 3, 31).unwrap(),
            submitter_name: "Jane Smith".to_string(),
        }
    }
}
