use super::utils::{clean_str, leading_float, leading_int};
use serde::Serialize;

/// One data row: a single tracked instrument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub rank: String,
    pub code: String,
    pub name: String,
    pub foreign: i64,
    pub institution: i64,
    pub total: i64,
    /// Percentage return, `yield` column of the sheet.
    #[serde(rename = "yield")]
    pub yield_pct: f64,
    pub consecutive: String,
}

impl Record {
    /// Build a record from the raw cells of one line.
    ///
    /// Cells are positional: rank, code, name, foreign, institution, total,
    /// yield, consecutive. Returns `None` when the code cell is missing or
    /// empty. Unparseable numbers become 0.
    pub fn from_cells(raw: &[&str]) -> Option<Self> {
        let cells: Vec<String> = raw.iter().map(|c| clean_str(c)).collect();
        let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or("");

        let code = cell(1);
        if code.is_empty() {
            return None;
        }

        Some(Self {
            rank: cell(0).to_string(),
            code: code.to_string(),
            name: cell(2).to_string(),
            foreign: int_or_zero(cell(3)),
            institution: int_or_zero(cell(4)),
            total: int_or_zero(cell(5)),
            yield_pct: float_or_zero(cell(6)),
            consecutive: cell(7).to_string(),
        })
    }
}

fn int_or_zero(s: &str) -> i64 {
    leading_int(s).unwrap_or(0)
}

fn float_or_zero(s: &str) -> f64 {
    match leading_float(s) {
        // also folds -0.0 into 0.0
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => 0.0,
    }
}
