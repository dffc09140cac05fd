use super::format::{fixed2, group_thousands, signed_percent};
use crate::process::Record;
use serde::Serialize;

/// Count, total and mean yield over one refresh cycle's records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregates {
    pub count: usize,
    pub total: i64,
    pub avg_yield: f64,
}

impl Aggregates {
    pub fn of(records: &[Record]) -> Self {
        let count = records.len();
        let total = records
            .iter()
            .fold(0i64, |acc, r| acc.saturating_add(r.total));
        let avg_yield = if count > 0 {
            records.iter().map(|r| r.yield_pct).sum::<f64>() / count as f64
        } else {
            0.0
        };
        Self {
            count,
            total,
            avg_yield,
        }
    }
}

/// Summary values as they appear on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub count: String,
    pub total: String,
    pub avg_yield: String,
}

impl StatsView {
    /// What the page shows before the first successful refresh.
    pub fn placeholder() -> Self {
        Self {
            count: "-".to_string(),
            total: "-".to_string(),
            avg_yield: "-".to_string(),
        }
    }
}

impl From<Aggregates> for StatsView {
    fn from(agg: Aggregates) -> Self {
        let sign = if agg.avg_yield >= 0.0 { "+" } else { "" };
        Self {
            count: agg.count.to_string(),
            total: group_thousands(agg.total),
            avg_yield: format!("{sign}{}%", fixed2(agg.avg_yield)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(index: usize) -> Self {
        if index % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

/// One table row, every cell already formatted. Text cells are raw here and
/// escaped when turned into markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub parity: Parity,
    pub rank: String,
    pub code: String,
    pub name: String,
    pub foreign: String,
    pub institution: String,
    pub total: String,
    pub yield_text: String,
    pub yield_positive: bool,
    pub consecutive: String,
}

impl RowView {
    fn new(index: usize, rec: &Record) -> Self {
        Self {
            parity: Parity::of(index),
            rank: rec.rank.clone(),
            code: rec.code.clone(),
            name: rec.name.clone(),
            foreign: group_thousands(rec.foreign),
            institution: group_thousands(rec.institution),
            total: group_thousands(rec.total),
            yield_text: signed_percent(rec.yield_pct),
            yield_positive: rec.yield_pct >= 0.0,
            consecutive: rec.consecutive.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// Nothing matched: placeholder row, stats left as they were.
    Empty,
    Rows {
        rows: Vec<RowView>,
        stats: StatsView,
        records: Vec<Record>,
    },
}

/// Pure view model for one refresh cycle.
pub fn build_view(records: &[Record]) -> TableView {
    if records.is_empty() {
        return TableView::Empty;
    }
    let rows = records
        .iter()
        .enumerate()
        .map(|(i, rec)| RowView::new(i, rec))
        .collect();
    TableView::Rows {
        rows,
        stats: Aggregates::of(records).into(),
        records: records.to_vec(),
    }
}
