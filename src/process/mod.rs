// src/process/mod.rs

pub mod record;
pub mod utils;

pub use record::Record;

use tracing::trace;

/// Parse the sheet's CSV export into records, in source order.
///
/// The first line is a header and is skipped. Lines are split naively on
/// `,`: quoted fields containing commas are not supported and will shift the
/// remaining cells. Lines whose code cell is empty are dropped. Never fails;
/// header-only or empty input gives an empty vec.
pub fn parse_csv(text: &str) -> Vec<Record> {
    let mut out = Vec::new();
    for (idx, line) in text.trim().split('\n').enumerate().skip(1) {
        let cells: Vec<&str> = line.split(',').collect();
        match Record::from_cells(&cells) {
            Some(rec) => out.push(rec),
            None => trace!(line = idx + 1, "skipping row without code"),
        }
    }
    out
}
