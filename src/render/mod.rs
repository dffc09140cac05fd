// src/render/mod.rs

pub mod display;
pub mod format;
pub mod html;
pub mod view;

pub use display::{DisplayTarget, PageState, SharedPage};
pub use view::{build_view, Aggregates, RowView, StatsView, TableView};

use chrono::{DateTime, Local};

/// Label shown next to the time of the last successful render.
pub fn last_updated_text(now: DateTime<Local>) -> String {
    format!("마지막 업데이트: {}", now.format("%H:%M:%S"))
}

/// Push a view model onto the display. An empty view swaps in the no-data
/// row and clears the records; stats and timestamp keep their previous values.
pub fn apply_view(view: &TableView, target: &impl DisplayTarget, now: DateTime<Local>) {
    match view {
        TableView::Empty => {
            target.set_body(html::no_data_row());
            target.set_records(Vec::new());
        }
        TableView::Rows {
            rows,
            stats,
            records,
        } => {
            target.set_body(html::rows_html(rows));
            target.set_stats(stats.clone());
            target.set_records(records.clone());
            target.set_last_updated(last_updated_text(now));
        }
    }
}
