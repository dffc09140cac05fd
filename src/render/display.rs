use super::html::loading_row;
use super::view::StatsView;
use crate::process::Record;
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Where a refresh cycle writes its results.
pub trait DisplayTarget: Send + Sync {
    /// Replace the whole table body with `html`.
    fn set_body(&self, html: String);
    fn set_stats(&self, stats: StatsView);
    fn set_last_updated(&self, text: String);
    /// Records behind the rows currently shown.
    fn set_records(&self, records: Vec<Record>);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState {
    /// Inner HTML of the table body.
    pub body: String,
    pub stats: StatsView,
    pub last_updated: String,
    pub rows: Vec<Record>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            body: loading_row(),
            stats: StatsView::placeholder(),
            last_updated: String::new(),
            rows: Vec::new(),
        }
    }
}

/// In-memory page shared between the refresh routine and the web server.
#[derive(Debug, Clone, Default)]
pub struct SharedPage {
    inner: Arc<RwLock<PageState>>,
}

impl SharedPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PageState {
        self.inner.read().unwrap().clone()
    }
}

impl DisplayTarget for SharedPage {
    fn set_body(&self, html: String) {
        self.inner.write().unwrap().body = html;
    }

    fn set_stats(&self, stats: StatsView) {
        self.inner.write().unwrap().stats = stats;
    }

    fn set_last_updated(&self, text: String) {
        self.inner.write().unwrap().last_updated = text;
    }

    fn set_records(&self, records: Vec<Record>) {
        self.inner.write().unwrap().rows = records;
    }
}
