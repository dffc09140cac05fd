// src/refresh/mod.rs

pub mod state;

pub use state::RefreshState;

use crate::{
    fetch::Source,
    process::parse_csv,
    render::{apply_view, build_view, html, DisplayTarget, TableView},
};
use chrono::Local;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{error, info, instrument};

/// One fetch → parse → render routine, shared by the timer and manual
/// triggers. Concurrent calls are not serialised: whichever finishes last
/// owns the display.
pub struct Refresher<S, D> {
    source: S,
    display: D,
    state: Mutex<RefreshState>,
}

impl<S: Source, D: DisplayTarget> Refresher<S, D> {
    pub fn new(source: S, display: D) -> Self {
        Self {
            source,
            display,
            state: Mutex::new(RefreshState::Idle),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn state(&self) -> RefreshState {
        *self.state.lock().unwrap()
    }

    fn set_state(&self, next: RefreshState) {
        *self.state.lock().unwrap() = next;
    }

    /// Blank the table with the loading row. Manual refreshes do this
    /// before fetching; timer refreshes leave the old content up.
    pub fn show_loading(&self) {
        self.set_state(RefreshState::Loading);
        self.display.set_body(html::loading_row());
    }

    /// Timer path.
    #[instrument(level = "info", skip(self))]
    pub async fn refresh(&self) -> RefreshState {
        self.set_state(RefreshState::Loading);

        let outcome = match self.source.fetch().await {
            Ok(text) => {
                let records = parse_csv(&text);
                let view = build_view(&records);
                apply_view(&view, &self.display, Local::now());
                match view {
                    TableView::Empty => {
                        info!("no matching rows");
                        RefreshState::EmptyShown
                    }
                    TableView::Rows { .. } => {
                        info!(records = records.len(), "rendered");
                        RefreshState::Rendered
                    }
                }
            }
            Err(e) => {
                error!(error = %e, status = ?e.status(), "data load failed");
                self.display.set_body(html::error_row(e.user_message()));
                RefreshState::ErrorShown
            }
        };

        self.set_state(outcome);
        outcome
    }

    /// User-triggered path: loading row first, then the shared routine.
    pub async fn manual_refresh(&self) -> RefreshState {
        self.show_loading();
        self.refresh().await
    }
}

/// Owns the refresher and the handle of its periodic timer. Dropping the
/// controller stops the timer; an in-flight fetch is not cancelled by a
/// manual trigger.
pub struct Controller<S, D> {
    refresher: Arc<Refresher<S, D>>,
    timer: Option<JoinHandle<()>>,
}

impl<S, D> Controller<S, D>
where
    S: Source + 'static,
    D: DisplayTarget + 'static,
{
    pub fn new(refresher: Refresher<S, D>) -> Self {
        Self {
            refresher: Arc::new(refresher),
            timer: None,
        }
    }

    pub fn refresher(&self) -> &Arc<Refresher<S, D>> {
        &self.refresher
    }

    /// Refresh now, then every `period`. Each timer cycle completes before
    /// the next tick is awaited. Restarts the timer if already running.
    pub fn start(&mut self, period: Duration) {
        self.stop();
        let refresher = Arc::clone(&self.refresher);
        info!(period_secs = period.as_secs(), "starting refresh timer");
        self.timer = Some(tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                refresher.refresh().await;
            }
        }));
    }

    /// Show the loading row right away and run a refresh in the background.
    pub fn trigger_manual(&self) -> JoinHandle<RefreshState> {
        spawn_manual(Arc::clone(&self.refresher))
    }

    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
            info!("refresh timer stopped");
        }
    }
}

impl<S, D> Drop for Controller<S, D> {
    fn drop(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}

/// Manual refresh on a shared refresher; the loading row is set before this
/// returns.
pub fn spawn_manual<S, D>(refresher: Arc<Refresher<S, D>>) -> JoinHandle<RefreshState>
where
    S: Source + 'static,
    D: DisplayTarget + 'static,
{
    refresher.show_loading();
    tokio::spawn(async move { refresher.refresh().await })
}
