//! Analysis controller
//!
//! Owns the dashboard's transient state (selected company, shown result,
//! in-flight analysis) and the single simulated-latency task.
//!
//! ## State machine
//!
//! ```text
//!   Idle ──select──▶ Selected ──analyze──▶ Busy ──completion──▶ Shown
//!                                            ▲                    │
//!                                            └──────analyze───────┘
//! ```
//!
//! The phase is derived from the state rather than stored, so it can never
//! disagree with it. At most one analysis is in flight: `analyze` is a no-op
//! while busy or when nothing is selected.
//!
//! ## Lifetime
//!
//! Each analysis runs as a tokio task that sleeps for the configured latency,
//! looks the record up and sends a [`Completion`] tagged with its ticket.
//! The controller keeps the task's `JoinHandle` and aborts it on drop, and
//! only applies a completion whose ticket matches the analysis in flight.

use chrono::{DateTime, Utc};
use sentiview_store::AnalysisSource;
use sentiview_types::{AnalysisRecord, CompanyEntry};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type CompletionReceiver = mpsc::UnboundedReceiver<Completion>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Selected,
    Busy,
    Shown,
}

/// Result of pressing "Analyze"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    Started { ticket: u64 },
    NoSelection,
    AlreadyRunning,
}

/// Message sent by an analysis task when its latency has elapsed
#[derive(Debug, Clone)]
pub struct Completion {
    ticket: u64,
    company: String,
    record: Option<AnalysisRecord>,
}

impl Completion {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn company(&self) -> &str {
        &self.company
    }
}

struct InFlight {
    ticket: u64,
    company: String,
    handle: JoinHandle<()>,
}

/// Read-only copy of the controller state for presenters
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSnapshot {
    pub phase: Phase,
    pub selected: Option<String>,
    /// Company being analyzed while busy
    pub pending: Option<String>,
    pub result: Option<AnalysisRecord>,
    pub can_analyze: bool,
    pub last_error: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

pub struct Controller {
    source: Arc<dyn AnalysisSource>,
    latency: Duration,
    selected: Option<String>,
    result: Option<AnalysisRecord>,
    in_flight: Option<InFlight>,
    last_error: Option<String>,
    completed_at: Option<DateTime<Utc>>,
    next_ticket: u64,
    tx: mpsc::UnboundedSender<Completion>,
}

impl Controller {
    /// Create a controller and the receiving end of its completion channel.
    ///
    /// The event loop owning the receiver feeds completions back through
    /// [`Controller::apply`].
    pub fn new(
        source: Arc<dyn AnalysisSource>,
        latency: Duration,
    ) -> (Self, CompletionReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            source,
            latency,
            selected: None,
            result: None,
            in_flight: None,
            last_error: None,
            completed_at: None,
            next_ticket: 1,
            tx,
        };
        (controller, rx)
    }

    pub fn companies(&self) -> Vec<CompanyEntry> {
        self.source.companies()
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Change the selected company. `None` or an empty name clears the
    /// selection; a result already on screen stays there.
    pub fn select(&mut self, company: Option<&str>) {
        let company = company.filter(|name| !name.is_empty());
        if self.selected.as_deref() == company {
            return;
        }
        tracing::debug!(company = ?company, "selection changed");
        self.selected = company.map(str::to_string);
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisRecord> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_analyze(&self) -> bool {
        self.selected.is_some() && !self.is_busy()
    }

    pub fn phase(&self) -> Phase {
        if self.is_busy() {
            Phase::Busy
        } else if self.result.is_some() {
            Phase::Shown
        } else if self.selected.is_some() {
            Phase::Selected
        } else {
            Phase::Idle
        }
    }

    /// Start an analysis of the current selection.
    ///
    /// Must be called from within a tokio runtime. The analysis is bound to
    /// the company selected at this moment; changing the selection while busy
    /// does not redirect it.
    pub fn analyze(&mut self) -> AnalyzeOutcome {
        if self.is_busy() {
            return AnalyzeOutcome::AlreadyRunning;
        }
        let Some(company) = self.selected.clone() else {
            return AnalyzeOutcome::NoSelection;
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let latency = self.latency;
        let task_company = company.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let record = source.get(&task_company);
            // Receiver gone means the view was torn down.
            let _ = tx.send(Completion {
                ticket,
                company: task_company,
                record,
            });
        });

        tracing::info!(company = %company, ticket, "analysis started");
        self.in_flight = Some(InFlight {
            ticket,
            company,
            handle,
        });
        AnalyzeOutcome::Started { ticket }
    }

    /// Apply a completion. Returns `false` when it does not belong to the
    /// analysis in flight and was discarded.
    pub fn apply(&mut self, completion: Completion) -> bool {
        let matches = self
            .in_flight
            .as_ref()
            .is_some_and(|f| f.ticket == completion.ticket);
        if !matches {
            tracing::warn!(
                ticket = completion.ticket,
                company = %completion.company,
                "stale completion discarded"
            );
            return false;
        }

        self.in_flight = None;
        self.completed_at = Some(Utc::now());

        match completion.record {
            Some(record) => {
                tracing::info!(
                    company = %record.company_name,
                    sentiment = %record.sentiment,
                    "analysis completed"
                );
                self.last_error = None;
                self.result = Some(record);
            }
            None => {
                let message = format!("Stock code for {} not found.", completion.company);
                tracing::warn!(company = %completion.company, "analysis found no record");
                self.last_error = Some(message);
            }
        }
        true
    }

    /// Wait for the analysis in flight (if any) to complete and apply it.
    pub async fn settle(&mut self, rx: &mut CompletionReceiver) {
        while self.is_busy() {
            match rx.recv().await {
                Some(completion) => {
                    self.apply(completion);
                }
                None => break,
            }
        }
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            phase: self.phase(),
            selected: self.selected.clone(),
            pending: self.in_flight.as_ref().map(|f| f.company.clone()),
            result: self.result.clone(),
            can_analyze: self.can_analyze(),
            last_error: self.last_error.clone(),
            completed_at: self.completed_at,
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            tracing::debug!(ticket = in_flight.ticket, "aborting pending analysis");
            in_flight.handle.abort();
        }
    }
}
