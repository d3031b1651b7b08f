//! # List Controller
//!
//! One [`ListController`] backs one list view. It owns the authoritative
//! collection for its record kind, the current [`FilterState`], and the
//! filtered view derived from both.
//!
//! ```text
//!   Idle ──load()──▶ Loading ──ok──▶ Ready ◀──┐ filter edit / delete / update
//!                       │              └──────┘
//!                       └──failure──▶ Error(message) ──load()──▶ Loading
//! ```
//!
//! Every mutation re-runs the filter before returning, so the view always
//! reflects the collection as of the latest change. Filter edits and
//! mutations are rejected with [`ParishError::NotReady`] outside `Ready`.
//!
//! Consumers that need to react to changes register an observer with
//! [`ListController::subscribe`]; it receives a [`ListEvent`] after every
//! transition.

use crate::confirm::{ConfirmLabels, ConfirmRequest, ConfirmationGate};
use crate::error::{ParishError, Result};
use crate::failure::{ErrorReporter, Failure};
use crate::filter::{self, FilterState, Filterable};
use crate::model::{RecordId, Toggle};
use crate::source::DataSource;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Idle,
    Loading,
    Ready,
    Error(String),
}

impl fmt::Display for ListState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListState::Idle => f.write_str("idle"),
            ListState::Loading => f.write_str("loading"),
            ListState::Ready => f.write_str("ready"),
            ListState::Error(message) => write!(f, "error: {}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    StateChanged(ListState),
    ViewRefreshed { visible: usize, total: usize },
    Removed(RecordId),
    Updated(RecordId),
}

type Observer = Box<dyn FnMut(&ListEvent) + Send>;

pub struct ListController<R: Filterable, S> {
    source: S,
    reporter: ErrorReporter,
    labels: ConfirmLabels,
    load_timeout: Duration,
    state: ListState,
    records: Vec<R>,
    filter: FilterState<R::Selectors>,
    view: Vec<R>,
    observers: Vec<Observer>,
}

impl<R, S> ListController<R, S>
where
    R: Filterable,
    S: DataSource<R>,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            reporter: ErrorReporter::default(),
            labels: ConfirmLabels::default(),
            load_timeout: DEFAULT_LOAD_TIMEOUT,
            state: ListState::Idle,
            records: Vec::new(),
            filter: FilterState::default(),
            view: Vec::new(),
            observers: Vec::new(),
        }
    }

    pub fn with_reporter(mut self, reporter: ErrorReporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn with_labels(mut self, labels: ConfirmLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_load_timeout(mut self, timeout: Duration) -> Self {
        self.load_timeout = timeout;
        self
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&ListEvent) + Send + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == ListState::Ready
    }

    /// The authoritative, unfiltered collection.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// The filtered view, in source order.
    pub fn view(&self) -> &[R] {
        &self.view
    }

    pub fn filter(&self) -> &FilterState<R::Selectors> {
        &self.filter
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// `(total, visible)` record counts.
    pub fn counts(&self) -> (usize, usize) {
        (self.records.len(), self.view.len())
    }

    /// Fetch the collection from the data source and reset the filter.
    ///
    /// On failure the controller moves to `Error` with the classified message
    /// and drops any previously loaded records. Calling `load` again retries.
    pub async fn load(&mut self) -> Result<usize> {
        self.set_state(ListState::Loading);
        debug!("Loading {} records", R::KIND);

        let outcome = match tokio::time::timeout(self.load_timeout, self.source.load()).await {
            Ok(result) => result,
            Err(_) => Err(Failure::Network(format!(
                "load timed out after {}ms",
                self.load_timeout.as_millis()
            ))),
        };

        match outcome {
            Ok(records) => {
                info!("Loaded {} {} records", records.len(), R::KIND);
                self.records = records;
                self.filter = FilterState::default();
                self.refilter();
                self.set_state(ListState::Ready);
                Ok(self.records.len())
            }
            Err(failure) => {
                let classified = self.reporter.report(&failure);
                self.records.clear();
                self.view.clear();
                self.set_state(ListState::Error(classified.message.clone()));
                Err(ParishError::Load(classified))
            }
        }
    }

    pub fn set_filter(&mut self, filter: FilterState<R::Selectors>) -> Result<()> {
        self.ensure_ready()?;
        self.filter = filter;
        self.refilter();
        Ok(())
    }

    pub fn edit_filter<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut FilterState<R::Selectors>),
    {
        self.ensure_ready()?;
        edit(&mut self.filter);
        self.refilter();
        Ok(())
    }

    pub fn set_term(&mut self, term: impl Into<String>) -> Result<()> {
        let term = term.into();
        self.edit_filter(|filter| filter.term = term)
    }

    /// Remove a record after the gate confirms.
    ///
    /// Returns the removed record, or `None` when the user declined. An
    /// unknown id fails before the gate is asked.
    pub async fn delete<G>(&mut self, id: RecordId, gate: &G) -> Result<Option<R>>
    where
        G: ConfirmationGate + ?Sized,
    {
        self.ensure_ready()?;
        let record = self.get(id).ok_or(ParishError::RecordNotFound { kind: R::KIND, id })?;
        let request = ConfirmRequest::new(
            format!("Excluir {}", R::KIND),
            format!("Tem certeza que deseja excluir \"{}\"?", record.label()),
        )
        .with_labels(self.labels.clone());

        if !gate.confirm(&request).await {
            debug!("Delete of {} {} declined", R::KIND, id);
            return Ok(None);
        }

        let pos = self
            .position(id)
            .ok_or(ParishError::RecordNotFound { kind: R::KIND, id })?;
        let removed = self.records.remove(pos);
        info!("Deleted {} {}", R::KIND, id);
        self.notify(&ListEvent::Removed(id));
        self.refilter();
        Ok(Some(removed))
    }

    /// Mutate one record in place, then re-filter.
    ///
    /// `change` works on a copy that replaces the stored record only when it
    /// returns `Ok`.
    pub fn update<T, F>(&mut self, id: RecordId, change: F) -> Result<T>
    where
        F: FnOnce(&mut R) -> Result<T>,
    {
        self.ensure_ready()?;
        let pos = self
            .position(id)
            .ok_or(ParishError::RecordNotFound { kind: R::KIND, id })?;

        let mut draft = self.records[pos].clone();
        let out = change(&mut draft)?;
        self.records[pos] = draft;

        self.notify(&ListEvent::Updated(id));
        self.refilter();
        Ok(out)
    }

    /// Flip the kind's status field on one record. Returns the updated record.
    pub fn toggle(&mut self, id: RecordId) -> Result<R>
    where
        R: Toggle,
    {
        let record = self.update(id, |record| {
            record.toggle();
            Ok(record.clone())
        })?;
        info!("Toggled {} {} to {}", R::KIND, id, record.status());
        Ok(record)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(ParishError::NotReady {
                kind: R::KIND,
                state: self.state.to_string(),
            })
        }
    }

    fn refilter(&mut self) {
        self.view = filter::apply(&self.records, &self.filter)
            .into_iter()
            .cloned()
            .collect();
        let event = ListEvent::ViewRefreshed {
            visible: self.view.len(),
            total: self.records.len(),
        };
        self.notify(&event);
    }

    fn set_state(&mut self, state: ListState) {
        self.state = state.clone();
        self.notify(&ListEvent::StateChanged(state));
    }

    fn notify(&mut self, event: &ListEvent) {
        for observer in self.observers.iter_mut() {
            observer(event);
        }
    }
}
