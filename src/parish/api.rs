//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns one
//! [`ListController`] per record kind and is the single entry point for every
//! parish operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Routes by kind**: `list::<User>` reaches the users controller
//! - **Returns structured types** (`Result<CmdResult<R>>`)
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! ## Generic Over Catalog
//!
//! `ParishApi<S: Catalog>` is generic over the data source. A [`Catalog`] is
//! anything that can load all five kinds:
//! - Demo and tests: `ParishApi<SeedSource>`
//! - A JSON seed document: `ParishApi<SeedFile>`
//!
//! Each controller gets its own clone of the catalog, so sources should be
//! cheap to clone.

use crate::commands::{self, config::ConfigAction, CmdResult, KindCount};
use crate::config::ParishConfig;
use crate::confirm::ConfirmationGate;
use crate::controller::{ListController, ListEvent};
use crate::error::Result;
use crate::failure::ErrorReporter;
use crate::filter::{EventSelectors, FilterState, Filterable};
use crate::model::{Event, Member, PastoralGroup, Post, RecordId, RecordKind, Toggle, User};
use crate::source::DataSource;
use std::path::PathBuf;
use std::sync::Arc;

pub use crate::commands::{CmdMessage, MessageLevel};

/// A data source for every record kind.
pub trait Catalog:
    DataSource<User>
    + DataSource<Post>
    + DataSource<PastoralGroup>
    + DataSource<Member>
    + DataSource<Event>
    + Clone
{
}

impl<T> Catalog for T where
    T: DataSource<User>
        + DataSource<Post>
        + DataSource<PastoralGroup>
        + DataSource<Member>
        + DataSource<Event>
        + Clone
{
}

/// Access to the controller that backs kind `R`.
pub trait Controls<R: Filterable, S: DataSource<R>> {
    fn controller(&mut self) -> &mut ListController<R, S>;
}

/// The main API facade for parish operations.
pub struct ParishApi<S: Catalog> {
    users: ListController<User, S>,
    posts: ListController<Post, S>,
    groups: ListController<PastoralGroup, S>,
    members: ListController<Member, S>,
    events: ListController<Event, S>,
    config_dir: PathBuf,
}

impl<S: Catalog> ParishApi<S> {
    pub fn new(
        source: S,
        config: &ParishConfig,
        reporter: ErrorReporter,
        config_dir: impl Into<PathBuf>,
    ) -> Self {
        let reporter = reporter.with_login_path(&config.login_path);
        Self {
            users: build(source.clone(), config, &reporter),
            posts: build(source.clone(), config, &reporter),
            groups: build(source.clone(), config, &reporter),
            members: build(source.clone(), config, &reporter),
            events: build(source, config, &reporter),
            config_dir: config_dir.into(),
        }
    }

    /// Register `observer` on every controller. It is told which kind
    /// produced each event.
    pub fn observe<F>(&mut self, observer: F)
    where
        F: Fn(RecordKind, &ListEvent) + Send + Sync + 'static,
    {
        let observer = Arc::new(observer);
        for kind in RecordKind::ALL {
            let observer = Arc::clone(&observer);
            let relay = move |event: &ListEvent| (*observer)(kind, event);
            match kind {
                RecordKind::User => self.users.subscribe(relay),
                RecordKind::Post => self.posts.subscribe(relay),
                RecordKind::PastoralGroup => self.groups.subscribe(relay),
                RecordKind::Member => self.members.subscribe(relay),
                RecordKind::Event => self.events.subscribe(relay),
            }
        }
    }

    pub async fn list<R>(&mut self, filter: FilterState<R::Selectors>) -> Result<CmdResult<R>>
    where
        R: Filterable,
        S: DataSource<R>,
        Self: Controls<R, S>,
    {
        commands::list::run(<Self as Controls<R, S>>::controller(self), filter).await
    }

    pub async fn delete<R, G>(
        &mut self,
        filter: FilterState<R::Selectors>,
        id: RecordId,
        gate: &G,
    ) -> Result<CmdResult<R>>
    where
        R: Filterable,
        S: DataSource<R>,
        G: ConfirmationGate + ?Sized,
        Self: Controls<R, S>,
    {
        let ctl = <Self as Controls<R, S>>::controller(self);
        commands::delete::run(ctl, filter, id, gate).await
    }

    pub async fn toggle<R>(
        &mut self,
        filter: FilterState<R::Selectors>,
        id: RecordId,
    ) -> Result<CmdResult<R>>
    where
        R: Filterable + Toggle,
        S: DataSource<R>,
        Self: Controls<R, S>,
    {
        let ctl = <Self as Controls<R, S>>::controller(self);
        commands::toggle::run(ctl, filter, id).await
    }

    pub async fn subscribe(
        &mut self,
        filter: FilterState<EventSelectors>,
        event_id: RecordId,
        participant: RecordId,
    ) -> Result<CmdResult<Event>> {
        commands::subscribe::subscribe(&mut self.events, filter, event_id, participant).await
    }

    pub async fn unsubscribe(
        &mut self,
        filter: FilterState<EventSelectors>,
        event_id: RecordId,
        participant: RecordId,
    ) -> Result<CmdResult<Event>> {
        commands::subscribe::unsubscribe(&mut self.events, filter, event_id, participant).await
    }

    /// Totals for every kind, in dashboard order.
    pub async fn summary(&mut self) -> Result<Vec<KindCount>> {
        Ok(vec![
            commands::summary::count(&mut self.users).await?,
            commands::summary::count(&mut self.posts).await?,
            commands::summary::count(&mut self.groups).await?,
            commands::summary::count(&mut self.members).await?,
            commands::summary::count(&mut self.events).await?,
        ])
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult<()>> {
        commands::config::run(&self.config_dir, action)
    }
}

fn build<R, S>(source: S, config: &ParishConfig, reporter: &ErrorReporter) -> ListController<R, S>
where
    R: Filterable,
    S: DataSource<R>,
{
    ListController::new(source)
        .with_reporter(reporter.clone())
        .with_labels(config.labels())
        .with_load_timeout(config.load_timeout())
}

macro_rules! controls {
    ($record:ty, $field:ident) => {
        impl<S: Catalog> Controls<$record, S> for ParishApi<S> {
            fn controller(&mut self) -> &mut ListController<$record, S> {
                &mut self.$field
            }
        }
    };
}

controls!(User, users);
controls!(Post, posts);
controls!(PastoralGroup, groups);
controls!(Member, members);
controls!(Event, events);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirm::AlwaysConfirm;
    use crate::filter::{Selector, UserSelectors};
    use crate::source::seed::SeedSource;
    use std::sync::Mutex;

    fn api() -> (ParishApi<SeedSource>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let api = ParishApi::new(
            SeedSource::demo(),
            &ParishConfig::default(),
            ErrorReporter::default(),
            dir.path(),
        );
        (api, dir)
    }

    #[tokio::test]
    async fn list_routes_to_the_kind_controller() {
        let (mut api, _dir) = api();
        let filter = FilterState::new(
            "",
            UserSelectors {
                active: Selector::Is(false),
                ..Default::default()
            },
        );
        let result = api.list::<User>(filter).await.unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].name, "Pedro Oliveira");
    }

    #[tokio::test]
    async fn kinds_keep_separate_state() {
        let (mut api, _dir) = api();
        api.delete::<Post, _>(FilterState::default(), 1, &AlwaysConfirm)
            .await
            .unwrap();

        let counts = api.summary().await.unwrap();
        let posts = counts.iter().find(|c| c.kind == RecordKind::Post).unwrap();
        let users = counts.iter().find(|c| c.kind == RecordKind::User).unwrap();
        assert_eq!(posts.total, 2);
        assert_eq!(users.total, 4);
    }

    #[tokio::test]
    async fn observers_see_events_from_every_kind() {
        let (mut api, _dir) = api();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        api.observe(move |kind, event| {
            if let ListEvent::Updated(id) = event {
                sink.lock().unwrap().push((kind, *id));
            }
        });

        api.toggle::<PastoralGroup>(FilterState::default(), 4)
            .await
            .unwrap();
        api.subscribe(FilterState::default(), 2, 7).await.unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(RecordKind::PastoralGroup, 4), (RecordKind::Event, 2)]
        );
    }

    #[test]
    fn config_uses_the_api_directory() {
        let (api, dir) = api();
        api.config(ConfigAction::Set("latency-ms".into(), "0".into()))
            .unwrap();
        assert!(dir.path().join("config.json").exists());
    }
}
