use super::{DataSource, LoadResult};
use crate::failure::Failure;
use crate::model::{
    Event, EventCategory, Member, MemberRole, PastoralGroup, Post, PostStatus, Record, Role, User,
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Every record kind in one document.
///
/// Stored on disk as JSON with one array per kind; missing arrays are empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub groups: Vec<PastoralGroup>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Picks one kind's collection out of a [`SeedData`].
pub trait Seeded: Record {
    fn from_seed(seed: &SeedData) -> &[Self];
}

impl Seeded for User {
    fn from_seed(seed: &SeedData) -> &[Self] {
        &seed.users
    }
}

impl Seeded for Post {
    fn from_seed(seed: &SeedData) -> &[Self] {
        &seed.posts
    }
}

impl Seeded for PastoralGroup {
    fn from_seed(seed: &SeedData) -> &[Self] {
        &seed.groups
    }
}

impl Seeded for Member {
    fn from_seed(seed: &SeedData) -> &[Self] {
        &seed.members
    }
}

impl Seeded for Event {
    fn from_seed(seed: &SeedData) -> &[Self] {
        &seed.events
    }
}

/// Serves every kind from in-memory seed data, with simulated latency.
#[derive(Debug, Clone)]
pub struct SeedSource {
    data: Arc<SeedData>,
    latency: Duration,
}

impl SeedSource {
    pub fn new(data: SeedData) -> Self {
        Self {
            data: Arc::new(data),
            latency: Duration::ZERO,
        }
    }

    pub fn demo() -> Self {
        Self::new(demo())
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl<R: Seeded> DataSource<R> for SeedSource {
    async fn load(&self) -> LoadResult<R> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let records = R::from_seed(&self.data).to_vec();
        debug!("Loaded {} {} records from seed", records.len(), R::KIND);
        Ok(records)
    }
}

/// Serves every kind from a JSON seed document, re-read on each load.
#[derive(Debug, Clone)]
pub struct SeedFile {
    path: PathBuf,
}

impl SeedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> Result<SeedData, Failure> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Failure::status_with_message(500, format!("{}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            Failure::status_with_message(500, format!("{}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl<R: Seeded> DataSource<R> for SeedFile {
    async fn load(&self) -> LoadResult<R> {
        let data = self.read().await?;
        let records = R::from_seed(&data).to_vec();
        debug!(
            "Loaded {} {} records from {}",
            records.len(),
            R::KIND,
            self.path.display()
        );
        Ok(records)
    }
}

static DEMO: Lazy<SeedData> = Lazy::new(build_demo);

/// The demo community shipped with the binary.
pub fn demo() -> SeedData {
    DEMO.clone()
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn user(id: u32, name: &str, email: &str, role: Role, active: bool) -> User {
    User {
        id,
        name: name.into(),
        email: email.into(),
        role,
        active,
        created_at: at(2024, 1 + id, 10, 9, 0),
    }
}

fn group(id: u32, name: &str, description: &str, coordinator: &str, meeting: &str) -> PastoralGroup {
    PastoralGroup {
        id,
        name: name.into(),
        description: description.into(),
        coordinator: coordinator.into(),
        meeting: meeting.into(),
        active: true,
    }
}

fn member(id: u32, name: &str, group_id: u32, role: MemberRole, active: bool) -> Member {
    let handle = name.to_lowercase().replace(' ', ".");
    Member {
        id,
        name: name.into(),
        email: format!("{}@email.com", handle),
        phone: format!("(11) 9{:04}-{:04}", 8000 + id, 1000 * id),
        group_id,
        role,
        active,
    }
}

fn build_demo() -> SeedData {
    let users = vec![
        user(1, "João Silva", "joao.silva@paroquia.org.br", Role::Admin, true),
        user(2, "Maria Santos", "maria.santos@paroquia.org.br", Role::Coordinator, true),
        user(3, "Pedro Oliveira", "pedro.oliveira@paroquia.org.br", Role::Member, false),
        user(4, "Ana Costa", "ana.costa@paroquia.org.br", Role::Coordinator, true),
    ];

    let posts = vec![
        Post {
            id: 1,
            title: "Festa Junina 2025".into(),
            content: "Venha participar da nossa festa junina com comidas típicas e quadrilha."
                .into(),
            author: "Maria Santos".into(),
            status: PostStatus::Published,
            created_at: at(2025, 5, 2, 14, 30),
        },
        Post {
            id: 2,
            title: "Campanha do Agasalho".into(),
            content: "Doe roupas e cobertores na secretaria paroquial.".into(),
            author: "Ana Costa".into(),
            status: PostStatus::Published,
            created_at: at(2025, 5, 20, 10, 0),
        },
        Post {
            id: 3,
            title: "Horários da Semana Santa".into(),
            content: "Confira a programação completa das celebrações.".into(),
            author: "João Silva".into(),
            status: PostStatus::Draft,
            created_at: at(2025, 3, 28, 18, 15),
        },
    ];

    let mut groups = vec![
        group(
            1,
            "Pastoral da Juventude",
            "Evangelização e formação de jovens",
            "Lucas Ferreira",
            "Sábados, 19h",
        ),
        group(
            2,
            "Pastoral Familiar",
            "Acompanhamento de casais e famílias",
            "Carla Mendes",
            "Quintas, 20h",
        ),
        group(
            3,
            "Pastoral da Criança",
            "Cuidado e catequese infantil",
            "Tiago Rocha",
            "Domingos, 9h",
        ),
        group(
            4,
            "Pastoral do Dízimo",
            "Conscientização e gestão do dízimo",
            "Ana Costa",
            "Primeira terça do mês, 19h30",
        ),
    ];
    groups[3].active = false;

    let members = vec![
        member(1, "Lucas Ferreira", 1, MemberRole::Coordinator, true),
        member(2, "Beatriz Almeida", 1, MemberRole::Member, true),
        member(3, "Rafael Gomes", 1, MemberRole::Member, false),
        member(4, "Carla Mendes", 2, MemberRole::Coordinator, true),
        member(5, "Tiago Rocha", 3, MemberRole::Coordinator, true),
    ];

    let events = vec![
        Event {
            id: 1,
            title: "Missa de Páscoa".into(),
            description: "Celebração solene da Ressurreição".into(),
            date: at(2025, 4, 20, 10, 0),
            location: "Igreja Matriz".into(),
            category: EventCategory::Liturgical,
            organizer: "Pe. Antônio".into(),
            participants: vec![1, 2, 3],
            max_participants: None,
            image: None,
        },
        Event {
            id: 2,
            title: "Retiro de Jovens".into(),
            description: "Fim de semana de oração e convivência".into(),
            date: at(2025, 5, 17, 8, 0),
            location: "Casa de Retiros Santa Clara".into(),
            category: EventCategory::Community,
            organizer: "Pastoral da Juventude".into(),
            participants: vec![2, 5],
            max_participants: Some(30),
            image: Some("retiro-jovens.jpg".into()),
        },
        Event {
            id: 3,
            title: "Quermesse Paroquial".into(),
            description: "Barracas, música e leilão em prol da reforma".into(),
            date: at(2025, 6, 14, 18, 0),
            location: "Pátio da Igreja".into(),
            category: EventCategory::Community,
            organizer: "Conselho Paroquial".into(),
            participants: vec![1, 4],
            max_participants: Some(2),
            image: None,
        },
    ];

    SeedData {
        users,
        posts,
        groups,
        members,
        events,
    }
}
