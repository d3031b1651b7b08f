//! Record kinds managed by the list views.
//!
//! Every kind is a plain struct with typed fields and a [`RecordId`] that is
//! unique within its kind only: user 1 and group 1 are unrelated records.
//! Behavior lives elsewhere (filtering in [`crate::filter`], subscriptions in
//! [`crate::events`]); the only per-kind mutation defined here is [`Toggle`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type RecordId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    User,
    Post,
    PastoralGroup,
    Member,
    Event,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        RecordKind::User,
        RecordKind::Post,
        RecordKind::PastoralGroup,
        RecordKind::Member,
        RecordKind::Event,
    ];

    /// Singular label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::User => "usuário",
            RecordKind::Post => "publicação",
            RecordKind::PastoralGroup => "pastoral",
            RecordKind::Member => "membro",
            RecordKind::Event => "evento",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record owned by a list view.
pub trait Record: Clone + fmt::Debug + Send + Sync + 'static {
    const KIND: RecordKind;

    fn id(&self) -> RecordId;

    /// Short human-readable name used in messages and confirmation prompts.
    fn label(&self) -> &str;
}

/// The status flip a list view offers for a kind.
pub trait Toggle: Record {
    fn toggle(&mut self);

    /// Current value of the toggled field, as shown to users.
    fn status(&self) -> &'static str;
}

// --- Categorical fields ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Coordinator,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    Published,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Coordinator,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Liturgical,
    Community,
}

macro_rules! text_enum {
    ($ty:ty { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(format!(
                        "invalid value '{}' (expected one of: {})",
                        other,
                        [$($text),+].join(", ")
                    )),
                }
            }
        }
    };
}

text_enum!(Role {
    Admin => "admin",
    Coordinator => "coordinator",
    Member => "member",
});

text_enum!(PostStatus {
    Draft => "draft",
    Published => "published",
});

text_enum!(MemberRole {
    Coordinator => "coordinator",
    Member => "member",
});

text_enum!(EventCategory {
    Liturgical => "liturgical",
    Community => "community",
});

// --- Record kinds ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastoralGroup {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub coordinator: String,
    #[serde(default)]
    pub meeting: String,
    #[serde(alias = "ativa")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub group_id: RecordId,
    pub role: MemberRole,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub category: EventCategory,
    pub organizer: String,
    #[serde(default)]
    pub participants: Vec<RecordId>,
    #[serde(default)]
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Record for User {
    const KIND: RecordKind = RecordKind::User;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Record for Post {
    const KIND: RecordKind = RecordKind::Post;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Record for PastoralGroup {
    const KIND: RecordKind = RecordKind::PastoralGroup;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Record for Member {
    const KIND: RecordKind = RecordKind::Member;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Record for Event {
    const KIND: RecordKind = RecordKind::Event;

    fn id(&self) -> RecordId {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

fn active_label(active: bool) -> &'static str {
    if active {
        "ativo"
    } else {
        "inativo"
    }
}

impl Toggle for User {
    fn toggle(&mut self) {
        self.active = !self.active;
    }

    fn status(&self) -> &'static str {
        active_label(self.active)
    }
}

impl Toggle for Post {
    fn toggle(&mut self) {
        self.status = match self.status {
            PostStatus::Draft => PostStatus::Published,
            PostStatus::Published => PostStatus::Draft,
        };
    }

    fn status(&self) -> &'static str {
        match self.status {
            PostStatus::Draft => "rascunho",
            PostStatus::Published => "publicado",
        }
    }
}

impl Toggle for PastoralGroup {
    fn toggle(&mut self) {
        self.active = !self.active;
    }

    fn status(&self) -> &'static str {
        if self.active {
            "ativa"
        } else {
            "inativa"
        }
    }
}

impl Toggle for Member {
    fn toggle(&mut self) {
        self.active = !self.active;
    }

    fn status(&self) -> &'static str {
        active_label(self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_enums_case_insensitively() {
        assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(
            " published ".parse::<PostStatus>().unwrap(),
            PostStatus::Published
        );
        assert!("bishop".parse::<Role>().is_err());
    }

    #[test]
    fn post_toggle_flips_between_draft_and_published() {
        let mut post = Post {
            id: 1,
            title: "Aviso".into(),
            content: String::new(),
            author: "Pe. José".into(),
            status: PostStatus::Draft,
            created_at: Utc::now(),
        };
        post.toggle();
        assert_eq!(post.status, PostStatus::Published);
        post.toggle();
        assert_eq!(post.status, PostStatus::Draft);
    }

    #[test]
    fn group_accepts_legacy_ativa_field() {
        let json = r#"{"id":4,"name":"Pastoral do Dízimo","description":"","coordinator":"Ana","ativa":false}"#;
        let group: PastoralGroup = serde_json::from_str(json).unwrap();
        assert!(!group.active);
        assert_eq!(group.meeting, "");
    }
}
