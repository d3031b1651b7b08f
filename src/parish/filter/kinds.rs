//! Predicate sets for each record kind.

use super::{Filterable, Selector};
use crate::model::{
    Event, EventCategory, Member, MemberRole, PastoralGroup, Post, PostStatus, RecordId, Role,
    User,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserSelectors {
    pub role: Selector<Role>,
    pub active: Selector<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostSelectors {
    pub status: Selector<PostStatus>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupSelectors {
    pub active: Selector<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberSelectors {
    pub group_id: Selector<RecordId>,
    pub role: Selector<MemberRole>,
    pub active: Selector<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSelectors {
    pub category: Selector<EventCategory>,
}

impl Filterable for User {
    type Selectors = UserSelectors;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn matches_selectors(&self, selectors: &UserSelectors) -> bool {
        selectors.role.matches(&self.role) && selectors.active.matches(&self.active)
    }
}

impl Filterable for Post {
    type Selectors = PostSelectors;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.content.as_str(),
            self.author.as_str(),
        ]
    }

    fn matches_selectors(&self, selectors: &PostSelectors) -> bool {
        selectors.status.matches(&self.status)
    }
}

impl Filterable for PastoralGroup {
    type Selectors = GroupSelectors;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.description.as_str(),
            self.coordinator.as_str(),
        ]
    }

    fn matches_selectors(&self, selectors: &GroupSelectors) -> bool {
        selectors.active.matches(&self.active)
    }
}

impl Filterable for Member {
    type Selectors = MemberSelectors;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn matches_selectors(&self, selectors: &MemberSelectors) -> bool {
        selectors.group_id.matches(&self.group_id)
            && selectors.role.matches(&self.role)
            && selectors.active.matches(&self.active)
    }
}

impl Filterable for Event {
    type Selectors = EventSelectors;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
            self.organizer.as_str(),
        ]
    }

    fn matches_selectors(&self, selectors: &EventSelectors) -> bool {
        selectors.category.matches(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{apply, FilterState};
    use chrono::Utc;

    fn member(id: RecordId, name: &str, group_id: RecordId, role: MemberRole) -> Member {
        Member {
            id,
            name: name.into(),
            email: format!("membro{}@paroquia.org", id),
            phone: String::new(),
            group_id,
            role,
            active: true,
        }
    }

    #[test]
    fn members_filter_by_group_and_role() {
        let members = vec![
            member(1, "Carlos", 1, MemberRole::Coordinator),
            member(2, "Beatriz", 1, MemberRole::Member),
            member(3, "Rafael", 2, MemberRole::Member),
        ];
        let state = FilterState::new(
            "",
            MemberSelectors {
                group_id: Selector::Is(1),
                role: Selector::Is(MemberRole::Member),
                active: Selector::Any,
            },
        );
        let found: Vec<_> = apply(&members, &state).iter().map(|m| m.id).collect();
        assert_eq!(found, vec![2]);
    }

    #[test]
    fn events_search_location_and_organizer() {
        let event = Event {
            id: 1,
            title: "Retiro".into(),
            description: "Retiro de jovens".into(),
            date: Utc::now(),
            location: "Casa de Retiros São Bento".into(),
            category: EventCategory::Community,
            organizer: "Pastoral da Juventude".into(),
            participants: vec![],
            max_participants: Some(30),
            image: None,
        };
        let events = vec![event];

        let by_location = FilterState::<EventSelectors>::with_term("são bento");
        assert_eq!(apply(&events, &by_location).len(), 1);

        let by_organizer = FilterState::<EventSelectors>::with_term("juventude");
        assert_eq!(apply(&events, &by_organizer).len(), 1);

        let liturgical = FilterState::new(
            "",
            EventSelectors {
                category: Selector::Is(EventCategory::Liturgical),
            },
        );
        assert!(apply(&events, &liturgical).is_empty());
    }
}
