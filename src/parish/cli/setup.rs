use clap::{Args, Parser, Subcommand};
use parish::filter::{
    EventSelectors, FilterState, GroupSelectors, MemberSelectors, PostSelectors, UserSelectors,
};
use parish::model::{EventCategory, MemberRole, PostStatus, RecordId, Role};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "parish", bin_name = "parish", version = get_version())]
#[command(about = "Parish community administration from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON seed file to load records from (defaults to the built-in demo data)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Skip delete confirmation
    #[arg(short, long, global = true, help_heading = "Options")]
    pub yes: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage users
    #[command(alias = "u", display_order = 1)]
    Users {
        #[command(flatten)]
        filter: UserFilterArgs,

        #[command(subcommand)]
        action: Option<RecordAction>,
    },

    /// Manage publications
    #[command(alias = "p", display_order = 2)]
    Posts {
        #[command(flatten)]
        filter: PostFilterArgs,

        #[command(subcommand)]
        action: Option<RecordAction>,
    },

    /// Manage pastoral groups
    #[command(alias = "g", display_order = 3)]
    Groups {
        #[command(flatten)]
        filter: GroupFilterArgs,

        #[command(subcommand)]
        action: Option<RecordAction>,
    },

    /// Manage pastoral group members
    #[command(alias = "m", display_order = 4)]
    Members {
        #[command(flatten)]
        filter: MemberFilterArgs,

        #[command(subcommand)]
        action: Option<RecordAction>,
    },

    /// Manage events and their participants
    #[command(alias = "e", display_order = 5)]
    Events {
        #[command(flatten)]
        filter: EventFilterArgs,

        #[command(subcommand)]
        action: Option<EventAction>,
    },

    /// Show record counts for every list
    #[command(display_order = 10)]
    Summary,

    /// Get or set configuration
    #[command(display_order = 11)]
    Config {
        /// Configuration key (e.g., latency-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RecordAction {
    /// List records matching the filter
    #[command(alias = "ls")]
    List,

    /// Delete a record
    #[command(alias = "rm")]
    Delete { id: RecordId },

    /// Flip the record's status
    Toggle { id: RecordId },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum EventAction {
    /// List events matching the filter
    #[command(alias = "ls")]
    List,

    /// Delete an event
    #[command(alias = "rm")]
    Delete { id: RecordId },

    /// Add a participant to an event
    Subscribe { id: RecordId, participant: RecordId },

    /// Remove a participant from an event
    Unsubscribe { id: RecordId, participant: RecordId },
}

#[derive(Args, Debug, Clone, Default)]
pub struct UserFilterArgs {
    /// Search name and email
    #[arg(short, long)]
    pub search: Option<String>,

    /// admin, coordinator or member
    #[arg(long)]
    pub role: Option<Role>,

    /// true or false
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PostFilterArgs {
    /// Search title, content and author
    #[arg(short, long)]
    pub search: Option<String>,

    /// draft or published
    #[arg(long)]
    pub status: Option<PostStatus>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GroupFilterArgs {
    /// Search name, description and coordinator
    #[arg(short, long)]
    pub search: Option<String>,

    /// true or false
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MemberFilterArgs {
    /// Search name and email
    #[arg(short, long)]
    pub search: Option<String>,

    /// Pastoral group id
    #[arg(long)]
    pub group: Option<RecordId>,

    /// coordinator or member
    #[arg(long)]
    pub role: Option<MemberRole>,

    /// true or false
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EventFilterArgs {
    /// Search title, description, location and organizer
    #[arg(short, long)]
    pub search: Option<String>,

    /// liturgical or community
    #[arg(long)]
    pub category: Option<EventCategory>,
}

impl From<UserFilterArgs> for FilterState<UserSelectors> {
    fn from(args: UserFilterArgs) -> Self {
        FilterState::new(
            args.search.unwrap_or_default(),
            UserSelectors {
                role: args.role.into(),
                active: args.active.into(),
            },
        )
    }
}

impl From<PostFilterArgs> for FilterState<PostSelectors> {
    fn from(args: PostFilterArgs) -> Self {
        FilterState::new(
            args.search.unwrap_or_default(),
            PostSelectors {
                status: args.status.into(),
            },
        )
    }
}

impl From<GroupFilterArgs> for FilterState<GroupSelectors> {
    fn from(args: GroupFilterArgs) -> Self {
        FilterState::new(
            args.search.unwrap_or_default(),
            GroupSelectors {
                active: args.active.into(),
            },
        )
    }
}

impl From<MemberFilterArgs> for FilterState<MemberSelectors> {
    fn from(args: MemberFilterArgs) -> Self {
        FilterState::new(
            args.search.unwrap_or_default(),
            MemberSelectors {
                group_id: args.group.into(),
                role: args.role.into(),
                active: args.active.into(),
            },
        )
    }
}

impl From<EventFilterArgs> for FilterState<EventSelectors> {
    fn from(args: EventFilterArgs) -> Self {
        FilterState::new(
            args.search.unwrap_or_default(),
            EventSelectors {
                category: args.category.into(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use parish::filter::Selector;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn filter_flags_become_selectors() {
        let cli = Cli::parse_from([
            "parish", "users", "-s", "maria", "--role", "Coordinator", "--active", "true",
        ]);
        let Some(Commands::Users { filter, action }) = cli.command else {
            panic!("expected users command");
        };
        assert_eq!(action, None);

        let state: FilterState<UserSelectors> = filter.into();
        assert_eq!(state.term, "maria");
        assert_eq!(state.selectors.role, Selector::Is(Role::Coordinator));
        assert_eq!(state.selectors.active, Selector::Is(true));
    }

    #[test]
    fn global_flags_follow_the_action() {
        let cli = Cli::parse_from(["parish", "groups", "--active", "true", "toggle", "4", "--yes"]);
        assert!(cli.yes);
        let Some(Commands::Groups { filter, action }) = cli.command else {
            panic!("expected groups command");
        };
        assert_eq!(action, Some(RecordAction::Toggle { id: 4 }));
        assert_eq!(filter.active, Some(true));
    }

    #[test]
    fn event_subscription_takes_two_ids() {
        let cli = Cli::parse_from(["parish", "events", "subscribe", "2", "7"]);
        let Some(Commands::Events { action, .. }) = cli.command else {
            panic!("expected events command");
        };
        assert_eq!(
            action,
            Some(EventAction::Subscribe {
                id: 2,
                participant: 7
            })
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!(Cli::try_parse_from(["parish", "events", "--category", "sports"]).is_err());
    }
}
