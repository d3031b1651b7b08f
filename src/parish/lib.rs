//! # Parish Architecture
//!
//! Parish is a **UI-agnostic administration library** for a parish community:
//! users, publications, pastoral groups, their members and events. It is a
//! library that happens to have a CLI client, not the other way around.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, prompts the user       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, one list controller per record kind         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One user-level operation per module                      │
//! │  - Returns CmdResult: records plus leveled messages         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  List Controller (controller.rs)                            │
//! │  - Load lifecycle, filtering, confirmed delete, update      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Sources (source/)                                     │
//! │  - Async DataSource trait                                   │
//! │  - SeedSource, SeedFile, MemorySource (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. The two places that must reach the outside world are seams:
//! [`confirm::ConfirmationGate`] asks the user before a delete, and
//! [`failure::Navigator`] handles the redirect after an expired session.
//! The CLI supplies terminal implementations of both; tests supply fakes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user-level operation
//! - [`controller`]: The generic list controller and its state machine
//! - [`filter`]: Free-text and categorical filtering
//! - [`source`]: Data source abstraction and implementations
//! - [`failure`]: Load failure classification and reporting
//! - [`confirm`]: Confirmation requests and gates
//! - [`events`]: Event subscription rules
//! - [`model`]: Record kinds and their fields
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, rendering and prompts for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod events;
pub mod failure;
pub mod filter;
pub mod model;
pub mod source;
