//! # UsersApp Architecture
//!
//! UsersApp keeps a list of users (name, age) in memory and lets an operator
//! list, add, remove and edit them from an interactive prompt. The list lives
//! for the duration of the process; nothing is persisted.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, cli.rs)                                   │
//! │  - Flags, logging, config, picks a prompter, exit code      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command loop (repl.rs, action.rs, prompt.rs, render.rs)    │
//! │  - Prompts, dispatches actions, prints outcomes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) → Commands (commands/*.rs)                    │
//! │  - Validation and lookup; returns `CmdResult`, never prints │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - `DataStore` trait, `InMemoryStore`                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Outcomes the operator caused (bad input, unknown names, unknown
//! commands) travel as messages inside `CmdResult`, not as errors. The
//! [`error`] type is reserved for I/O and configuration failures.
//!
//! ## Module Overview
//!
//! - [`api`]: `UsersApi`, the entry point for user operations
//! - [`commands`]: list/add/remove/edit logic
//! - [`store`]: storage abstraction and the in-memory implementation
//! - [`model`]: `User`, `UserDraft` and validation
//! - [`message`]: `Message` and the colorized status channel
//! - [`render`]: user table and message output
//! - [`prompt`]: prompt collection (terminal and line based)
//! - [`action`]: action keywords
//! - [`repl`]: the command loop
//! - [`config`]: configuration file
//! - [`error`]: error types

pub mod action;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod message;
pub mod model;
pub mod prompt;
pub mod render;
pub mod repl;
pub mod store;
