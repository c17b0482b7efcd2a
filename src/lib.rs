//! Smart tasks: a task list with keyword-based triage.
//!
//! This crate provides the non-visual core of a task dashboard: an in-memory
//! task store, a classifier that assigns a default priority and category to
//! new tasks, and the filter that decides which tasks a view shows.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task classification, storage, filtering, and notifications

pub mod task;
