//! Task management.
//!
//! Tasks are created from form input, classified by keyword on creation,
//! edited, moved between statuses, deleted, and filtered for display. The
//! module follows hexagonal architecture:
//!
//! - Domain types, the classifier, and the filter in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The task store service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
