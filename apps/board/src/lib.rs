//! Candidate pipeline board: the Kanban workflow core of the recruitment
//! dashboards. Owns the in-session candidate list, partitions it into stage
//! columns, and turns drag gestures into optimistic stage transitions
//! reconciled against the external Candidate/Application Service.
//!
//! The rendering layer is out of scope: it consumes `pipeline::columns()`
//! and the notice stream, and wires gestures to `pipeline::on_drag_end`.

pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod service;
