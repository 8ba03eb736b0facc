//! Core of the syllabus-to-calendar converter.
//!
//! - `item`: syllabus items and their kinds
//! - `calendar`: month grid projection, day grouping, month navigation
//! - `selection`: the set of ticked items
//! - `ingest`: the boundary where dropped files become items
//! - `app`: the controller owning the state that views are computed from

pub mod app;
pub mod calendar;
pub mod config;
pub mod error;
pub mod ingest;
pub mod item;
pub mod kind_style;
pub mod selection;

pub use app::{App, AppState, ViewMode};
pub use error::{SyllabusError, SyllabusResult};
pub use item::{ItemKind, SyllabusItem};
