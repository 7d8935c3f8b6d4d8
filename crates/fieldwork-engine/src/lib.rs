//! fieldwork-engine
//!
//! The survey-state and navigation engine: response store, progress
//! tracking, category/question navigation, debounced autosave, export, and
//! the [`interview::Interview`] orchestrator that ties them together behind
//! the operations a presentation layer calls.

pub mod autosave;
pub mod error;
pub mod export;
pub mod interview;
pub mod navigation;
pub mod progress;
pub mod responses;

pub use error::SurveyError;
pub use interview::Interview;
