//! Message handlers organized by feature
//!
//! Each sub-module provides handler methods on AnnotationSession.

mod editing;
mod keyboard;
mod surface_events;
mod tick;
