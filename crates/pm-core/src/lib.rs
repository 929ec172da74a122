//! Core functionality for the Prime Ministers browser
//! 
//! This crate provides the record store, the navigation engine that owns the
//! single current index, and the pure presentation math every view renders from.

pub mod detail;
pub mod navigation;
pub mod presentation;
pub mod records;
pub mod settings;
pub mod state;

// Re-export commonly used types
pub use detail::{DetailOutcome, DetailView};
pub use navigation::{
    ChangeCause, ContentMode, GestureOutcome, GestureSurface, NavigationChange,
    NavigationContext, NavigationEngine, NavigationSubscriber,
};
pub use records::{Date, Party, PartyFamily, Record, StoreError};
pub use settings::AppSettings;
pub use state::ViewerContext;
