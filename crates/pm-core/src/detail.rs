//! Detail view state
//!
//! The detail overlay shows one record chosen at the moment it was opened.
//! It keeps that record for its whole lifetime and never touches the
//! navigation engine.

use crate::records::Record;
use tracing::{info, trace};

/// Result of ending a dismiss drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    Dismissed,
    Kept,
}

/// An open detail overlay
#[derive(Debug, Clone)]
pub struct DetailView {
    record: &'static Record,
    dismiss_threshold: f32,
    dismiss_translation: f32,
}

impl DetailView {
    /// Open the overlay on `record`
    pub fn open(record: &'static Record, dismiss_threshold: f32) -> Self {
        info!("Opened detail for #{} {}", record.number, record.name);
        Self {
            record,
            dismiss_threshold,
            dismiss_translation: 0.0,
        }
    }

    /// The record this overlay was opened with
    pub fn record(&self) -> &'static Record {
        self.record
    }

    /// Live horizontal translation of the dismiss gesture
    pub fn dismiss_offset(&self) -> f32 {
        self.dismiss_translation
    }

    /// Start a dismiss drag from rest
    pub fn begin_dismiss(&mut self) {
        self.dismiss_translation = 0.0;
        trace!("Detail dismiss drag started for #{}", self.record.number);
    }

    pub fn update_dismiss(&mut self, translation: f32) {
        // Only a rightward drag moves the overlay
        self.dismiss_translation = translation.max(0.0);
        trace!("Detail dismiss drag at {:.1}", self.dismiss_translation);
    }

    /// Finish the dismiss drag; a rightward drag past the threshold closes
    pub fn end_dismiss(&mut self, translation: f32) -> DetailOutcome {
        self.dismiss_translation = 0.0;
        if translation > self.dismiss_threshold {
            info!("Dismissed detail for #{}", self.record.number);
            DetailOutcome::Dismissed
        } else {
            DetailOutcome::Kept
        }
    }
}
