//! Appointment composition: choosing services for one vehicle visit before
//! anything is written to the store.

pub mod composer;
pub mod errors;

pub use composer::{AppointmentComposer, ComposerState};
pub use errors::WorkflowError;
