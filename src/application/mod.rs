//! Application layer: the form step and the confirmation step.
//!
//! The two steps share nothing but the handoff written by
//! [`intake::IntakeService`] and read by [`confirmation::ConfirmationFlow`].

pub mod confirmation;
pub mod intake;
