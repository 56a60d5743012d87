//! Interactive character creation wizard.
//!
//! The flow is strictly linear: the sequencer asks its questions through a
//! [`LineSource`](source::LineSource), the assembler turns the answers into a
//! `CharacterRecord`, and the writer persists it with a single
//! create-or-truncate write. [`runner::run_wizard`] ties the three together
//! and owns the session for the whole run.

pub mod assembler;
pub mod prompts;
pub mod runner;
pub mod sequencer;
pub mod source;
pub mod writer;
