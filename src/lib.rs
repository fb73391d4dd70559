//! Synthetic question/answer dataset about tourism in Indramayu, with every
//! answer written both in Indonesian and in the Indramayu dialect.
//!
//! Pipeline: [`topics::load_topics`] -> [`generate::Generator`] ->
//! [`generate::write_dataset`]. [`validate::validate`] re-checks a written
//! file; [`samples`] and [`preview`] display one.

pub mod answer;
pub mod config;
pub mod error;
pub mod generate;
pub mod preview;
pub mod question;
pub mod record;
pub mod samples;
pub mod topics;
pub mod validate;

pub use error::{Error, Result};
