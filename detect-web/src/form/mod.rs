//! Length guard for the detection forms
//!
//! The guard keeps the character counter live, trims the text, and blocks
//! submission when the text is outside the detector's length bounds.

pub mod guard;
pub mod host;
