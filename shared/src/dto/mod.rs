//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the web front-end and the
//! language-detection backend.
//!
//! ## Module Organization
//!
//! - [`detect`] - Detection requests, responses, and contract constants
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /detect
//! Content-Type: application/x-www-form-urlencoded
//!
//! text=Wie+geht+es+dir+heute
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "language": "de"
//! }
//! ```

pub mod detect;

pub use detect::*;
