//! # Shared Detection Contract Library
//!
//! This library defines the contract between the web front-end and the
//! language-detection backend. All DTOs use JSON serialization via `serde`
//! for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the detection API
//!   - **[`dto::detect`]**: Detection request/response DTOs and the
//!     endpoint/form-field contract constants
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::detect::{DETECT_PATH, MODE_PARAM, MODE_MULTI};
//!
//! // The detection form posts to DETECT_PATH; multi-language mode is
//! // selected by appending MODE_PARAM=MODE_MULTI to the action URL.
//! assert_eq!(DETECT_PATH, "/detect");
//! assert_eq!((MODE_PARAM, MODE_MULTI), ("m", "1"));
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
