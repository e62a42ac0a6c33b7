//! Application constants

/// Bounds on the detection text, in characters. Shorter samples do not carry
/// enough n-grams for a reliable guess; longer ones are rejected by the
/// backend anyway.
pub const MIN_DETECT_CHARS: usize = 10;
pub const MAX_DETECT_CHARS: usize = 5000;

// Element id prefixes for the two detection forms. Each form derives its
// input/error/counter/form ids from its prefix.
pub const SINGLE_FORM_PREFIX: &str = "detect";
pub const MULTI_FORM_PREFIX: &str = "detect-multi";
