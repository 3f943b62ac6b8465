//! Domain layer constants
//!
//! Tag names recognised on aggregate fields and limits of the callable port.

// ============================================================================
// FIELD TAG CONSTANTS
// ============================================================================

/// Tag marking an input-aggregate field as optional (`"true"` / `"false"`)
pub const OPTIONAL_TAG: &str = "optional";

/// Tag qualifying an aggregate field with a key
pub const KEY_TAG: &str = "key";

/// Tag names understood by the tag parser
pub const RECOGNIZED_TAGS: [&str; 2] = [OPTIONAL_TAG, KEY_TAG];

// ============================================================================
// CALLABLE CONSTANTS
// ============================================================================

/// Maximum number of parameters (and tuple returns) supported for plain closures
pub const MAX_PROVIDER_ARITY: usize = 12;
