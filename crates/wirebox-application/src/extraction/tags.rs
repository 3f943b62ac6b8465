//! Tag Parser
//!
//! Interprets the two recognised field tags:
//!
//! | Tag | Absent | Present |
//! |-----|--------|---------|
//! | `optional` | `false` | strict `"true"` / `"false"`, anything else is invalid |
//! | `key` | unkeyed | used verbatim; an empty value means unkeyed |

use std::str::ParseBoolError;

use wirebox_domain::constants::{KEY_TAG, OPTIONAL_TAG};
use wirebox_domain::error::{Error, Result};
use wirebox_domain::reflect::{FieldDef, TypeInfo};

/// Parse an `optional` tag value
pub fn parse_optional(value: Option<&str>) -> std::result::Result<bool, ParseBoolError> {
    value.map_or(Ok(false), str::parse)
}

/// Parse a `key` tag value
pub fn parse_key(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// `optional` flag of an input-aggregate field
pub fn field_optional(owner: &TypeInfo, field: &FieldDef) -> Result<bool> {
    let value = field.tags().lookup(OPTIONAL_TAG);
    parse_optional(value).map_err(|_| {
        Error::invalid_tag_value(
            owner.name(),
            field.name(),
            OPTIONAL_TAG,
            value.unwrap_or_default(),
        )
    })
}

/// `key` qualifier of an aggregate field
pub fn field_key(field: &FieldDef) -> String {
    parse_key(field.tags().lookup(KEY_TAG))
}
