//! Aggregate Flattener
//!
//! Expands one aggregate into field-level entries, in field declaration
//! order. Flattening is single-level: a field whose type is itself an
//! aggregate stays one opaque entry.

use wirebox_domain::error::Result;
use wirebox_domain::reflect::{AggregateInfo, AggregateRole, TypeInfo};
use wirebox_domain::value_objects::{ExtractionOptions, ProviderInput, ProviderOutput};

use super::tags::{field_key, field_optional};
use super::validator::{validate_field_tags, validate_output_field};

/// Expand an input aggregate into provider inputs
pub fn flatten_inputs(
    owner: &TypeInfo,
    aggregate: &AggregateInfo,
    options: &ExtractionOptions,
) -> Result<Vec<ProviderInput>> {
    aggregate
        .fields()
        .iter()
        .map(|field| -> Result<ProviderInput> {
            validate_field_tags(AggregateRole::Input, owner, field, options)?;
            Ok(ProviderInput {
                ty: field.ty().ty(),
                key: field_key(field),
                optional: field_optional(owner, field)?,
            })
        })
        .collect()
}

/// Expand an output aggregate into provider outputs
pub fn flatten_outputs(
    owner: &TypeInfo,
    aggregate: &AggregateInfo,
    options: &ExtractionOptions,
) -> Result<Vec<ProviderOutput>> {
    let fields = aggregate.fields();
    let count = fields.len();
    fields
        .iter()
        .enumerate()
        .map(|(position, field)| -> Result<ProviderOutput> {
            validate_output_field(owner, field, position, count)?;
            validate_field_tags(AggregateRole::Output, owner, field, options)?;
            Ok(ProviderOutput {
                ty: field.ty().ty(),
                key: field_key(field),
            })
        })
        .collect()
}
