//! Validator
//!
//! Structural checks shared by the inspector and the flattener. Each check
//! fails fast with one of the extraction error kinds.

use wirebox_domain::constants::{OPTIONAL_TAG, RECOGNIZED_TAGS};
use wirebox_domain::error::{Error, Result};
use wirebox_domain::reflect::{AggregateRole, FieldDef, TypeInfo};
use wirebox_domain::value_objects::{
    CallableKind, ExtractionOptions, OutputOptionalPolicy, Signature,
};

/// Reject values that are not callables and variadic callables
pub fn validate_callable_kind(signature: &Signature) -> Result<()> {
    match signature.kind() {
        CallableKind::Function => Ok(()),
        CallableKind::Variadic => Err(Error::invalid_provider_kind(
            signature.name(),
            "variadic functions cannot be used as providers",
        )),
        CallableKind::NotCallable => Err(Error::invalid_provider_kind(
            signature.name(),
            "expected a function",
        )),
    }
}

/// Check that the error signal, if any, is the single last return
///
/// Returns the index of the trailing error signal.
pub fn validate_error_position(signature: &Signature) -> Result<Option<usize>> {
    let returns = signature.returns();
    let last = returns.len().checked_sub(1);

    for (position, ret) in returns.iter().enumerate() {
        if ret.is_error_signal() && Some(position) != last {
            return Err(Error::error_position_invalid(
                signature.name(),
                position,
                returns.len(),
            ));
        }
    }

    Ok(last.filter(|&i| returns[i].is_error_signal()))
}

/// Apply the configured tag policies to one aggregate field
pub fn validate_field_tags(
    role: AggregateRole,
    owner: &TypeInfo,
    field: &FieldDef,
    options: &ExtractionOptions,
) -> Result<()> {
    for tag in RECOGNIZED_TAGS {
        if let Some((_, value)) = field
            .tags()
            .iter()
            .filter(|&(name, _)| name == tag)
            .nth(1)
        {
            return Err(Error::invalid_tag_value(owner.name(), field.name(), tag, value));
        }
    }

    if options.deny_unknown_tags {
        if let Some((tag, value)) = field
            .tags()
            .iter()
            .find(|(tag, _)| !RECOGNIZED_TAGS.contains(tag))
        {
            return Err(Error::invalid_tag_value(owner.name(), field.name(), tag, value));
        }
    }

    if role == AggregateRole::Output && options.output_optional == OutputOptionalPolicy::Reject {
        if let Some(value) = field.tags().lookup(OPTIONAL_TAG) {
            return Err(Error::invalid_tag_value(
                owner.name(),
                field.name(),
                OPTIONAL_TAG,
                value,
            ));
        }
    }

    Ok(())
}

/// Reject an error signal declared as an output aggregate field
///
/// Errors travel only as the trailing return of a provider, so a field of an
/// error-signal type has no valid position inside an output aggregate.
pub fn validate_output_field(
    owner: &TypeInfo,
    field: &FieldDef,
    position: usize,
    fields: usize,
) -> Result<()> {
    if field.ty().is_error_signal() {
        return Err(Error::error_position_invalid(owner.name(), position, fields));
    }
    Ok(())
}
