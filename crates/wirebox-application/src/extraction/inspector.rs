//! Signature Inspector
//!
//! Enumerates a provider's parameter and return slots, drops the trailing
//! error signal and classifies every remaining slot as a plain value or an
//! aggregate of the role matching its position.

use wirebox_domain::error::Result;
use wirebox_domain::reflect::{AggregateInfo, AggregateRole, TypeInfo};
use wirebox_domain::value_objects::Signature;

use super::validator::{validate_callable_kind, validate_error_position};

/// A classified parameter or return slot
#[derive(Debug, Clone, Copy)]
pub enum Slot {
    /// Single opaque entry
    Value(TypeInfo),
    /// Aggregate expanded in place
    Aggregate(TypeInfo, AggregateInfo),
}

impl Slot {
    /// Classify `ty` for the given position
    ///
    /// Only aggregates whose role matches the position expand; an output
    /// aggregate taken as a parameter is a plain value and vice versa.
    pub fn classify(ty: TypeInfo, position: AggregateRole) -> Self {
        match ty.aggregate_of(position) {
            Some(info) => Self::Aggregate(ty, info),
            None => Self::Value(ty),
        }
    }
}

/// Result of inspecting a provider signature
#[derive(Debug, Clone)]
pub struct InspectedSignature {
    /// Parameter slots in declaration order
    pub params: Vec<Slot>,
    /// Return slots in declaration order, error signal excluded
    pub outputs: Vec<Slot>,
    /// Trailing error signal, if declared
    pub error_signal: Option<TypeInfo>,
}

/// Inspect a provider signature
pub fn inspect(signature: &Signature) -> Result<InspectedSignature> {
    validate_callable_kind(signature)?;
    let error_index = validate_error_position(signature)?;

    let returns = signature.returns();
    let (outputs, error_signal) = match error_index {
        Some(index) => (&returns[..index], Some(returns[index])),
        None => (returns, None),
    };

    Ok(InspectedSignature {
        params: signature
            .params()
            .iter()
            .map(|&ty| Slot::classify(ty, AggregateRole::Input))
            .collect(),
        outputs: outputs
            .iter()
            .map(|&ty| Slot::classify(ty, AggregateRole::Output))
            .collect(),
        error_signal,
    })
}
