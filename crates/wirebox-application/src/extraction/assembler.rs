//! Descriptor Assembler

use wirebox_domain::error::Result;
use wirebox_domain::ports::ProviderFn;
use wirebox_domain::value_objects::{
    ExtractionOptions, ProviderDescriptor, ProviderInput, ProviderLocation, ProviderOutput,
};

use super::flattener::{flatten_inputs, flatten_outputs};
use super::inspector::{Slot, inspect};

/// Build the descriptor of `provider`
///
/// Aggregates expand in place, so sibling slots keep their relative order.
/// Nothing is returned unless every slot succeeds.
pub fn assemble(
    provider: ProviderFn,
    location: ProviderLocation,
    options: &ExtractionOptions,
) -> Result<ProviderDescriptor> {
    let inspected = inspect(provider.signature())?;

    let mut inputs = Vec::with_capacity(inspected.params.len());
    for slot in &inspected.params {
        match slot {
            Slot::Value(ty) => inputs.push(ProviderInput::new(ty.ty())),
            Slot::Aggregate(owner, aggregate) => {
                inputs.extend(flatten_inputs(owner, aggregate, options)?);
            }
        }
    }

    let mut outputs = Vec::with_capacity(inspected.outputs.len());
    for slot in &inspected.outputs {
        match slot {
            Slot::Value(ty) => outputs.push(ProviderOutput::new(ty.ty())),
            Slot::Aggregate(owner, aggregate) => {
                outputs.extend(flatten_outputs(owner, aggregate, options)?);
            }
        }
    }

    Ok(ProviderDescriptor::new(inputs, outputs, provider, location))
}
