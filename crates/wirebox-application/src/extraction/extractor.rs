//! Extraction service

use std::panic::Location;

use tracing::debug;
use wirebox_domain::error::Result;
use wirebox_domain::ports::{IntoProvider, ProviderFn};
use wirebox_domain::value_objects::{ExtractionOptions, ProviderDescriptor, ProviderLocation};

use super::assembler::assemble;

/// Extracts provider descriptors under a fixed set of options
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractionOptions,
}

impl Extractor {
    /// Create an extractor with the given options
    pub fn new(options: ExtractionOptions) -> Self {
        Self { options }
    }

    /// Options in effect
    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    /// Extract the descriptor of `provider`
    ///
    /// The caller's source location is recorded in the descriptor.
    #[track_caller]
    pub fn extract<M, P: IntoProvider<M>>(&self, provider: P) -> Result<ProviderDescriptor> {
        self.extract_at(provider.into_provider(), Location::caller())
    }

    /// Extract the descriptors of several providers, stopping at the first failure
    #[track_caller]
    pub fn extract_all<I>(&self, providers: I) -> Result<Vec<ProviderDescriptor>>
    where
        I: IntoIterator<Item = ProviderFn>,
    {
        let caller = Location::caller();
        providers
            .into_iter()
            .map(|provider| self.extract_at(provider, caller))
            .collect()
    }

    /// Extract the descriptor of `provider` registered at `caller`
    pub fn extract_at(
        &self,
        provider: ProviderFn,
        caller: &'static Location<'static>,
    ) -> Result<ProviderDescriptor> {
        let location = ProviderLocation::new(provider.name().to_string(), caller);

        match assemble(provider, location, &self.options) {
            Ok(descriptor) => {
                debug!(
                    provider = %descriptor.location(),
                    inputs = descriptor.inputs().len(),
                    outputs = descriptor.outputs().len(),
                    "Extracted provider descriptor"
                );
                Ok(descriptor)
            }
            Err(e) => {
                debug!(error = %e, "Provider descriptor extraction failed");
                Err(e)
            }
        }
    }
}
