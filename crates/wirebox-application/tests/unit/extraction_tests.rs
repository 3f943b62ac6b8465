//! Provider descriptor extraction tests
//!
//! Scenarios mirror the container's registration cases: plain slots, trailing
//! errors, aggregates on both sides, keyed fields and rejected shapes.

use wirebox_application::extract_provider_descriptor;
use wirebox_domain::{
    Error, ProviderDescriptor, ProviderFn, ProviderInput, ProviderOutput, Result, Signature,
};

use crate::fixtures::{BadOptional, KeyedIn, KeyedOut, StructIn, StructOut};

fn assert_absent(result: Result<ProviderDescriptor>) -> Error {
    let inputs = result.as_ref().ok().map(|d| d.inputs().to_vec());
    let outputs = result.as_ref().ok().map(|d| d.outputs().to_vec());
    assert!(inputs.is_none());
    assert!(outputs.is_none());
    match result {
        Err(e) => e,
        Ok(d) => panic!("Expected extraction to fail, got {d}"),
    }
}

#[test]
fn test_simple_args() {
    let descriptor =
        extract_provider_descriptor(|_x: i32, _y: f64| (String::new(), Vec::<u8>::new()))
            .unwrap();

    assert_eq!(
        descriptor.inputs(),
        &[ProviderInput::of::<i32>(), ProviderInput::of::<f64>()]
    );
    assert_eq!(
        descriptor.outputs(),
        &[ProviderOutput::of::<String>(), ProviderOutput::of::<Vec<u8>>()]
    );
}

#[test]
fn test_simple_args_with_error() {
    let descriptor = extract_provider_descriptor(
        |_x: i32, _y: f64| -> anyhow::Result<(String, Vec<u8>)> { Ok((String::new(), Vec::new())) },
    )
    .unwrap();

    assert_eq!(
        descriptor.inputs(),
        &[ProviderInput::of::<i32>(), ProviderInput::of::<f64>()]
    );
    assert_eq!(
        descriptor.outputs(),
        &[ProviderOutput::of::<String>(), ProviderOutput::of::<Vec<u8>>()]
    );
}

#[test]
fn test_trailing_error_does_not_change_descriptor() {
    let plain = extract_provider_descriptor(|_x: i32| 0_u8).unwrap();
    let boxed = extract_provider_descriptor(
        |_x: i32| -> std::result::Result<u8, Box<dyn std::error::Error + Send + Sync>> { Ok(0) },
    )
    .unwrap();
    let tuple_tail = extract_provider_descriptor(|_x: i32| -> (u8, anyhow::Error) {
        (0, anyhow::anyhow!("unused"))
    })
    .unwrap();

    assert_eq!(plain.inputs(), boxed.inputs());
    assert_eq!(plain.outputs(), boxed.outputs());
    assert_eq!(plain.inputs(), tuple_tail.inputs());
    assert_eq!(plain.outputs(), tuple_tail.outputs());
}

#[test]
fn test_struct_in_and_out() {
    let descriptor = extract_provider_descriptor(
        |_a: f32, _b: StructIn, _c: u8| -> anyhow::Result<(i16, StructOut, i32)> {
            Ok((0, StructOut, 0))
        },
    )
    .unwrap();

    assert_eq!(
        descriptor.inputs(),
        &[
            ProviderInput::of::<f32>(),
            ProviderInput::of::<i32>(),
            ProviderInput::of::<f64>().with_optional(true),
            ProviderInput::of::<u8>(),
        ]
    );
    assert_eq!(
        descriptor.outputs(),
        &[
            ProviderOutput::of::<i16>(),
            ProviderOutput::of::<String>(),
            ProviderOutput::of::<Vec<u8>>(),
            ProviderOutput::of::<i32>(),
        ]
    );
}

#[test]
fn test_error_bad_position() {
    let err = assert_absent(extract_provider_descriptor(
        || -> (anyhow::Error, i32) { (anyhow::anyhow!("unused"), 0) },
    ));

    assert!(matches!(
        err,
        Error::ErrorPositionInvalid {
            position: 0,
            returns: 2,
            ..
        }
    ));
}

#[test]
fn test_bad_optional() {
    let err = assert_absent(extract_provider_descriptor(|_b: BadOptional| 0_i32));

    match err {
        Error::InvalidTagValue {
            field, tag, value, ..
        } => {
            assert_eq!(field, "x");
            assert_eq!(tag, "optional");
            assert_eq!(value, "foo");
        }
        other => panic!("Expected InvalidTagValue error, got {other:?}"),
    }
}

#[test]
fn test_variadic() {
    let signature = Signature::builder("sum")
        .variadic::<f64>()
        .returns::<i32>()
        .build();
    let err = assert_absent(extract_provider_descriptor(ProviderFn::new(signature, ())));

    assert!(matches!(err, Error::InvalidProviderKind { .. }));
}

#[test]
fn test_not_a_function() {
    let err = assert_absent(extract_provider_descriptor(ProviderFn::opaque(42_i32)));

    match err {
        Error::InvalidProviderKind { provider, reason } => {
            assert_eq!(provider, "i32");
            assert!(reason.contains("expected a function"));
        }
        other => panic!("Expected InvalidProviderKind error, got {other:?}"),
    }
}

#[test]
fn test_keyed_input() {
    let descriptor = extract_provider_descriptor(|_k: KeyedIn| 0_i32).unwrap();

    assert_eq!(
        descriptor.inputs(),
        &[ProviderInput::of::<String>().with_key("theKey")]
    );
    assert_eq!(descriptor.outputs(), &[ProviderOutput::of::<i32>()]);
}

#[test]
fn test_keyed_output() {
    let descriptor = extract_provider_descriptor(|_s: String| KeyedOut).unwrap();

    assert_eq!(descriptor.inputs(), &[ProviderInput::of::<String>()]);
    assert_eq!(
        descriptor.outputs(),
        &[ProviderOutput::of::<String>().with_key("theKey")]
    );
}

#[test]
fn test_no_dependencies_is_empty_not_absent() {
    let descriptor = extract_provider_descriptor(|| {}).unwrap();

    assert!(descriptor.inputs().is_empty());
    assert!(descriptor.outputs().is_empty());
}

#[test]
fn test_error_only_return_produces_no_outputs() {
    let descriptor =
        extract_provider_descriptor(|_x: u32| -> anyhow::Result<()> { Ok(()) }).unwrap();

    assert_eq!(descriptor.inputs(), &[ProviderInput::of::<u32>()]);
    assert!(descriptor.outputs().is_empty());
}

#[test]
fn test_extraction_errors_are_classified() {
    let err = assert_absent(extract_provider_descriptor(ProviderFn::opaque("value")));
    assert!(err.is_extraction_error());
}
