//! Extraction options tests

use wirebox_domain::{ExtractionOptions, OutputOptionalPolicy};

#[test]
fn test_defaults_are_lenient() {
    let options = ExtractionOptions::default();
    assert!(!options.deny_unknown_tags);
    assert_eq!(options.output_optional, OutputOptionalPolicy::Ignore);
    assert_eq!(options, ExtractionOptions::new());
}

#[test]
fn test_builder_methods() {
    let options = ExtractionOptions::new()
        .with_deny_unknown_tags(true)
        .with_output_optional(OutputOptionalPolicy::Reject);
    assert!(options.deny_unknown_tags);
    assert_eq!(options.output_optional, OutputOptionalPolicy::Reject);
}

#[test]
fn test_deserialize_partial_table() {
    let options: ExtractionOptions = toml::from_str("output_optional = \"reject\"").unwrap();
    assert!(!options.deny_unknown_tags);
    assert_eq!(options.output_optional, OutputOptionalPolicy::Reject);

    let empty: ExtractionOptions = toml::from_str("").unwrap();
    assert_eq!(empty, ExtractionOptions::default());
}

#[test]
fn test_unknown_policy_is_rejected() {
    let result: Result<ExtractionOptions, _> = toml::from_str("output_optional = \"warn\"");
    assert!(result.is_err());
}

#[test]
fn test_serialize_round_trip() {
    let options = ExtractionOptions::new().with_deny_unknown_tags(true);
    let rendered = toml::to_string(&options).unwrap();
    assert!(rendered.contains("deny_unknown_tags = true"));
    assert!(rendered.contains("output_optional = \"ignore\""));
}
