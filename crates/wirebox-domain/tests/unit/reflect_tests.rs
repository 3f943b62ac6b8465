//! Static reflection contract tests

use std::collections::HashSet;
use std::sync::Arc;

use wirebox_domain::{
    AggregateRole, FieldDef, FieldTags, Reflect, ReturnTypes, TypeInfo, TypeKind, TypeRef,
};

struct Settings;

impl Reflect for Settings {}

struct SettingsIn;

impl Reflect for SettingsIn {
    fn type_info() -> TypeInfo {
        TypeInfo::aggregate::<Self>(AggregateRole::Input, || {
            vec![
                FieldDef::of::<Settings>("settings"),
                FieldDef::of::<String>("name").with_tag("key", "primary"),
            ]
        })
    }
}

fn return_refs<R: ReturnTypes>() -> Vec<TypeRef> {
    R::return_types().iter().map(TypeInfo::ty).collect()
}

#[test]
fn test_type_ref_identity() {
    assert_eq!(TypeRef::of::<i32>(), TypeRef::of::<i32>());
    assert_ne!(TypeRef::of::<i32>(), TypeRef::of::<u32>());
    assert_eq!(TypeRef::of::<String>().name(), "alloc::string::String");
    assert_eq!(TypeRef::of::<Vec<u8>>().to_string(), "alloc::vec::Vec<u8>");

    let set: HashSet<TypeRef> = [TypeRef::of::<u8>(), TypeRef::of::<u8>(), TypeRef::of::<i8>()]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_standard_types_are_values() {
    assert!(matches!(<i64 as Reflect>::type_info().kind(), TypeKind::Value));
    assert!(matches!(<Option<String> as Reflect>::type_info().kind(), TypeKind::Value));
    assert!(matches!(<Arc<Settings> as Reflect>::type_info().kind(), TypeKind::Value));
    assert!(matches!(Settings::type_info().kind(), TypeKind::Value));
}

#[test]
fn test_error_signals() {
    assert!(<anyhow::Error as Reflect>::type_info().is_error_signal());
    assert!(
        <Box<dyn std::error::Error + Send + Sync> as Reflect>::type_info().is_error_signal()
    );
    assert!(!<String as Reflect>::type_info().is_error_signal());
}

#[test]
fn test_aggregate_role_lookup() {
    let info = SettingsIn::type_info();
    assert!(info.aggregate_of(AggregateRole::Output).is_none());

    let aggregate = info
        .aggregate_of(AggregateRole::Input)
        .expect("input aggregate");
    assert_eq!(aggregate.role(), AggregateRole::Input);

    let fields = aggregate.fields();
    let names: Vec<&str> = fields.iter().map(FieldDef::name).collect();
    assert_eq!(names, ["settings", "name"]);
    assert_eq!(fields[1].tags().lookup("key"), Some("primary"));
    assert_eq!(fields[0].ty(), Settings::type_info());
}

#[test]
fn test_field_tags_keep_order_and_first_match() {
    static TAGS: [(&str, &str); 3] = [("key", "a"), ("json", "x"), ("key", "b")];
    let tags = FieldTags::from(&TAGS[..]);

    assert_eq!(tags.len(), 3);
    assert_eq!(tags.lookup("key"), Some("a"));
    assert_eq!(tags.lookup("optional"), None);
    let names: Vec<&str> = tags.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["key", "json", "key"]);
    assert!(FieldTags::new().is_empty());
}

#[test]
fn test_return_enumeration() {
    assert!(return_refs::<()>().is_empty());
    assert_eq!(return_refs::<i32>(), [TypeRef::of::<i32>()]);
    assert_eq!(
        return_refs::<(i32, String, u8)>(),
        [TypeRef::of::<i32>(), TypeRef::of::<String>(), TypeRef::of::<u8>()]
    );
    assert_eq!(
        return_refs::<anyhow::Result<(i32, String)>>(),
        [
            TypeRef::of::<i32>(),
            TypeRef::of::<String>(),
            TypeRef::of::<anyhow::Error>()
        ]
    );
    assert_eq!(
        return_refs::<anyhow::Result<()>>(),
        [TypeRef::of::<anyhow::Error>()]
    );
}

#[test]
fn test_role_display() {
    assert_eq!(AggregateRole::Input.to_string(), "input");
    assert_eq!(AggregateRole::Output.to_string(), "output");
}
