//! `Reflect` implementations for standard types

use std::sync::Arc;

use super::markers::ErrorSignal;
use super::type_info::TypeInfo;
use super::Reflect;

macro_rules! impl_reflect_value {
    ($($ty:ty),* $(,)?) => {
        $(impl Reflect for $ty {})*
    };
}

impl_reflect_value!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
    std::path::PathBuf,
    std::time::Duration,
);

impl<T: Reflect> Reflect for Vec<T> {}

impl<T: Reflect> Reflect for Option<T> {}

impl<T: Reflect + ?Sized> Reflect for Arc<T> {}

// Error signals

impl Reflect for anyhow::Error {
    fn type_info() -> TypeInfo {
        TypeInfo::error_signal::<Self>()
    }
}

impl ErrorSignal for anyhow::Error {}

impl Reflect for Box<dyn std::error::Error + Send + Sync> {
    fn type_info() -> TypeInfo {
        TypeInfo::error_signal::<Self>()
    }
}

impl ErrorSignal for Box<dyn std::error::Error + Send + Sync> {}
