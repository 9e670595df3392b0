//! Spec files bundled with the `nestest` binary.

use crate::loader::FnSpec;

pub mod collections_spec;
pub mod lifecycle;

/// Built-in spec files, in default run order.
pub const BUILTIN: &[FnSpec] = &[
    FnSpec::new("collections", collections_spec::register),
    FnSpec::new("lifecycle", lifecycle::register),
];

pub fn lookup(name: &str) -> Option<&'static FnSpec> {
    BUILTIN.iter().find(|spec| spec.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|spec| spec.name)
}
