//! Functional interfaces of the JDK.
//!
//! Class libraries carry no parameter names, so signatures built from this
//! catalog are synthetic and rendering derives names from the types.

use crate::types::{binding_args, substitute};
use lambda_stubs_core::{MethodSignature, TypeRef};
use std::collections::HashMap;

#[derive(Debug)]
pub struct CatalogEntry {
    pub fqn: &'static str,
    pub type_params: &'static [&'static str],
    pub method: &'static str,
    /// Either a type parameter or a primitive keyword.
    pub params: &'static [&'static str],
    pub returns: &'static str,
}

macro_rules! entry {
    ($fqn:literal <$($tp:literal),*> $method:literal ($($p:literal),*) -> $ret:literal) => {
        CatalogEntry {
            fqn: $fqn,
            type_params: &[$($tp),*],
            method: $method,
            params: &[$($p),*],
            returns: $ret,
        }
    };
}

pub const JDK_FUNCTIONAL_INTERFACES: &[CatalogEntry] = &[
    entry!("java.lang.Runnable" <> "run" () -> "void"),
    entry!("java.util.concurrent.Callable" <"V"> "call" () -> "V"),
    entry!("java.util.Comparator" <"T"> "compare" ("T", "T") -> "int"),
    entry!("java.util.function.Function" <"T", "R"> "apply" ("T") -> "R"),
    entry!("java.util.function.BiFunction" <"T", "U", "R"> "apply" ("T", "U") -> "R"),
    entry!("java.util.function.UnaryOperator" <"T"> "apply" ("T") -> "T"),
    entry!("java.util.function.BinaryOperator" <"T"> "apply" ("T", "T") -> "T"),
    entry!("java.util.function.Supplier" <"T"> "get" () -> "T"),
    entry!("java.util.function.Consumer" <"T"> "accept" ("T") -> "void"),
    entry!("java.util.function.BiConsumer" <"T", "U"> "accept" ("T", "U") -> "void"),
    entry!("java.util.function.Predicate" <"T"> "test" ("T") -> "boolean"),
    entry!("java.util.function.BiPredicate" <"T", "U"> "test" ("T", "U") -> "boolean"),
    entry!("java.util.function.BooleanSupplier" <> "getAsBoolean" () -> "boolean"),
    entry!("java.util.function.IntFunction" <"R"> "apply" ("int") -> "R"),
    entry!("java.util.function.IntPredicate" <> "test" ("int") -> "boolean"),
    entry!("java.util.function.IntSupplier" <> "getAsInt" () -> "int"),
    entry!("java.util.function.IntConsumer" <> "accept" ("int") -> "void"),
    entry!("java.util.function.IntUnaryOperator" <> "applyAsInt" ("int") -> "int"),
    entry!("java.util.function.IntBinaryOperator" <> "applyAsInt" ("int", "int") -> "int"),
    entry!("java.util.function.ToIntFunction" <"T"> "applyAsInt" ("T") -> "int"),
    entry!("java.util.function.LongFunction" <"R"> "apply" ("long") -> "R"),
    entry!("java.util.function.LongPredicate" <> "test" ("long") -> "boolean"),
    entry!("java.util.function.LongSupplier" <> "getAsLong" () -> "long"),
    entry!("java.util.function.LongUnaryOperator" <> "applyAsLong" ("long") -> "long"),
    entry!("java.util.function.ToLongFunction" <"T"> "applyAsLong" ("T") -> "long"),
    entry!("java.util.function.DoubleFunction" <"R"> "apply" ("double") -> "R"),
    entry!("java.util.function.DoublePredicate" <> "test" ("double") -> "boolean"),
    entry!("java.util.function.DoubleSupplier" <> "getAsDouble" () -> "double"),
    entry!("java.util.function.DoubleUnaryOperator" <> "applyAsDouble" ("double") -> "double"),
    entry!("java.util.function.ToDoubleFunction" <"T"> "applyAsDouble" ("T") -> "double"),
    entry!("java.util.function.ObjIntConsumer" <"T"> "accept" ("T", "int") -> "void"),
];

impl CatalogEntry {
    pub fn simple_name(&self) -> &'static str {
        self.fqn.rsplit('.').next().unwrap_or(self.fqn)
    }

    /// Instantiates the method signature for a use site such as
    /// `Function<String, ? extends Number>`.
    pub fn signature(&self, declared: &TypeRef) -> MethodSignature {
        let args = binding_args(declared, self.type_params.len());
        let bindings: HashMap<&str, TypeRef> =
            self.type_params.iter().copied().zip(args).collect();
        let resolve = |name: &str| match name {
            "void" => TypeRef::Void,
            other => substitute(&TypeRef::raw(other), &bindings),
        };
        MethodSignature::synthetic(
            self.params.iter().map(|p| resolve(*p)).collect(),
            resolve(self.returns),
        )
        .named(self.simple_name(), self.method)
    }
}

pub fn by_fqn(fqn: &str) -> Option<&'static CatalogEntry> {
    JDK_FUNCTIONAL_INTERFACES.iter().find(|e| e.fqn == fqn)
}

/// The entry a simple name would denote if the file makes it visible.
pub fn by_simple_name(name: &str) -> Option<&'static CatalogEntry> {
    JDK_FUNCTIONAL_INTERFACES
        .iter()
        .find(|e| e.simple_name() == name)
}
