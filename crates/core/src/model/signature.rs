use super::TypeRef;
use crate::error::{Result, StubError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The single abstract method of a functional interface, as resolved by the host.
///
/// `parameter_names` is `None` for synthetic signatures (e.g. methods loaded
/// from a class library without source), in which case rendering derives
/// names from the parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SignatureFields")]
pub struct MethodSignature {
    parameter_types: Vec<TypeRef>,
    parameter_names: Option<Vec<String>>,
    return_type: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interface_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    method_name: Option<String>,
}

/// Wire form of [`MethodSignature`]; deserialized values go through the
/// same name-count check as [`MethodSignature::with_names`].
#[derive(Deserialize)]
struct SignatureFields {
    parameter_types: Vec<TypeRef>,
    #[serde(default)]
    parameter_names: Option<Vec<String>>,
    return_type: TypeRef,
    #[serde(default)]
    interface_name: Option<String>,
    #[serde(default)]
    method_name: Option<String>,
}

impl TryFrom<SignatureFields> for MethodSignature {
    type Error = StubError;

    fn try_from(fields: SignatureFields) -> Result<Self> {
        let mut signature = match fields.parameter_names {
            Some(names) => Self::with_names(fields.parameter_types, names, fields.return_type)?,
            None => Self::synthetic(fields.parameter_types, fields.return_type),
        };
        signature.interface_name = fields.interface_name;
        signature.method_name = fields.method_name;
        Ok(signature)
    }
}

impl MethodSignature {
    /// A signature whose parameter names come from source.
    pub fn with_names(
        parameter_types: Vec<TypeRef>,
        parameter_names: Vec<String>,
        return_type: TypeRef,
    ) -> Result<Self> {
        if parameter_names.len() != parameter_types.len() {
            return Err(StubError::InvalidArgument(format!(
                "{} parameter names supplied for {} parameter types",
                parameter_names.len(),
                parameter_types.len()
            )));
        }
        Ok(Self {
            parameter_types,
            parameter_names: Some(parameter_names),
            return_type,
            interface_name: None,
            method_name: None,
        })
    }

    /// A signature without source-level parameter names.
    pub fn synthetic(parameter_types: Vec<TypeRef>, return_type: TypeRef) -> Self {
        Self {
            parameter_types,
            parameter_names: None,
            return_type,
            interface_name: None,
            method_name: None,
        }
    }

    pub fn named(mut self, interface_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        self.interface_name = Some(interface_name.into());
        self.method_name = Some(method_name.into());
        self
    }

    pub fn parameter_types(&self) -> &[TypeRef] {
        &self.parameter_types
    }

    pub fn parameter_names(&self) -> Option<&[String]> {
        self.parameter_names.as_deref()
    }

    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }

    pub fn arity(&self) -> usize {
        self.parameter_types.len()
    }

    pub fn has_source_names(&self) -> bool {
        self.parameter_names.is_some()
    }

    pub fn returns_void(&self) -> bool {
        self.return_type.is_void()
    }

    pub fn interface_name(&self) -> Option<&str> {
        self.interface_name.as_deref()
    }

    pub fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(interface) = &self.interface_name {
            write!(f, "{}", interface)?;
            if let Some(method) = &self.method_name {
                write!(f, "#{}", method)?;
            }
        }
        f.write_str("(")?;
        for (i, ty) in self.parameter_types.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", ty)?;
            if let Some(name) = self.parameter_names.as_ref().and_then(|n| n.get(i)) {
                write!(f, " {}", name)?;
            }
        }
        write!(f, ") -> {}", self.return_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_name_count() {
        let err = MethodSignature::with_names(
            vec![TypeRef::raw("int"), TypeRef::raw("int")],
            vec!["a".to_string()],
            TypeRef::raw("int"),
        )
        .unwrap_err();
        assert!(matches!(err, StubError::InvalidArgument(_)));
    }

    #[test]
    fn deserializing_checks_the_name_count() {
        let mismatched = serde_json::json!({
            "parameter_types": [
                {"kind": "Raw", "data": "int"},
                {"kind": "Raw", "data": "int"}
            ],
            "parameter_names": ["a"],
            "return_type": {"kind": "Raw", "data": "int"}
        });
        let err = serde_json::from_value::<MethodSignature>(mismatched).unwrap_err();
        assert!(err.to_string().contains("1 parameter names supplied for 2 parameter types"));

        let sig = MethodSignature::with_names(
            vec![TypeRef::raw("int")],
            vec!["a".to_string()],
            TypeRef::Void,
        )
        .unwrap()
        .named("IntConsumer", "accept");
        let json = serde_json::to_value(&sig).unwrap();
        assert_eq!(serde_json::from_value::<MethodSignature>(json).unwrap(), sig);
    }

    #[test]
    fn display_includes_names_when_present() {
        let sig = MethodSignature::with_names(
            vec![TypeRef::raw("int"), TypeRef::raw("int")],
            vec!["a".to_string(), "b".to_string()],
            TypeRef::raw("int"),
        )
        .unwrap()
        .named("IntBinaryOperator", "applyAsInt");
        assert_eq!(sig.to_string(), "IntBinaryOperator#applyAsInt(int a, int b) -> int");

        let synthetic = MethodSignature::synthetic(vec![TypeRef::raw("String")], TypeRef::Void);
        assert!(!synthetic.has_source_names());
        assert_eq!(synthetic.to_string(), "(String) -> void");
    }
}
