//! Agnostic documentation model — renderer-independent output schema.
//!
//! Field names serialize in camelCase to match the format consumed by
//! downstream documentation tooling.

use serde::Serialize;
use std::collections::BTreeMap;

/// Normalized documentation: contract name → section.
pub type DocAgnosticFormat = BTreeMap<String, DocSection>;

/// All documented members of a single contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocSection {
    /// Contract-level description (the artifact's `title` field).
    pub comment: String,
    /// At most one entry — a contract ABI has a single constructor.
    pub constructors: Vec<ConstructorDoc>,
    pub methods: Vec<MethodDoc>,
    pub properties: Vec<PropertyDoc>,
    pub events: Vec<EventDoc>,
    /// ABI artifacts carry no standalone type definitions; always empty.
    pub types: Vec<TypeRef>,
}

impl DocSection {
    pub fn new(comment: String) -> Self {
        DocSection {
            comment,
            constructors: Vec::new(),
            methods: Vec::new(),
            properties: Vec::new(),
            events: Vec::new(),
            types: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorDoc {
    pub is_constructor: bool,
    /// The contract's name, not the ABI entry's own name.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_comment: Option<String>,
    /// Always empty — constructors are not invoked through an instance.
    pub call_path: String,
    pub parameters: Vec<ParamDoc>,
    /// Constructing an instance returns the contract type itself.
    pub return_type: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDoc {
    pub is_constructor: bool,
    pub is_constant: bool,
    pub is_payable: bool,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_comment: Option<String>,
    /// Instance prefix shown before the method name, e.g. `token.`
    pub call_path: String,
    pub parameters: Vec<ParamDoc>,
    /// First declared output, if any. Methods return at most one value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDoc {
    pub name: String,
    pub event_args: Vec<EventArgDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventArgDoc {
    pub is_indexed: bool,
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDoc {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Always false — the source ABI has no notion of optional parameters.
    pub is_optional: bool,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

/// A raw ABI type name tagged with a fixed classification.
///
/// No parsing of compound type syntax is performed; the literal type
/// string passes through.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub name: String,
    pub type_doc_type: TypeDocType,
}

impl TypeRef {
    pub fn intrinsic(name: impl Into<String>) -> Self {
        TypeRef {
            name: name.into(),
            type_doc_type: TypeDocType::Intrinsic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum TypeDocType {
    Intrinsic,
}
