//! Conversion from validated ABI documentation to the agnostic format.
//!
//! Pure transformation: no I/O, no caching, input is only read. Entries a
//! renderer could not display (a property with no outputs) are skipped with
//! a diagnostic instead of failing the artifact.

use crate::classify::{classify, FunctionKind};
use crate::ingest::{
    AbiEntry, ConstructorEntry, ContractDoc, Diagnostic, DocMap, EventEntry, FunctionEntry,
    RawParam,
};
use crate::model::*;

/// Contracts whose name does not camel-case cleanly get an explicit
/// call-path override. Naive lowering of "ZRXToken" would give "zRXToken".
const CALL_PATH_OVERRIDES: &[(&str, &str)] = &[("ZRXToken", "zrxToken.")];

pub struct Normalized {
    pub docs: DocAgnosticFormat,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert a validated artifact into the agnostic documentation format.
///
/// Every input contract yields exactly one output section, even when the
/// contract has no documented members.
pub fn normalize(docs: &DocMap) -> Normalized {
    let mut out = DocAgnosticFormat::new();
    let mut diagnostics = Vec::new();

    for (contract_name, contract) in docs {
        let mut section = DocSection::new(contract.title.clone());

        for entry in &contract.entries {
            match entry {
                AbiEntry::Constructor(ctor) => {
                    // An ABI has at most one constructor; keep the first.
                    if section.constructors.is_empty() {
                        section.constructors.push(convert_constructor(contract, ctor));
                    }
                }
                AbiEntry::Function(func) => match classify(func) {
                    FunctionKind::Method => {
                        section.methods.push(convert_method(contract_name, func));
                    }
                    FunctionKind::Property => match convert_property(func) {
                        Some(property) => section.properties.push(property),
                        None => diagnostics.push(Diagnostic {
                            contract: contract_name.clone(),
                            detail: format!(
                                "skipping property `{}`: entry has no outputs",
                                func.name
                            ),
                        }),
                    },
                },
                AbiEntry::Event(event) => section.events.push(convert_event(event)),
            }
        }

        out.insert(contract_name.clone(), section);
    }

    Normalized {
        docs: out,
        diagnostics,
    }
}

/// Instance prefix for method invocations, e.g. "Token" → "token.".
pub fn call_path(contract_name: &str) -> String {
    if let Some((_, path)) = CALL_PATH_OVERRIDES
        .iter()
        .find(|(name, _)| *name == contract_name)
    {
        return (*path).to_string();
    }
    let mut chars = contract_name.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_lowercase(), chars.as_str()),
        None => ".".to_string(),
    }
}

fn convert_constructor(contract: &ContractDoc, ctor: &ConstructorEntry) -> ConstructorDoc {
    ConstructorDoc {
        is_constructor: true,
        name: contract.name.clone(),
        comment: ctor.details.clone(),
        return_comment: ctor.return_comment.clone(),
        call_path: String::new(),
        parameters: convert_parameters(&ctor.inputs),
        // Constructing an instance returns an instance of the contract type.
        return_type: TypeRef::intrinsic(contract.name.clone()),
    }
}

fn convert_method(contract_name: &str, func: &FunctionEntry) -> MethodDoc {
    // Methods return at most one value; use the first declared output.
    let return_type = func
        .outputs
        .first()
        .map(|output| TypeRef::intrinsic(output.type_name.clone()));

    MethodDoc {
        is_constructor: false,
        is_constant: func.constant,
        is_payable: func.payable,
        name: func.name.clone(),
        comment: func.details.clone(),
        return_comment: func.return_comment.clone(),
        call_path: call_path(contract_name),
        parameters: convert_parameters(&func.inputs),
        return_type,
    }
}

/// Returns None when the entry has no outputs to derive a type from.
fn convert_property(func: &FunctionEntry) -> Option<PropertyDoc> {
    let mut type_name = func.outputs.first()?.type_name.clone();
    // A property with an input is a mapping accessor; present it as a
    // key → value type.
    if let Some(key) = func.inputs.first() {
        type_name = format!("({} => {})", key.type_name, type_name);
    }

    Some(PropertyDoc {
        name: func.name.clone(),
        type_ref: TypeRef::intrinsic(type_name),
        comment: func.details.clone(),
    })
}

fn convert_event(event: &EventEntry) -> EventDoc {
    EventDoc {
        name: event.name.clone(),
        event_args: event
            .inputs
            .iter()
            .map(|input| EventArgDoc {
                is_indexed: input.indexed,
                name: input.name.clone(),
                type_ref: TypeRef::intrinsic(input.type_name.clone()),
            })
            .collect(),
    }
}

fn convert_parameters(inputs: &[RawParam]) -> Vec<ParamDoc> {
    inputs
        .iter()
        .map(|input| ParamDoc {
            name: input.name.clone(),
            comment: input.description.clone(),
            is_optional: false,
            type_ref: TypeRef::intrinsic(input.type_name.clone()),
        })
        .collect()
}
