//! Artifact ingestion — schema boundary for the raw documentation JSON.
//!
//! The generator's output is loosely typed, so each ABI entry is validated
//! individually: an entry that fails to deserialize is skipped and reported
//! as a diagnostic rather than failing the whole artifact. One malformed
//! contract must not block documentation for all the others.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Validated artifact: contract name → contract documentation.
///
/// BTreeMap keeps iteration (and therefore output) deterministic.
pub type DocMap = BTreeMap<String, ContractDoc>;

/// One contract's documentation after per-entry validation.
#[derive(Debug)]
pub struct ContractDoc {
    pub name: String,
    pub title: String,
    pub entries: Vec<AbiEntry>,
}

/// A single ABI member, tagged by its `type` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum AbiEntry {
    #[serde(alias = "constructor")]
    Constructor(ConstructorEntry),
    #[serde(alias = "function")]
    Function(FunctionEntry),
    #[serde(alias = "event")]
    Event(EventEntry),
}

#[derive(Debug, Deserialize)]
pub struct ConstructorEntry {
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default, rename = "return")]
    pub return_comment: Option<String>,
    #[serde(default)]
    pub inputs: Vec<RawParam>,
}

#[derive(Debug, Deserialize)]
pub struct FunctionEntry {
    pub name: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default, rename = "return")]
    pub return_comment: Option<String>,
    #[serde(default)]
    pub constant: bool,
    #[serde(default)]
    pub payable: bool,
    #[serde(default)]
    pub inputs: Vec<RawParam>,
    #[serde(default)]
    pub outputs: Vec<RawParam>,
}

#[derive(Debug, Deserialize)]
pub struct EventEntry {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<RawParam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawParam {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub indexed: bool,
}

/// A data-quality problem found while ingesting or normalizing.
///
/// Diagnostics are reported to the user but never abort the conversion.
#[derive(Debug)]
pub struct Diagnostic {
    pub contract: String,
    pub detail: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.contract, self.detail)
    }
}

/// Shape of the raw artifact before per-entry validation.
#[derive(Debug, Deserialize)]
struct RawContractDoc {
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default, rename = "abiDocs")]
    abi_docs: Vec<serde_json::Value>,
}

/// Parse a raw documentation artifact.
///
/// The top-level structure (contract map, `name`/`title`/`abiDocs` fields)
/// must be well-formed; individual ABI entries are validated tolerantly.
pub fn parse(input: &str) -> Result<(DocMap, Vec<Diagnostic>)> {
    let raw: BTreeMap<String, RawContractDoc> =
        serde_json::from_str(input).context("failed to parse documentation JSON")?;
    Ok(validate(raw))
}

fn validate(raw: BTreeMap<String, RawContractDoc>) -> (DocMap, Vec<Diagnostic>) {
    let mut docs = DocMap::new();
    let mut diagnostics = Vec::new();

    for (contract_name, contract) in raw {
        let mut entries = Vec::with_capacity(contract.abi_docs.len());
        for (index, value) in contract.abi_docs.into_iter().enumerate() {
            match serde_json::from_value::<AbiEntry>(value) {
                Ok(entry) => entries.push(entry),
                Err(err) => diagnostics.push(Diagnostic {
                    contract: contract_name.clone(),
                    detail: format!("skipping abiDocs[{}]: {}", index, err),
                }),
            }
        }
        docs.insert(
            contract_name,
            ContractDoc {
                name: contract.name,
                title: contract.title,
                entries,
            },
        );
    }

    (docs, diagnostics)
}
