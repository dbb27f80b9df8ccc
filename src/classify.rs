//! Method/property classification for Function-typed ABI entries.
//!
//! The generator emits one `Function` entry for both callable methods and
//! auto-generated public-variable accessors, so the distinction is inferred
//! from shape and naming:
//!
//! - an unnamed first input marks an auto-generated accessor (the generator
//!   leaves accessor key parameters unnamed);
//! - an all-caps name marks a constant-style field, e.g. `MAKER_FEE`.
//!
//! Everything else is a callable method. The two outcomes are complementary
//! by construction — every Function entry is exactly one of the two.

use crate::ingest::FunctionEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Method,
    Property,
}

/// Classify a Function-typed ABI entry as a method or a property.
pub fn classify(entry: &FunctionEntry) -> FunctionKind {
    let has_inputs = !entry.inputs.is_empty();
    let first_input_named_if_any = !has_inputs || !entry.inputs[0].name.is_empty();
    let is_name_all_caps = entry.name == entry.name.to_uppercase();

    if first_input_named_if_any && !is_name_all_caps {
        FunctionKind::Method
    } else {
        FunctionKind::Property
    }
}
