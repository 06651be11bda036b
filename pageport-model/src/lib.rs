//! Page-layout model for pageport.
//!
//! Defines the types shared by the schema index and the converter:
//! - [`BlockDefinition`] — the raw block-definition configuration (block type
//!   → attribute metadata), kept as ordered JSON so unknown metadata keys
//!   survive untouched
//! - [`ValueKind`] — the semantic value-kind tag an attribute is declared
//!   with ("embed", "locationlist", ...)
//! - [`LayoutValue`] — opaque wrapper around the live field value as handed
//!   out by the repository
//!
//! The portable hash itself has no dedicated type: it is a plain
//! `serde_json::Value` with the `zones → blocks → attributes` shape, so the
//! tree walker can preserve every byte it does not explicitly substitute.

mod block_definition;
mod kind;
mod layout;

pub use block_definition::BlockDefinition;
pub use kind::ValueKind;
pub use layout::LayoutValue;
