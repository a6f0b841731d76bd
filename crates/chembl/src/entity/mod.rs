//! ChEMBL entity types.
//!
//! Each entity is an attribute record declared with
//! [`attribute_record!`](crate::attribute_record). Identifier-valued
//! attributes are foreign keys: the cross-reference accessors resolve them
//! through a [`Resolver`](crate::rest::Resolver) each time they are called.

mod assay;
mod bioactivity;
mod compound;
mod target;

pub use assay::Assay;
pub use bioactivity::Bioactivity;
pub use compound::Compound;
pub use target::Target;
