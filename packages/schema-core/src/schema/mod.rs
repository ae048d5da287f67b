//! Record schema descriptors.

mod descriptor;

pub use descriptor::SchemaDescriptor;
