//! Modelos neutrales (Metadata, colecciones por rol, metadata de salida).

pub mod merge;
pub mod metadata;
pub mod output;
pub mod roles;

pub use merge::merge_meta_data;
pub use metadata::Metadata;
pub use output::{FileDescriptor, MetadataTemplate, OutputMetadata};
pub use roles::{FileMap, MetadataMap, RoleMap, RoleMapExt, RoleValue};
