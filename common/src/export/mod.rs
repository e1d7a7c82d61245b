//! Export core modules shared by the CLI wrappers.

#[cfg(feature = "excel")]
pub mod excel_core;
