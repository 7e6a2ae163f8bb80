//! Domain types for code conversion.

mod catalog;
mod conversion;

pub use catalog::ModelCatalog;
pub use conversion::{
    ConversionRequest, ConversionResult, ConversionStatus, DEFAULT_TARGET_FLAVOR,
    EMPTY_SOURCE_MESSAGE, TIMEOUT_MESSAGE, ValidationError,
};
