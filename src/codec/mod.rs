mod de;
mod error;
mod read;
mod ser;
mod variant;
mod write;

/// Decode dispatch trait and its value-model impls.
pub use de::Deserialize;
/// Error and result aliases.
pub use error::{CodecError, Result};
/// Abstract per-format decode contract.
pub use read::Reader;
/// Encode dispatch trait and its value-model impls.
pub use ser::Serialize;
/// Per-sum-type decode table machinery.
pub use variant::{VariantCases, VariantDecodeFn};
/// Abstract per-format encode contract.
pub use write::Writer;
