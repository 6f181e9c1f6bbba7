use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while decoding a value or driving a concrete format.
///
/// Encoding has no taxonomy of its own: a well-typed value always
/// serializes, so only the Writer's medium failures appear here.
#[derive(Debug, Error)]
pub enum CodecError {
	/// Underlying medium IO failure on either side.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Option discriminant byte was neither 0 nor 1.
	#[error("invalid option discriminant {tag}")]
	InvalidOptionTag {
		/// Offending discriminant byte.
		tag: u8,
	},
	/// Sum discriminant did not address a declared alternative.
	#[error("variant index out of range: index={index}, limit={limit}")]
	VariantIndexOutOfRange {
		/// Decoded variant index.
		index: u32,
		/// Number of declared alternatives.
		limit: usize,
	},
	/// Decoded code point is not a Unicode scalar value.
	#[error("invalid char code point {value:#x}")]
	InvalidChar {
		/// Offending code point.
		value: u32,
	},
	/// String payload was not valid UTF-8.
	#[error("invalid utf-8: {0}")]
	InvalidUtf8(#[from] std::string::FromUtf8Error),
	/// Wire length does not fit the host `usize`.
	#[error("length overflow: {len}")]
	LengthOverflow {
		/// Declared wire length.
		len: u64,
	},
	/// Fixed array conversion guard. No wire input produces this: a short
	/// stream fails inside the element reads first.
	#[error("fixed array length mismatch: expected={expected}, got={got}")]
	FixedArrayLength {
		/// Statically declared element count.
		expected: usize,
		/// Elements actually produced.
		got: usize,
	},
	/// Format-specific failure with no structured variant.
	#[error("format: {message}")]
	Format {
		/// Format-supplied description.
		message: String,
	},
}
