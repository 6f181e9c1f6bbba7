use crate::codec::{CodecError, Reader, Result};

/// Reconstruction entry for one declared sum-type alternative: decodes that
/// alternative's payload and wraps it in the sum value.
pub type VariantDecodeFn<T> = fn(&mut dyn Reader) -> Result<T>;

/// Indexed decode table for one sum type.
///
/// Generated code builds one table per concrete sum type as a `static`,
/// listing the per-alternative entries in declared order; the declared order
/// is part of the type's wire identity. The table is immutable once built,
/// so repeated and concurrent decodes share it without locking, and decode
/// dispatch is an O(1) indexed lookup after validation instead of a branch
/// chain driven by the input.
///
/// ```
/// use typewire::codec::{Deserialize, Reader, Result, VariantCases};
///
/// #[derive(Debug, PartialEq)]
/// enum Size {
/// 	Unbounded(()),
/// 	Bounded(u32),
/// }
///
/// fn decode_unbounded(reader: &mut dyn Reader) -> Result<Size> {
/// 	Ok(Size::Unbounded(<()>::deserialize(reader)?))
/// }
///
/// fn decode_bounded(reader: &mut dyn Reader) -> Result<Size> {
/// 	Ok(Size::Bounded(u32::deserialize(reader)?))
/// }
///
/// static SIZE_CASES: VariantCases<Size> = VariantCases::new(&[decode_unbounded, decode_bounded]);
///
/// impl Deserialize for Size {
/// 	fn deserialize<R: Reader + ?Sized>(mut reader: &mut R) -> Result<Self> {
/// 		SIZE_CASES.decode(&mut reader)
/// 	}
/// }
/// ```
pub struct VariantCases<T: 'static> {
	cases: &'static [VariantDecodeFn<T>],
}

impl<T> VariantCases<T> {
	/// Wrap the per-alternative entries, one per alternative in declared
	/// order. Side-effect-free and usable in `static` items.
	pub const fn new(cases: &'static [VariantDecodeFn<T>]) -> Self {
		Self { cases }
	}

	/// Number of declared alternatives.
	pub const fn len(&self) -> usize {
		self.cases.len()
	}

	/// True only for a sum type with no alternatives, which can never
	/// decode.
	pub const fn is_empty(&self) -> bool {
		self.cases.is_empty()
	}

	/// Read a variant index, validate it addresses a declared alternative,
	/// and invoke that alternative's entry.
	pub fn decode(&self, reader: &mut dyn Reader) -> Result<T> {
		let index = reader.read_variant_index()?;
		let case = self
			.cases
			.get(index as usize)
			.ok_or(CodecError::VariantIndexOutOfRange {
				index,
				limit: self.cases.len(),
			})?;
		case(reader)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::VecDeque;

	use super::VariantCases;
	use crate::codec::{CodecError, Deserialize, Reader, Result};

	#[derive(Debug)]
	enum Op {
		VariantIndex(u32),
		Bool(bool),
		U32(u32),
	}

	/// Serves a pre-scripted operation sequence; a read past the end is the
	/// medium-exhaustion case.
	struct ScriptReader {
		ops: VecDeque<Op>,
	}

	impl ScriptReader {
		fn new(ops: Vec<Op>) -> Self {
			Self { ops: ops.into() }
		}

		fn pop(&mut self) -> Result<Op> {
			self.ops.pop_front().ok_or(CodecError::UnexpectedEof {
				at: 0,
				need: 1,
				rem: 0,
			})
		}
	}

	macro_rules! unscripted_reads {
		($($method:ident: $ty:ty),* $(,)?) => {
			$(
				fn $method(&mut self) -> Result<$ty> {
					panic!("{} is not scripted in these tests", stringify!($method))
				}
			)*
		};
	}

	impl Reader for ScriptReader {
		fn read_bool(&mut self) -> Result<bool> {
			match self.pop()? {
				Op::Bool(value) => Ok(value),
				op => panic!("script mismatch: expected Bool, got {op:?}"),
			}
		}

		fn read_u32(&mut self) -> Result<u32> {
			match self.pop()? {
				Op::U32(value) => Ok(value),
				op => panic!("script mismatch: expected U32, got {op:?}"),
			}
		}

		fn read_variant_index(&mut self) -> Result<u32> {
			match self.pop()? {
				Op::VariantIndex(value) => Ok(value),
				op => panic!("script mismatch: expected VariantIndex, got {op:?}"),
			}
		}

		unscripted_reads! {
			read_unit: (),
			read_char: char,
			read_f32: f32,
			read_f64: f64,
			read_u8: u8,
			read_u16: u16,
			read_u64: u64,
			read_u128: u128,
			read_i8: i8,
			read_i16: i16,
			read_i32: i32,
			read_i64: i64,
			read_i128: i128,
			read_str: String,
			read_len: usize,
		}
	}

	#[derive(Debug, PartialEq)]
	enum Sample {
		Flag(bool),
		Count(u32),
	}

	fn decode_flag(reader: &mut dyn Reader) -> Result<Sample> {
		Ok(Sample::Flag(bool::deserialize(reader)?))
	}

	fn decode_count(reader: &mut dyn Reader) -> Result<Sample> {
		Ok(Sample::Count(u32::deserialize(reader)?))
	}

	static SAMPLE_CASES: VariantCases<Sample> = VariantCases::new(&[decode_flag, decode_count]);

	#[test]
	fn in_range_index_invokes_matching_case() {
		let mut reader = ScriptReader::new(vec![Op::VariantIndex(1), Op::U32(42)]);
		let value = SAMPLE_CASES.decode(&mut reader).expect("decode succeeds");
		assert_eq!(value, Sample::Count(42));

		let mut reader = ScriptReader::new(vec![Op::VariantIndex(0), Op::Bool(true)]);
		let value = SAMPLE_CASES.decode(&mut reader).expect("decode succeeds");
		assert_eq!(value, Sample::Flag(true));
	}

	#[test]
	fn index_equal_to_alternative_count_is_rejected() {
		let mut reader = ScriptReader::new(vec![Op::VariantIndex(2)]);
		let err = SAMPLE_CASES.decode(&mut reader).expect_err("index 2 must fail");
		assert!(matches!(
			err,
			CodecError::VariantIndexOutOfRange { index: 2, limit: 2 }
		));
	}

	#[test]
	fn missing_index_propagates_reader_exhaustion() {
		let mut reader = ScriptReader::new(Vec::new());
		let err = SAMPLE_CASES.decode(&mut reader).expect_err("empty stream must fail");
		assert!(matches!(err, CodecError::UnexpectedEof { .. }));
	}

	#[test]
	fn static_table_reports_declared_alternative_count() {
		assert_eq!(SAMPLE_CASES.len(), 2);
		assert!(!SAMPLE_CASES.is_empty());
	}
}
