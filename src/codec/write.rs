use crate::codec::Result;

/// Abstract encode contract implemented by each concrete wire format.
///
/// One operation per primitive kind of the value model, plus two framing
/// operations: [`write_len`](Writer::write_len) before sequence and map
/// elements, and [`write_variant_index`](Writer::write_variant_index) before
/// a sum-type payload. Implementations must not do anything beyond advancing
/// their underlying medium; any failure is a medium failure.
pub trait Writer {
	/// Encode the unit marker.
	fn write_unit(&mut self) -> Result<()>;
	/// Encode a boolean.
	fn write_bool(&mut self, value: bool) -> Result<()>;
	/// Encode one Unicode scalar value.
	fn write_char(&mut self, value: char) -> Result<()>;
	/// Encode an IEEE-754 binary32 float, bit pattern intact.
	fn write_f32(&mut self, value: f32) -> Result<()>;
	/// Encode an IEEE-754 binary64 float, bit pattern intact.
	fn write_f64(&mut self, value: f64) -> Result<()>;
	/// Encode an unsigned 8-bit integer.
	fn write_u8(&mut self, value: u8) -> Result<()>;
	/// Encode an unsigned 16-bit integer.
	fn write_u16(&mut self, value: u16) -> Result<()>;
	/// Encode an unsigned 32-bit integer.
	fn write_u32(&mut self, value: u32) -> Result<()>;
	/// Encode an unsigned 64-bit integer.
	fn write_u64(&mut self, value: u64) -> Result<()>;
	/// Encode an unsigned 128-bit integer as one opaque scalar.
	fn write_u128(&mut self, value: u128) -> Result<()>;
	/// Encode a signed 8-bit integer.
	fn write_i8(&mut self, value: i8) -> Result<()>;
	/// Encode a signed 16-bit integer.
	fn write_i16(&mut self, value: i16) -> Result<()>;
	/// Encode a signed 32-bit integer.
	fn write_i32(&mut self, value: i32) -> Result<()>;
	/// Encode a signed 64-bit integer.
	fn write_i64(&mut self, value: i64) -> Result<()>;
	/// Encode a signed 128-bit integer as one opaque scalar.
	fn write_i128(&mut self, value: i128) -> Result<()>;
	/// Encode UTF-8 text; the length on the wire is a byte count.
	fn write_str(&mut self, value: &str) -> Result<()>;
	/// Encode a sequence or map element count.
	fn write_len(&mut self, len: usize) -> Result<()>;
	/// Encode a sum-type alternative discriminant.
	fn write_variant_index(&mut self, index: u32) -> Result<()>;
}

impl<W: Writer + ?Sized> Writer for &mut W {
	fn write_unit(&mut self) -> Result<()> {
		(**self).write_unit()
	}

	fn write_bool(&mut self, value: bool) -> Result<()> {
		(**self).write_bool(value)
	}

	fn write_char(&mut self, value: char) -> Result<()> {
		(**self).write_char(value)
	}

	fn write_f32(&mut self, value: f32) -> Result<()> {
		(**self).write_f32(value)
	}

	fn write_f64(&mut self, value: f64) -> Result<()> {
		(**self).write_f64(value)
	}

	fn write_u8(&mut self, value: u8) -> Result<()> {
		(**self).write_u8(value)
	}

	fn write_u16(&mut self, value: u16) -> Result<()> {
		(**self).write_u16(value)
	}

	fn write_u32(&mut self, value: u32) -> Result<()> {
		(**self).write_u32(value)
	}

	fn write_u64(&mut self, value: u64) -> Result<()> {
		(**self).write_u64(value)
	}

	fn write_u128(&mut self, value: u128) -> Result<()> {
		(**self).write_u128(value)
	}

	fn write_i8(&mut self, value: i8) -> Result<()> {
		(**self).write_i8(value)
	}

	fn write_i16(&mut self, value: i16) -> Result<()> {
		(**self).write_i16(value)
	}

	fn write_i32(&mut self, value: i32) -> Result<()> {
		(**self).write_i32(value)
	}

	fn write_i64(&mut self, value: i64) -> Result<()> {
		(**self).write_i64(value)
	}

	fn write_i128(&mut self, value: i128) -> Result<()> {
		(**self).write_i128(value)
	}

	fn write_str(&mut self, value: &str) -> Result<()> {
		(**self).write_str(value)
	}

	fn write_len(&mut self, len: usize) -> Result<()> {
		(**self).write_len(len)
	}

	fn write_variant_index(&mut self, index: u32) -> Result<()> {
		(**self).write_variant_index(index)
	}
}
