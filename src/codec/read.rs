use crate::codec::Result;

/// Abstract decode contract implemented by each concrete wire format.
///
/// Mirror of [`Writer`](crate::codec::Writer): one operation per primitive
/// kind plus [`read_len`](Reader::read_len) and
/// [`read_variant_index`](Reader::read_variant_index). Every operation may
/// fail: malformed bytes, invalid UTF-8, numeric overflow for the target
/// width, or medium exhaustion. `read_len` must agree with the paired
/// `write_len` for any format that claims binary compatibility; that is the
/// format's obligation, not checked here.
pub trait Reader {
	/// Decode the unit marker.
	fn read_unit(&mut self) -> Result<()>;
	/// Decode a boolean.
	fn read_bool(&mut self) -> Result<bool>;
	/// Decode one Unicode scalar value.
	fn read_char(&mut self) -> Result<char>;
	/// Decode an IEEE-754 binary32 float, bit pattern intact.
	fn read_f32(&mut self) -> Result<f32>;
	/// Decode an IEEE-754 binary64 float, bit pattern intact.
	fn read_f64(&mut self) -> Result<f64>;
	/// Decode an unsigned 8-bit integer.
	fn read_u8(&mut self) -> Result<u8>;
	/// Decode an unsigned 16-bit integer.
	fn read_u16(&mut self) -> Result<u16>;
	/// Decode an unsigned 32-bit integer.
	fn read_u32(&mut self) -> Result<u32>;
	/// Decode an unsigned 64-bit integer.
	fn read_u64(&mut self) -> Result<u64>;
	/// Decode an unsigned 128-bit integer as one opaque scalar.
	fn read_u128(&mut self) -> Result<u128>;
	/// Decode a signed 8-bit integer.
	fn read_i8(&mut self) -> Result<i8>;
	/// Decode a signed 16-bit integer.
	fn read_i16(&mut self) -> Result<i16>;
	/// Decode a signed 32-bit integer.
	fn read_i32(&mut self) -> Result<i32>;
	/// Decode a signed 64-bit integer.
	fn read_i64(&mut self) -> Result<i64>;
	/// Decode a signed 128-bit integer as one opaque scalar.
	fn read_i128(&mut self) -> Result<i128>;
	/// Decode UTF-8 text.
	fn read_str(&mut self) -> Result<String>;
	/// Decode a sequence or map element count.
	fn read_len(&mut self) -> Result<usize>;
	/// Decode a sum-type alternative discriminant.
	fn read_variant_index(&mut self) -> Result<u32>;
}

impl<R: Reader + ?Sized> Reader for &mut R {
	fn read_unit(&mut self) -> Result<()> {
		(**self).read_unit()
	}

	fn read_bool(&mut self) -> Result<bool> {
		(**self).read_bool()
	}

	fn read_char(&mut self) -> Result<char> {
		(**self).read_char()
	}

	fn read_f32(&mut self) -> Result<f32> {
		(**self).read_f32()
	}

	fn read_f64(&mut self) -> Result<f64> {
		(**self).read_f64()
	}

	fn read_u8(&mut self) -> Result<u8> {
		(**self).read_u8()
	}

	fn read_u16(&mut self) -> Result<u16> {
		(**self).read_u16()
	}

	fn read_u32(&mut self) -> Result<u32> {
		(**self).read_u32()
	}

	fn read_u64(&mut self) -> Result<u64> {
		(**self).read_u64()
	}

	fn read_u128(&mut self) -> Result<u128> {
		(**self).read_u128()
	}

	fn read_i8(&mut self) -> Result<i8> {
		(**self).read_i8()
	}

	fn read_i16(&mut self) -> Result<i16> {
		(**self).read_i16()
	}

	fn read_i32(&mut self) -> Result<i32> {
		(**self).read_i32()
	}

	fn read_i64(&mut self) -> Result<i64> {
		(**self).read_i64()
	}

	fn read_i128(&mut self) -> Result<i128> {
		(**self).read_i128()
	}

	fn read_str(&mut self) -> Result<String> {
		(**self).read_str()
	}

	fn read_len(&mut self) -> Result<usize> {
		(**self).read_len()
	}

	fn read_variant_index(&mut self) -> Result<u32> {
		(**self).read_variant_index()
	}
}
