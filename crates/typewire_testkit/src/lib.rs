//! Shared test support: a minimal little-endian in-memory wire format.
//!
//! `BinWriter` and `BinReader` implement the codec core's Writer/Reader
//! contracts over a byte buffer: fixed-width little-endian scalars, `u64`
//! length prefixes, `u32` variant indices, chars as validated scalar values,
//! strings as byte-count plus UTF-8 bytes, and a zero-byte unit marker.
//! Tests use the pair as the fixed concrete format the round-trip law is
//! stated against; it is not part of the core contract.

use typewire::codec::{CodecError, Reader, Result, Writer};

/// In-memory little-endian encoder.
pub struct BinWriter {
	buffer: Vec<u8>,
}

impl BinWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self { buffer: Vec::new() }
	}

	/// Consume the writer and return the encoded bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.buffer
	}

	/// Number of bytes written so far.
	pub fn len(&self) -> usize {
		self.buffer.len()
	}

	/// True when nothing has been written.
	pub fn is_empty(&self) -> bool {
		self.buffer.is_empty()
	}
}

impl Default for BinWriter {
	fn default() -> Self {
		Self::new()
	}
}

impl Writer for BinWriter {
	fn write_unit(&mut self) -> Result<()> {
		Ok(())
	}

	fn write_bool(&mut self, value: bool) -> Result<()> {
		self.buffer.push(u8::from(value));
		Ok(())
	}

	fn write_char(&mut self, value: char) -> Result<()> {
		self.write_u32(value as u32)
	}

	fn write_f32(&mut self, value: f32) -> Result<()> {
		self.buffer.extend_from_slice(&value.to_le_bytes());
		Ok(())
	}

	fn write_f64(&mut self, value: f64) -> Result<()> {
		self.buffer.extend_from_slice(&value.to_le_bytes());
		Ok(())
	}

	fn write_u8(&mut self, value: u8) -> Result<()> {
		self.buffer.push(value);
		Ok(())
	}

	fn write_u16(&mut self, value: u16) -> Result<()> {
		self.buffer.extend_from_slice(&value.to_le_bytes());
		Ok(())
	}

	fn write_u32(&mut self, value: u32) -> Result<()> {
		self.buffer.extend_from_slice(&value.to_le_bytes());
		Ok(())
	}

	fn write_u64(&mut self, value: u64) -> Result<()> {
		self.buffer.extend_from_slice(&value.to_le_bytes());
		Ok(())
	}

	fn write_u128(&mut self, value: u128) -> Result<()> {
		self.buffer.extend_from_slice(&value.to_le_bytes());
		Ok(())
	}

	fn write_i8(&mut self, value: i8) -> Result<()> {
		self.buffer.push(value as u8);
		Ok(())
	}

	fn write_i16(&mut self, value: i16) -> Result<()> {
		self.buffer.extend_from_slice(&value.to_le_bytes());
		Ok(())
	}

	fn write_i32(&mut self, value: i32) -> Result<()> {
		self.buffer.extend_from_slice(&value.to_le_bytes());
		Ok(())
	}

	fn write_i64(&mut self, value: i64) -> Result<()> {
		self.buffer.extend_from_slice(&value.to_le_bytes());
		Ok(())
	}

	fn write_i128(&mut self, value: i128) -> Result<()> {
		self.buffer.extend_from_slice(&value.to_le_bytes());
		Ok(())
	}

	fn write_str(&mut self, value: &str) -> Result<()> {
		self.write_len(value.len())?;
		self.buffer.extend_from_slice(value.as_bytes());
		Ok(())
	}

	fn write_len(&mut self, len: usize) -> Result<()> {
		self.write_u64(len as u64)
	}

	fn write_variant_index(&mut self, index: u32) -> Result<()> {
		self.write_u32(index)
	}
}

/// Bounded little-endian decoder over an immutable byte slice.
pub struct BinReader<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> BinReader<'a> {
	/// Create a reader at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	fn take(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(CodecError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.take(N)?;
		let mut buf = [0_u8; N];
		buf.copy_from_slice(raw);
		Ok(buf)
	}
}

impl Reader for BinReader<'_> {
	fn read_unit(&mut self) -> Result<()> {
		Ok(())
	}

	fn read_bool(&mut self) -> Result<bool> {
		match self.take(1)?[0] {
			0 => Ok(false),
			1 => Ok(true),
			byte => Err(CodecError::Format {
				message: format!("invalid bool byte {byte}"),
			}),
		}
	}

	fn read_char(&mut self) -> Result<char> {
		let value = self.read_u32()?;
		char::from_u32(value).ok_or(CodecError::InvalidChar { value })
	}

	fn read_f32(&mut self) -> Result<f32> {
		Ok(f32::from_le_bytes(self.take_array()?))
	}

	fn read_f64(&mut self) -> Result<f64> {
		Ok(f64::from_le_bytes(self.take_array()?))
	}

	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.take(1)?[0])
	}

	fn read_u16(&mut self) -> Result<u16> {
		Ok(u16::from_le_bytes(self.take_array()?))
	}

	fn read_u32(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.take_array()?))
	}

	fn read_u64(&mut self) -> Result<u64> {
		Ok(u64::from_le_bytes(self.take_array()?))
	}

	fn read_u128(&mut self) -> Result<u128> {
		Ok(u128::from_le_bytes(self.take_array()?))
	}

	fn read_i8(&mut self) -> Result<i8> {
		Ok(self.take(1)?[0] as i8)
	}

	fn read_i16(&mut self) -> Result<i16> {
		Ok(i16::from_le_bytes(self.take_array()?))
	}

	fn read_i32(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.take_array()?))
	}

	fn read_i64(&mut self) -> Result<i64> {
		Ok(i64::from_le_bytes(self.take_array()?))
	}

	fn read_i128(&mut self) -> Result<i128> {
		Ok(i128::from_le_bytes(self.take_array()?))
	}

	fn read_str(&mut self) -> Result<String> {
		let len = self.read_len()?;
		let raw = self.take(len)?;
		Ok(String::from_utf8(raw.to_vec())?)
	}

	fn read_len(&mut self) -> Result<usize> {
		let len = self.read_u64()?;
		usize::try_from(len).map_err(|_| CodecError::LengthOverflow { len })
	}

	fn read_variant_index(&mut self) -> Result<u32> {
		self.read_u32()
	}
}

/// Encode a value through a fresh [`BinWriter`] and return the bytes.
pub fn encode<T: typewire::codec::Serialize>(value: &T) -> Vec<u8> {
	let mut writer = BinWriter::new();
	value
		.serialize(&mut writer)
		.expect("in-memory encode cannot fail");
	writer.into_bytes()
}

/// Decode a value of type `T` from `bytes` through a [`BinReader`].
pub fn decode<T: typewire::codec::Deserialize>(bytes: &[u8]) -> Result<T> {
	let mut reader = BinReader::new(bytes);
	T::deserialize(&mut reader)
}

#[cfg(test)]
mod tests {
	use typewire::codec::{CodecError, Reader, Writer};

	use super::{BinReader, BinWriter};

	#[test]
	fn scalars_are_little_endian_fixed_width() {
		let mut writer = BinWriter::new();
		writer.write_u16(0x1234).expect("write succeeds");
		writer.write_i32(-2).expect("write succeeds");
		let bytes = writer.into_bytes();
		assert_eq!(bytes, [0x34, 0x12, 0xfe, 0xff, 0xff, 0xff]);
	}

	#[test]
	fn unit_occupies_no_bytes() {
		let mut writer = BinWriter::new();
		writer.write_unit().expect("write succeeds");
		assert!(writer.is_empty());
	}

	#[test]
	fn short_stream_reports_offsets() {
		let mut reader = BinReader::new(&[1, 2]);
		let err = reader.read_u32().expect_err("four bytes are not available");
		let CodecError::UnexpectedEof { at, need, rem } = err else {
			panic!("expected eof error");
		};
		assert_eq!((at, need, rem), (0, 4, 2));
	}

	#[test]
	fn bool_byte_two_is_rejected() {
		let mut reader = BinReader::new(&[2]);
		assert!(reader.read_bool().is_err());
	}

	#[test]
	fn surrogate_code_point_is_rejected() {
		let mut writer = BinWriter::new();
		writer.write_u32(0xD800).expect("write succeeds");
		let bytes = writer.into_bytes();

		let mut reader = BinReader::new(&bytes);
		let err = reader.read_char().expect_err("surrogate must fail");
		assert!(matches!(err, CodecError::InvalidChar { value: 0xD800 }));
	}

	#[test]
	fn non_utf8_string_payload_is_rejected() {
		let mut writer = BinWriter::new();
		writer.write_len(2).expect("write succeeds");
		let mut bytes = writer.into_bytes();
		bytes.extend_from_slice(&[0xff, 0xfe]);

		let mut reader = BinReader::new(&bytes);
		let err = reader.read_str().expect_err("invalid utf-8 must fail");
		assert!(matches!(err, CodecError::InvalidUtf8(_)));
	}
}
