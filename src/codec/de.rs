use std::collections::BTreeMap;

use crate::codec::{CodecError, Reader, Result};

/// Ceiling on speculative element preallocation while decoding sequences
/// and maps. A hostile length prefix can announce billions of elements; the
/// reader will fail on the missing bytes soon enough, so reserve at most
/// this many slots up front and let the vector grow normally past it.
const SEQ_PREALLOC_CAP: usize = 4096;

/// Type-directed decode dispatch over the value model.
///
/// Structural mirror of [`Serialize`](crate::codec::Serialize): each impl
/// recurses over the static shape of the target type, never over runtime
/// input except the discriminants the shape itself declares. Every Reader
/// failure aborts the call and propagates unchanged; nothing is committed
/// until the full decode succeeds.
pub trait Deserialize: Sized {
	/// Reconstruct a value from the mirrored Reader operation sequence.
	fn deserialize<R: Reader + ?Sized>(reader: &mut R) -> Result<Self>;
}

macro_rules! leaf_deserialize {
	($($ty:ty => $method:ident),* $(,)?) => {
		$(
			impl Deserialize for $ty {
				fn deserialize<R: Reader + ?Sized>(reader: &mut R) -> Result<Self> {
					reader.$method()
				}
			}
		)*
	};
}

leaf_deserialize! {
	bool => read_bool,
	char => read_char,
	f32 => read_f32,
	f64 => read_f64,
	u8 => read_u8,
	u16 => read_u16,
	u32 => read_u32,
	u64 => read_u64,
	u128 => read_u128,
	i8 => read_i8,
	i16 => read_i16,
	i32 => read_i32,
	i64 => read_i64,
	i128 => read_i128,
	String => read_str,
}

impl Deserialize for () {
	fn deserialize<R: Reader + ?Sized>(reader: &mut R) -> Result<Self> {
		reader.read_unit()
	}
}

/// Decodes the pointee and takes sole ownership of it.
impl<T: Deserialize> Deserialize for Box<T> {
	fn deserialize<R: Reader + ?Sized>(reader: &mut R) -> Result<Self> {
		Ok(Box::new(T::deserialize(reader)?))
	}
}

/// Discriminant 0 yields `None` without consuming further input; 1 yields
/// `Some` wrapping the decoded inner value; anything else is rejected.
impl<T: Deserialize> Deserialize for Option<T> {
	fn deserialize<R: Reader + ?Sized>(reader: &mut R) -> Result<Self> {
		match reader.read_u8()? {
			0 => Ok(None),
			1 => Ok(Some(T::deserialize(reader)?)),
			tag => Err(CodecError::InvalidOptionTag { tag }),
		}
	}
}

/// Reads the announced length, then exactly that many elements in wire
/// order.
impl<T: Deserialize> Deserialize for Vec<T> {
	fn deserialize<R: Reader + ?Sized>(reader: &mut R) -> Result<Self> {
		let len = reader.read_len()?;
		let mut items = Vec::with_capacity(len.min(SEQ_PREALLOC_CAP));
		for _ in 0..len {
			items.push(T::deserialize(reader)?);
		}
		Ok(items)
	}
}

/// Exactly `N` positional elements; no length is read.
impl<T: Deserialize, const N: usize> Deserialize for [T; N] {
	fn deserialize<R: Reader + ?Sized>(reader: &mut R) -> Result<Self> {
		let mut items = Vec::with_capacity(N);
		for _ in 0..N {
			items.push(T::deserialize(reader)?);
		}
		// The loop pushed exactly N elements; a short stream already failed
		// inside the element reads. The error arm only keeps the conversion
		// panic-free.
		items.try_into().map_err(|items: Vec<T>| CodecError::FixedArrayLength {
			expected: N,
			got: items.len(),
		})
	}
}

/// Reads the announced entry count, then key immediately followed by value
/// per entry. Duplicate keys are not rejected: the insert order wins, so the
/// last occurrence of a key keeps its value.
impl<K: Deserialize + Ord, V: Deserialize> Deserialize for BTreeMap<K, V> {
	fn deserialize<R: Reader + ?Sized>(reader: &mut R) -> Result<Self> {
		let len = reader.read_len()?;
		let mut map = BTreeMap::new();
		for _ in 0..len {
			let key = K::deserialize(reader)?;
			let value = V::deserialize(reader)?;
			map.insert(key, value);
		}
		Ok(map)
	}
}

macro_rules! tuple_deserialize {
	($($name:ident)+) => {
		/// Components in declared order; no length or discriminant.
		impl<$($name: Deserialize),+> Deserialize for ($($name,)+) {
			fn deserialize<R: Reader + ?Sized>(reader: &mut R) -> Result<Self> {
				Ok(($($name::deserialize(reader)?,)+))
			}
		}
	};
}

tuple_deserialize!(T0);
tuple_deserialize!(T0 T1);
tuple_deserialize!(T0 T1 T2);
tuple_deserialize!(T0 T1 T2 T3);
tuple_deserialize!(T0 T1 T2 T3 T4);
tuple_deserialize!(T0 T1 T2 T3 T4 T5);
tuple_deserialize!(T0 T1 T2 T3 T4 T5 T6);
tuple_deserialize!(T0 T1 T2 T3 T4 T5 T6 T7);
tuple_deserialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8);
tuple_deserialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9);
tuple_deserialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10);
tuple_deserialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11);
tuple_deserialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11 T12);
tuple_deserialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11 T12 T13);
tuple_deserialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11 T12 T13 T14);
tuple_deserialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11 T12 T13 T14 T15);
