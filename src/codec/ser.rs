use std::collections::BTreeMap;

use crate::codec::{Result, Writer};

/// Type-directed encode dispatch over the value model.
///
/// One impl per value-model shape; composites recurse structurally and emit
/// exactly one Writer call per leaf plus one length or discriminant call per
/// composite boundary. Encoding a well-typed value cannot fail on its own;
/// only Writer medium errors propagate.
pub trait Serialize {
	/// Emit `self` as a deterministic sequence of Writer operations.
	fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()>;
}

macro_rules! leaf_serialize {
	($($ty:ty => $method:ident),* $(,)?) => {
		$(
			impl Serialize for $ty {
				fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()> {
					writer.$method(*self)
				}
			}
		)*
	};
}

leaf_serialize! {
	bool => write_bool,
	char => write_char,
	f32 => write_f32,
	f64 => write_f64,
	u8 => write_u8,
	u16 => write_u16,
	u32 => write_u32,
	u64 => write_u64,
	u128 => write_u128,
	i8 => write_i8,
	i16 => write_i16,
	i32 => write_i32,
	i64 => write_i64,
	i128 => write_i128,
}

impl Serialize for () {
	fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()> {
		writer.write_unit()
	}
}

impl Serialize for str {
	fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()> {
		writer.write_str(self)
	}
}

impl Serialize for String {
	fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()> {
		writer.write_str(self)
	}
}

impl<T: Serialize + ?Sized> Serialize for &T {
	fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()> {
		(**self).serialize(writer)
	}
}

/// Owned indirection is transparent on the wire: the box encodes exactly as
/// its pointee.
impl<T: Serialize + ?Sized> Serialize for Box<T> {
	fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()> {
		(**self).serialize(writer)
	}
}

/// Presence is a one-byte discriminant: 0 absent, 1 present followed by the
/// inner value.
impl<T: Serialize> Serialize for Option<T> {
	fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()> {
		match self {
			Some(value) => {
				writer.write_u8(1)?;
				value.serialize(writer)
			}
			None => writer.write_u8(0),
		}
	}
}

/// Element count first, then elements in iteration order.
impl<T: Serialize> Serialize for Vec<T> {
	fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()> {
		writer.write_len(self.len())?;
		for item in self {
			item.serialize(writer)?;
		}
		Ok(())
	}
}

/// Fixed arrays write no length; the count is part of the type.
impl<T: Serialize, const N: usize> Serialize for [T; N] {
	fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()> {
		for item in self {
			item.serialize(writer)?;
		}
		Ok(())
	}
}

/// Entry count first, then key immediately followed by value per entry, in
/// key order. Key uniqueness is the producer's concern.
impl<K: Serialize, V: Serialize> Serialize for BTreeMap<K, V> {
	fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()> {
		writer.write_len(self.len())?;
		for (key, value) in self {
			key.serialize(writer)?;
			value.serialize(writer)?;
		}
		Ok(())
	}
}

macro_rules! tuple_serialize {
	($($name:ident)+) => {
		/// Components in declared order; no length or discriminant.
		impl<$($name: Serialize),+> Serialize for ($($name,)+) {
			fn serialize<W: Writer + ?Sized>(&self, writer: &mut W) -> Result<()> {
				#[allow(non_snake_case)]
				let ($($name,)+) = self;
				$($name.serialize(writer)?;)+
				Ok(())
			}
		}
	};
}

tuple_serialize!(T0);
tuple_serialize!(T0 T1);
tuple_serialize!(T0 T1 T2);
tuple_serialize!(T0 T1 T2 T3);
tuple_serialize!(T0 T1 T2 T3 T4);
tuple_serialize!(T0 T1 T2 T3 T4 T5);
tuple_serialize!(T0 T1 T2 T3 T4 T5 T6);
tuple_serialize!(T0 T1 T2 T3 T4 T5 T6 T7);
tuple_serialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8);
tuple_serialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9);
tuple_serialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10);
tuple_serialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11);
tuple_serialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11 T12);
tuple_serialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11 T12 T13);
tuple_serialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11 T12 T13 T14);
tuple_serialize!(T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11 T12 T13 T14 T15);
