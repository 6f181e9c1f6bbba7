mod malformed_streams {

	use typewire::codec::{CodecError, Deserialize, Writer};
	use typewire_testkit::{BinReader, BinWriter};

	#[test]
	fn option_discriminant_two_is_a_decode_error() {
		let err = typewire_testkit::decode::<Option<u32>>(&[2]).expect_err("tag 2 must fail");
		assert!(matches!(err, CodecError::InvalidOptionTag { tag: 2 }));
	}

	#[test]
	fn option_discriminant_zero_consumes_nothing_further() {
		let mut writer = BinWriter::new();
		writer.write_u8(0).expect("write succeeds");
		writer.write_u32(123).expect("write succeeds");
		let bytes = writer.into_bytes();

		let mut reader = BinReader::new(&bytes);
		let value = Option::<u32>::deserialize(&mut reader).expect("decode succeeds");
		assert_eq!(value, None);
		assert_eq!(reader.pos(), 1);
	}

	#[test]
	fn truncated_scalar_reports_exhaustion() {
		let mut writer = BinWriter::new();
		writer.write_u8(1).expect("write succeeds");
		writer.write_u16(7).expect("write succeeds");
		let bytes = writer.into_bytes();

		// The inner value needs four bytes; only two remain after the tag.
		let err = typewire_testkit::decode::<Option<u32>>(&bytes).expect_err("short stream must fail");
		assert!(matches!(err, CodecError::UnexpectedEof { .. }));
	}

	#[test]
	fn truncated_string_payload_reports_exhaustion() {
		let mut writer = BinWriter::new();
		writer.write_len(10).expect("write succeeds");
		let mut bytes = writer.into_bytes();
		bytes.extend_from_slice(b"abc");

		let err = typewire_testkit::decode::<String>(&bytes).expect_err("short payload must fail");
		assert!(matches!(err, CodecError::UnexpectedEof { .. }));
	}

	#[test]
	fn sequence_length_announces_exact_element_count() {
		let value = vec![5_u32, 6, 7];
		let bytes = typewire_testkit::encode(&value);

		let mut reader = BinReader::new(&bytes);
		let decoded = Vec::<u32>::deserialize(&mut reader).expect("decode succeeds");
		assert_eq!(decoded, value);
		assert_eq!(reader.remaining(), 0, "exactly the announced elements are consumed");
	}

	#[test]
	fn empty_sequence_decodes_with_no_further_reads() {
		let bytes = typewire_testkit::encode(&Vec::<u8>::new());

		let mut reader = BinReader::new(&bytes);
		let decoded = Vec::<u8>::deserialize(&mut reader).expect("decode succeeds");
		assert!(decoded.is_empty());
		assert_eq!(reader.remaining(), 0);
	}

	#[test]
	fn fixed_array_decodes_without_any_length_field() {
		let bytes = typewire_testkit::encode(&[10_u32, 20, 30]);
		assert_eq!(bytes.len(), 12, "three u32 values and nothing else");

		let decoded: [u32; 3] = typewire_testkit::decode(&bytes).expect("decode succeeds");
		assert_eq!(decoded, [10, 20, 30]);
	}

	#[test]
	fn tuple_decodes_components_without_discriminant() {
		let bytes = typewire_testkit::encode(&(1_u8, 2_u16));
		assert_eq!(bytes.len(), 3, "one u8 then one u16 and nothing else");

		let decoded: (u8, u16) = typewire_testkit::decode(&bytes).expect("decode succeeds");
		assert_eq!(decoded, (1, 2));
	}

	#[test]
	fn trailing_garbage_is_left_for_the_caller() {
		let mut bytes = typewire_testkit::encode(&true);
		bytes.push(0xAA);

		let mut reader = BinReader::new(&bytes);
		let decoded = bool::deserialize(&mut reader).expect("decode succeeds");
		assert!(decoded);
		assert_eq!(reader.remaining(), 1);
	}
}
