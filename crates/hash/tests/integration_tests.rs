// Copyright 2025 Irreducible Inc.

use gost_hash::{
	compat::{gost512_add_bits_and_close, gost512_close, gost512_init, gost512_update, Gost512},
	Gost256,
};
use hex_literal::hex;

// Known-answer digests computed from an independent reference model of the
// engine with the complete RFC 5831 test-parameter substitution tables.

#[test]
fn test_empty_input() {
	let hasher = Gost256::default();
	let expected = hex!("f5dcc8753bff0c3f7d84a3afcf4e5d60a591020999afeeac9e0d7bd18a67129b");
	assert_eq!(hasher.finalize(), expected);
}

#[test]
fn test_short_inputs() {
	let cases: [(&[u8], [u8; 32]); 3] = [
		(
			b"a",
			hex!("e9297814a38b99460b18db889eec1dbf96ca716a5e7ea28a091b17228f416bd8"),
		),
		(
			b"abc",
			hex!("34f67297c32de97235528f7b13fcad75d0423c659679a1479f5f09899bcee4ea"),
		),
		(
			b"message digest",
			hex!("04d3e4de37b1da6563d40d6ba98bafea1271ffc9973bf152ece85e61c977fcbd"),
		),
	];
	for (input, expected) in cases {
		assert_eq!(Gost256::new().chain_update(input).finalize(), expected);
	}
}

#[test]
fn test_multi_update() {
	let expected = hex!("a8b4a3acffafeb28fa0aee6d2a401c7082d109d5bab12b7dac719f88ef3bc155");

	let mut hasher_1 = Gost256::default();
	hasher_1.update("The quick brown fox jumps over the lazy dog".as_bytes());
	assert_eq!(hasher_1.finalize(), expected);

	let mut hasher_2 = Gost256::default();
	hasher_2.update("The quick brown fox jumps".as_bytes());
	hasher_2.update(" over the lazy dog".as_bytes());
	assert_eq!(hasher_2.finalize(), expected);
}

#[test]
fn test_one_block_input() {
	// Exactly one 32-byte block.
	let expected = hex!("d9cb13752f79a1639e547b1d38c045ba128057ce124fdcd11873716c23f8d9e6");
	assert_eq!(Gost256::new().chain_update([0u8; 32]).finalize(), expected);
}

#[test]
fn test_two_block_input() {
	let data: Vec<u8> = (0u8..64).collect();
	let expected = hex!("c7020712b9931e181e2e4c18cf47bab71507ce8d7bb837bd3a24c868adde5840");
	assert_eq!(Gost256::new().chain_update(&data).finalize(), expected);
}

#[test]
fn test_add_bits_finalization() {
	// Five high-order bits of 0xB7 after "abc".
	let expected = hex!("8759d62b090179901228885cb11985b35f00295ff4f1e0ef56b3bedc81fb04ff");
	assert_eq!(
		Gost256::new().chain_update(b"abc").finalize_with_bits(0xB7, 5),
		expected
	);

	// A single set bit as the entire message.
	let expected = hex!("de3ce04ce50636904401740886569c041d19e35c37cda6a18bb47662770ee0dc");
	assert_eq!(Gost256::new().finalize_with_bits(0xFF, 1), expected);
}

#[test]
fn test_legacy_interface() {
	let mut ctx = Gost512::default();
	gost512_init(&mut ctx);
	gost512_update(&mut ctx, b"abc");
	let mut digest = [0u8; 32];
	gost512_close(ctx, &mut digest);
	assert_eq!(
		digest,
		hex!("34f67297c32de97235528f7b13fcad75d0423c659679a1479f5f09899bcee4ea")
	);

	let mut ctx = Gost512::default();
	gost512_update(&mut ctx, b"abc");
	let mut digest = [0u8; 32];
	gost512_add_bits_and_close(ctx, 0xB7, 5, &mut digest);
	assert_eq!(
		digest,
		hex!("8759d62b090179901228885cb11985b35f00295ff4f1e0ef56b3bedc81fb04ff")
	);
}
