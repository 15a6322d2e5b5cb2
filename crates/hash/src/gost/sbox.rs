// Copyright 2025 Irreducible Inc.

/// The four substitution tables of the round function.
///
/// Each row is a complete permutation of the nibble space. These are rows 1-4
/// of the GOST R 34.11-94 test-parameter set from RFC 5831. Nibble `i` of the
/// round input goes through row `i % 4`.
pub const SBOX: [[u32; 16]; 4] = [
	[0x4, 0xA, 0x9, 0x2, 0xD, 0x8, 0x0, 0xE, 0x6, 0xB, 0x1, 0xC, 0x7, 0xF, 0x5, 0x3],
	[0xE, 0xB, 0x4, 0xC, 0x6, 0xD, 0xF, 0xA, 0x2, 0x3, 0x8, 0x1, 0x0, 0x7, 0x5, 0x9],
	[0x5, 0x8, 0x1, 0xD, 0xA, 0x3, 0x4, 0x2, 0xE, 0xF, 0xC, 0x7, 0x6, 0x0, 0x9, 0xB],
	[0x7, 0xD, 0xA, 0x1, 0x0, 0x8, 0x9, 0xF, 0xE, 0x4, 0x6, 0xC, 0xB, 0x2, 0x5, 0x3],
];
