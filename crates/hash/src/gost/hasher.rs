// Copyright 2025 Irreducible Inc.

//! Streaming accumulator, compression core and finalizer of the 256-bit
//! GOST-family digest.
//!
//! The construction is Merkle–Damgård over 32-byte blocks: a substitution-
//! permutation compression function updates a 256-bit chaining value per
//! block, while a parallel checksum accumulator sums the raw block words
//! lane-wise and is folded into the chaining value at finalization.

use std::cmp;

use super::sbox::SBOX;

/// Block length of the compression function in bytes.
pub const BLOCK_LEN_U8: usize = 32;

/// Digest length in bytes.
pub const DIGEST_LEN_U8: usize = 32;

/// The round function: add the round key, substitute each nibble through its
/// table, rotate left by 11.
#[inline]
fn round(data: u32, key: u32) -> u32 {
	let t = data.wrapping_add(key);
	let mut out = 0u32;
	for i in 0..8 {
		out |= SBOX[i % 4][((t >> (4 * i)) & 0xF) as usize] << (4 * i);
	}
	out.rotate_left(11)
}

/// Compresses one 32-byte block into the chaining state and checksum lanes.
///
/// The eight chaining-state words at entry serve as a fixed cyclic key
/// schedule for all four encipherment passes. The transformed block is
/// XORed into `state` and the untransformed block words are added into
/// `sigma` modulo 2^32.
pub fn compress(state: &mut [u32; 8], sigma: &mut [u32; 8], block: &[u8; BLOCK_LEN_U8]) {
	let mut m = [0u32; 8];
	for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_le_bytes(chunk.try_into().unwrap());
	}

	let key = *state;
	let mut w = m;
	for _ in 0..4 {
		for step in 0..32 {
			// Shift register: word 0 exits, words 1..7 shift down, and the
			// exited word XOR the round output of the old word 7 re-enters.
			let fed = w[0] ^ round(w[7], key[step % 8]);
			w.rotate_left(1);
			w[7] = fed;
		}
	}

	for i in 0..8 {
		state[i] ^= w[i];
		sigma[i] = sigma[i].wrapping_add(m[i]);
	}
}

/// The 256-bit GOST-family streaming hasher.
///
/// Buffers at most one partial block between [`Self::update`] calls; every
/// full block seen is compressed before `update` returns. Finalization
/// consumes the hasher, so a closed context cannot be reused without
/// constructing a fresh one (or going through
/// [`digest::FixedOutputReset`]).
#[derive(Debug, Clone)]
pub struct Gost256 {
	buffer: [u8; BLOCK_LEN_U8],
	fill: usize,
	count: u64,
	state: [u32; 8],
	sigma: [u32; 8],
}

impl Gost256 {
	pub fn new() -> Self {
		Self {
			buffer: [0; BLOCK_LEN_U8],
			fill: 0,
			count: 0,
			state: [0; 8],
			sigma: [0; 8],
		}
	}

	/// Absorbs `data` into the stream. Zero-length input is a no-op.
	pub fn update(&mut self, data: impl AsRef<[u8]>) {
		let data = data.as_ref();
		self.count += 8 * data.len() as u64;
		self.absorb(data);
	}

	/// Process input data in a chained manner.
	#[must_use]
	pub fn chain_update(mut self, data: impl AsRef<[u8]>) -> Self {
		self.update(data);
		self
	}

	/// Resets to the freshly initialized state.
	pub fn reset(&mut self) {
		*self = Self::new();
	}

	/// Finalizes the stream and returns the 32-byte digest.
	pub fn finalize(mut self) -> [u8; DIGEST_LEN_U8] {
		let mut digest = [0u8; DIGEST_LEN_U8];
		self.finalize_core(&mut digest);
		digest
	}

	/// Finalizes the stream after appending the `nbits` high-order bits of
	/// `extra` as a partial trailing byte.
	///
	/// `nbits` must be in `0..8`; with `nbits == 0` this is exactly
	/// [`Self::finalize`]. The partial byte occupies one buffer position but
	/// only `nbits` bits are accounted in the message length.
	pub fn finalize_with_bits(mut self, extra: u8, nbits: u8) -> [u8; DIGEST_LEN_U8] {
		assert!(nbits < 8, "nbits must be in 0..8");
		if nbits > 0 {
			let masked = extra & (0xFFu8 << (8 - nbits));
			self.count += u64::from(nbits);
			self.absorb(&[masked]);
		}
		self.finalize()
	}

	/// Block-buffering absorb; does not touch the bit counter.
	fn absorb(&mut self, mut data: &[u8]) {
		if self.fill > 0 {
			let take = cmp::min(BLOCK_LEN_U8 - self.fill, data.len());
			self.buffer[self.fill..self.fill + take].copy_from_slice(&data[..take]);
			self.fill += take;
			data = &data[take..];
			if self.fill < BLOCK_LEN_U8 {
				return;
			}
			let block = self.buffer;
			compress(&mut self.state, &mut self.sigma, &block);
			self.fill = 0;
		}

		let mut blocks = data.chunks_exact(BLOCK_LEN_U8);
		for block in &mut blocks {
			compress(&mut self.state, &mut self.sigma, block.try_into().unwrap());
		}

		let rem = blocks.remainder();
		if !rem.is_empty() {
			self.buffer[..rem.len()].copy_from_slice(rem);
			self.fill = rem.len();
		}
	}

	/// Padding, length block, checksum fold and digest serialization.
	///
	/// The pad block (`0x80` then zeros) always triggers a compression: a
	/// block-aligned stream receives one full extra pad block rather than
	/// none. Neither the pad nor the length block counts toward the message
	/// length.
	pub(super) fn finalize_core(&mut self, out: &mut [u8; DIGEST_LEN_U8]) {
		let mut block = [0u8; BLOCK_LEN_U8];
		block[..self.fill].copy_from_slice(&self.buffer[..self.fill]);
		block[self.fill] = 0x80;
		compress(&mut self.state, &mut self.sigma, &block);
		self.fill = 0;

		// Length block: the 64-bit message bit count occupies lanes 0 and 1
		// little-endian; lanes 2..8 stay zero. Compressed directly so it
		// neither re-enters the padding logic nor perturbs the counter.
		let mut length = [0u8; BLOCK_LEN_U8];
		length[..8].copy_from_slice(&self.count.to_le_bytes());
		compress(&mut self.state, &mut self.sigma, &length);

		for i in 0..8 {
			self.state[i] ^= self.sigma[i];
		}

		// Lanes emitted in reversed order, each little-endian. This byte
		// layout is load-bearing for downstream hash-chain stages.
		for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
			chunk.copy_from_slice(&self.state[7 - i].to_le_bytes());
		}
	}
}

impl Default for Gost256 {
	fn default() -> Self {
		Self::new()
	}
}
