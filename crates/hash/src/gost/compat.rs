// Copyright 2025 Irreducible Inc.

//! Legacy `gost512`-prefixed names.
//!
//! Call sites ported from the sph-style C interface expect this 256-bit
//! engine under a 512 suffix. Everything here forwards 1:1 to [`Gost256`] so
//! the two name surfaces cannot drift apart.

use super::hasher::{Gost256, DIGEST_LEN_U8};

/// The historical name of the engine. Same type, same digests.
pub type Gost512 = Gost256;

pub fn gost512_init(ctx: &mut Gost512) {
	ctx.reset();
}

pub fn gost512_update(ctx: &mut Gost512, data: &[u8]) {
	ctx.update(data);
}

/// Finalizes `ctx` and writes the 32-byte digest into `dst`. Taking the
/// context by value is what replaces the C convention's "must re-init before
/// reuse" footnote.
pub fn gost512_close(ctx: Gost512, dst: &mut [u8; DIGEST_LEN_U8]) {
	*dst = ctx.finalize();
}

/// Sub-byte finalization under the legacy name; `nbits` high-order bits of
/// `extra` enter the stream before the standard padding sequence.
pub fn gost512_add_bits_and_close(
	ctx: Gost512,
	extra: u8,
	nbits: u8,
	dst: &mut [u8; DIGEST_LEN_U8],
) {
	*dst = ctx.finalize_with_bits(extra, nbits);
}
