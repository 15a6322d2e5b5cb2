// Copyright 2025 Irreducible Inc.

//! [`digest`] trait implementations for [`Gost256`].
//!
//! The block buffer is part of the hasher's own state, so the traits are
//! implemented directly rather than through `digest::core_api` wrappers. The
//! combination below makes the blanket [`digest::Digest`] impl apply.

use digest::{
	crypto_common::BlockSizeUser,
	typenum::U32,
	FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

use super::hasher::Gost256;

impl HashMarker for Gost256 {}

impl BlockSizeUser for Gost256 {
	type BlockSize = U32;
}

impl OutputSizeUser for Gost256 {
	type OutputSize = U32;
}

impl Update for Gost256 {
	#[inline]
	fn update(&mut self, data: &[u8]) {
		Gost256::update(self, data);
	}
}

impl FixedOutput for Gost256 {
	#[inline]
	fn finalize_into(mut self, out: &mut Output<Self>) {
		let mut digest = [0u8; 32];
		self.finalize_core(&mut digest);
		out.copy_from_slice(&digest);
	}
}

impl Reset for Gost256 {
	#[inline]
	fn reset(&mut self) {
		Gost256::reset(self);
	}
}

impl FixedOutputReset for Gost256 {
	#[inline]
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		let mut digest = [0u8; 32];
		self.finalize_core(&mut digest);
		out.copy_from_slice(&digest);
		Gost256::reset(self);
	}
}
