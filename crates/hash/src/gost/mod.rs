// Copyright 2025 Irreducible Inc.

//! This module implements the 256-bit GOST-family digest used as one stage of
//! multi-algorithm proof-of-work hash chains.

pub mod compat;
mod digest;
mod hasher;
mod sbox;


pub use hasher::*;
