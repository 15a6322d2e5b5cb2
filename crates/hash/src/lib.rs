// Copyright 2025 Irreducible Inc.

pub mod gost;

pub use digest;
pub use gost::*;
