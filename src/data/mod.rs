/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits for reading and writing composed values.

Everything in this module is built on the integer operations of
[`BitRead`](crate::traits::BitRead) and [`BitWrite`](crate::traits::BitWrite):
floating-point values travel as the full-width integers sharing their bit
pattern, characters as 16-bit code units, and byte arrays as an unsigned
length field of a caller-chosen width (the *scale*) followed by one
sub-byte-packed value per element (the *range*). Strings are byte arrays
holding UTF-8, or seven-bit-packed ASCII on the dedicated path.

Each kind of value is implemented as a pair of traits for reading and
writing (e.g., [`FloatRead`] and [`FloatWrite`]), with blanket
implementations for every [`BitRead`](crate::traits::BitRead) and
[`BitWrite`](crate::traits::BitWrite). Usually one would instead pull in
scope [`ReadData`] and [`WriteData`], which gather them all.

*/

pub mod float;
pub use float::{FloatRead, FloatWrite};

pub mod chars;
pub use chars::{CharRead, CharWrite};

#[cfg(feature = "alloc")]
pub mod bytes;
#[cfg(feature = "alloc")]
pub use bytes::{BytesRead, BytesWrite};

#[cfg(feature = "alloc")]
pub mod string;
#[cfg(feature = "alloc")]
pub use string::{StringRead, StringWrite};

/// Convenience trait gathering all the value-reading traits.
#[cfg(feature = "alloc")]
pub trait ReadData: FloatRead + CharRead + BytesRead + StringRead {}
#[cfg(feature = "alloc")]
impl<B: FloatRead + CharRead + BytesRead + StringRead> ReadData for B {}

/// Convenience trait gathering all the value-writing traits.
#[cfg(feature = "alloc")]
pub trait WriteData: FloatWrite + CharWrite + BytesWrite + StringWrite {}
#[cfg(feature = "alloc")]
impl<B: FloatWrite + CharWrite + BytesWrite + StringWrite> WriteData for B {}

/// Convenience trait gathering all the value-reading traits.
#[cfg(not(feature = "alloc"))]
pub trait ReadData: FloatRead + CharRead {}
#[cfg(not(feature = "alloc"))]
impl<B: FloatRead + CharRead> ReadData for B {}

/// Convenience trait gathering all the value-writing traits.
#[cfg(not(feature = "alloc"))]
pub trait WriteData: FloatWrite + CharWrite {}
#[cfg(not(feature = "alloc"))]
impl<B: FloatWrite + CharWrite> WriteData for B {}
