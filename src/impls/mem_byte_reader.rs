/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::traits::*;

/// The error returned by memory-backed transports when the underlying slice
/// is exhausted: the source has no byte left to produce, or the sink has no
/// room left to accept one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfSlice;

impl core::fmt::Display for EndOfSlice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unexpected end of slice")
    }
}

impl core::error::Error for EndOfSlice {}

/// An implementation of [`ByteRead`] for a slice.
///
/// # Example
/// ```
/// use bitgrain::prelude::*;
///
/// let bytes = [0xAB, 0xCD];
/// let mut byte_reader = MemByteReader::new(&bytes);
///
/// // the stream is read sequentially
/// assert_eq!(byte_reader.read_byte().unwrap(), 0xAB);
/// assert_eq!(byte_reader.read_byte().unwrap(), 0xCD);
/// assert!(byte_reader.read_byte().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteReader<B: AsRef<[u8]>> {
    data: B,
    index: usize,
}

impl<B: AsRef<[u8]>> MemByteReader<B> {
    /// Create a new [`MemByteReader`] from a slice of data.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self { data, index: 0 }
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsRef<[u8]>> ByteRead for MemByteReader<B> {
    type Error = EndOfSlice;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let byte = *self.data.as_ref().get(self.index).ok_or(EndOfSlice)?;
        self.index += 1;
        Ok(byte)
    }
}
