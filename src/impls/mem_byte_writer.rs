/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use super::EndOfSlice;
use crate::traits::*;

/// An implementation of [`ByteWrite`] for a mutable slice of memory.
///
/// The capacity is fixed: writing past the end of the slice fails with
/// [`EndOfSlice`], which makes this sink useful for testing how callers
/// behave when the underlying medium rejects a write.
///
/// # Example
/// ```
/// use bitgrain::prelude::*;
///
/// let mut bytes = [0u8; 2];
/// let mut byte_writer = MemByteWriter::new(&mut bytes);
///
/// assert!(byte_writer.write_byte(0xAB).is_ok());
/// assert!(byte_writer.write_byte(0xCD).is_ok());
/// assert!(byte_writer.write_byte(0xEF).is_err());
/// assert_eq!(bytes, [0xAB, 0xCD]);
/// ```
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteWriter<B: AsMut<[u8]>> {
    data: B,
    index: usize,
}

impl<B: AsMut<[u8]>> MemByteWriter<B> {
    /// Create a new [`MemByteWriter`] from a mutable slice.
    #[must_use]
    pub fn new(data: B) -> Self {
        Self { data, index: 0 }
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

impl<B: AsMut<[u8]>> ByteWrite for MemByteWriter<B> {
    type Error = EndOfSlice;

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        let slot = self.data.as_mut().get_mut(self.index).ok_or(EndOfSlice)?;
        *slot = byte;
        self.index += 1;
        Ok(())
    }
}

/// An implementation of [`ByteWrite`] for a [`Vec<u8>`], growing it as
/// needed. Writes cannot fail.
///
/// # Example
/// ```
/// use bitgrain::prelude::*;
///
/// let mut bytes = Vec::new();
/// let mut byte_writer = MemByteWriterVec::new(&mut bytes);
/// byte_writer.write_byte(0xAB).unwrap();
/// byte_writer.write_byte(0xCD).unwrap();
/// assert_eq!(bytes, [0xAB, 0xCD]);
/// ```
#[derive(Debug, PartialEq)]
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
pub struct MemByteWriterVec<B: AsMut<alloc::vec::Vec<u8>>> {
    data: B,
}

#[cfg(feature = "alloc")]
impl<B: AsMut<alloc::vec::Vec<u8>>> MemByteWriterVec<B> {
    /// Create a new [`MemByteWriterVec`] appending to a [`Vec<u8>`].
    #[must_use]
    pub fn new(data: B) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> B {
        self.data
    }
}

#[cfg(feature = "alloc")]
impl<B: AsMut<alloc::vec::Vec<u8>>> ByteWrite for MemByteWriterVec<B> {
    type Error = core::convert::Infallible;

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.data.as_mut().push(byte);
        Ok(())
    }
}
