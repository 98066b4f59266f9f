/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Byte arrays packed below full width.
//!
//! An array is encoded as an unsigned length of `scale` bits
//! (`1..=32`), followed by one value of `range` bits (`1..=8`) per
//! element. With `range < 8` the elements are packed below full byte width,
//! and written values are masked to the low `range` bits.

use alloc::vec::Vec;

use crate::traits::bit_stream::check_width;
use crate::traits::*;

/// Trait for reading length-prefixed, sub-byte-packed arrays.
pub trait BytesRead: BitRead {
    /// Read a `scale`-bit length, then that many unsigned `range`-bit
    /// elements.
    fn read_bytes(&mut self, scale: u32, range: u32) -> Result<Vec<u8>, Self::Error>;

    /// Read a `scale`-bit length, then that many signed `range`-bit
    /// elements.
    fn read_signed_bytes(&mut self, scale: u32, range: u32) -> Result<Vec<i8>, Self::Error>;
}

impl<B: BitRead> BytesRead for B {
    fn read_bytes(&mut self, scale: u32, range: u32) -> Result<Vec<u8>, Self::Error> {
        check_width(scale, 32);
        check_width(range, 8);
        let len = self.read_u32(scale)? as usize;
        let mut bytes = Vec::with_capacity(len);
        for _ in 0..len {
            bytes.push(self.read_bits(range)?);
        }
        Ok(bytes)
    }

    fn read_signed_bytes(&mut self, scale: u32, range: u32) -> Result<Vec<i8>, Self::Error> {
        check_width(scale, 32);
        check_width(range, 8);
        let len = self.read_u32(scale)? as usize;
        let mut bytes = Vec::with_capacity(len);
        for _ in 0..len {
            bytes.push(self.read_i8(range)?);
        }
        Ok(bytes)
    }
}

/// Trait for writing length-prefixed, sub-byte-packed arrays.
///
/// A length that does not fit in `scale` bits is a precondition violation,
/// detected before anything is written.
pub trait BytesWrite: BitWrite {
    /// Write a `scale`-bit length, then each byte masked to the low
    /// `range` bits.
    fn write_bytes(&mut self, bytes: &[u8], scale: u32, range: u32) -> Result<(), Self::Error>;

    /// Write a `scale`-bit length, then each value as a signed `range`-bit
    /// element.
    fn write_signed_bytes(
        &mut self,
        bytes: &[i8],
        scale: u32,
        range: u32,
    ) -> Result<(), Self::Error>;
}

#[inline(always)]
fn check_len(len: usize, scale: u32) {
    assert!(
        (len as u64) < (1 << scale),
        "array length {} does not fit in {} bits",
        len,
        scale
    );
}

impl<B: BitWrite> BytesWrite for B {
    fn write_bytes(&mut self, bytes: &[u8], scale: u32, range: u32) -> Result<(), Self::Error> {
        check_width(scale, 32);
        check_width(range, 8);
        check_len(bytes.len(), scale);
        self.write_u32(bytes.len() as u32, scale)?;
        for &byte in bytes {
            self.write_bits(byte, range)?;
        }
        Ok(())
    }

    fn write_signed_bytes(
        &mut self,
        bytes: &[i8],
        scale: u32,
        range: u32,
    ) -> Result<(), Self::Error> {
        check_width(scale, 32);
        check_width(range, 8);
        check_len(bytes.len(), scale);
        self.write_u32(bytes.len() as u32, scale)?;
        for &byte in bytes {
            self.write_i8(byte, range)?;
        }
        Ok(())
    }
}
