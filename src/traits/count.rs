/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// Byte-count bookkeeping shared by readers and writers.
pub trait ByteCount {
    /// The number of whole bytes exchanged with the transport so far.
    ///
    /// The count is monotonic; after a successful `align(boundary)` it is a
    /// multiple of `boundary`.
    fn byte_count(&self) -> u64;
}

/// Wrapping struct that keeps track of read bits. Optionally,
/// prints to standard error information about methods called.
#[cfg(feature = "std")]
pub struct CountBitReader<R: BitRead, const PRINT: bool = false> {
    bit_read: R,
    /// The number of bits read (or discarded) so far from the underlying
    /// [`BitRead`].
    pub bits_read: u64,
}

#[cfg(feature = "std")]
impl<R: BitRead, const PRINT: bool> CountBitReader<R, PRINT> {
    pub fn new(bit_read: R) -> Self {
        Self {
            bit_read,
            bits_read: 0,
        }
    }

    pub fn into_inner(self) -> R {
        self.bit_read
    }
}

#[cfg(feature = "std")]
impl<R: BitRead, const PRINT: bool> ByteCount for CountBitReader<R, PRINT> {
    #[inline(always)]
    fn byte_count(&self) -> u64 {
        self.bit_read.byte_count()
    }
}

#[cfg(feature = "std")]
impl<R: BitRead, const PRINT: bool> BitRead for CountBitReader<R, PRINT> {
    type Error = R::Error;

    fn read_bits(&mut self, width: u32) -> Result<u8, Self::Error> {
        self.bit_read.read_bits(width).map(|value| {
            self.bits_read += width as u64;
            if PRINT {
                eprintln!(
                    "read_bits({}) = {:#04x} (total = {})",
                    width, value, self.bits_read
                );
            }
            value
        })
    }

    fn align(&mut self, boundary: u64) -> Result<u64, Self::Error> {
        self.bit_read.align(boundary).map(|discarded| {
            self.bits_read += discarded;
            if PRINT {
                eprintln!(
                    "align({}) = {} (total = {})",
                    boundary, discarded, self.bits_read
                );
            }
            discarded
        })
    }
}

/// Wrapping struct that keeps track of written bits. Optionally,
/// prints to standard error information about methods called.
#[cfg(feature = "std")]
pub struct CountBitWriter<W: BitWrite, const PRINT: bool = false> {
    bit_write: W,
    /// The number of bits written (including padding) so far on the
    /// underlying [`BitWrite`].
    pub bits_written: u64,
}

#[cfg(feature = "std")]
impl<W: BitWrite, const PRINT: bool> CountBitWriter<W, PRINT> {
    pub fn new(bit_write: W) -> Self {
        Self {
            bit_write,
            bits_written: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.bit_write
    }
}

#[cfg(feature = "std")]
impl<W: BitWrite, const PRINT: bool> ByteCount for CountBitWriter<W, PRINT> {
    #[inline(always)]
    fn byte_count(&self) -> u64 {
        self.bit_write.byte_count()
    }
}

#[cfg(feature = "std")]
impl<W: BitWrite, const PRINT: bool> BitWrite for CountBitWriter<W, PRINT> {
    type Error = W::Error;

    fn write_bits(&mut self, value: u8, width: u32) -> Result<(), Self::Error> {
        self.bit_write.write_bits(value, width).map(|()| {
            self.bits_written += width as u64;
            if PRINT {
                eprintln!(
                    "write_bits({:#04x}, {}) (total = {})",
                    value, width, self.bits_written
                );
            }
        })
    }

    fn align(&mut self, boundary: u64) -> Result<u64, Self::Error> {
        self.bit_write.align(boundary).map(|padded| {
            self.bits_written += padded;
            if PRINT {
                eprintln!(
                    "align({}) = {} (total = {})",
                    boundary, padded, self.bits_written
                );
            }
            padded
        })
    }
}

#[cfg(all(test, feature = "std"))]
#[test]
fn test_count() -> Result<(), anyhow::Error> {
    use crate::prelude::*;
    let mut buffer = Vec::new();
    let writer = BitWriter::new(MemByteWriterVec::new(&mut buffer));
    let mut count_writer = CountBitWriter::<_, false>::new(writer);

    count_writer.write_bool(true)?;
    assert_eq!(count_writer.bits_written, 1);
    count_writer.write_u32(99, 20)?;
    assert_eq!(count_writer.bits_written, 21);
    count_writer.write_i64(-1, 40)?;
    assert_eq!(count_writer.bits_written, 61);
    let padded = count_writer.align(2)?;
    assert_eq!(count_writer.bits_written, 61 + padded);
    assert_eq!(count_writer.bits_written % 16, 0);
    drop(count_writer);

    let reader = BitReader::new(MemByteReader::new(&buffer));
    let mut count_reader = CountBitReader::<_, false>::new(reader);

    assert!(count_reader.read_bool()?);
    assert_eq!(count_reader.read_u32(20)?, 99);
    assert_eq!(count_reader.read_i64(40)?, -1);
    assert_eq!(count_reader.bits_read, 61);
    assert_eq!(count_reader.align(2)?, padded);

    Ok(())
}
