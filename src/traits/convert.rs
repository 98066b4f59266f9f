/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 */

use crate::data::{CharRead, CharWrite, FloatRead, FloatWrite};
use crate::traits::{BitRead, BitWrite};

/// Explicit bit-stream encoding for application types.
///
/// Primitive implementations write the full width of the type; application
/// types implement this trait by hand, choosing the widths their fields
/// actually need.
///
/// # Example
/// ```
/// use bitgrain::prelude::*;
///
/// struct Header {
///     version: u8,
///     payload_len: u32,
/// }
///
/// impl BitEncode for Header {
///     fn encode<W: BitWrite>(&self, writer: &mut W) -> Result<(), W::Error> {
///         writer.write_u8(self.version, 4)?;
///         writer.write_u32(self.payload_len, 24)
///     }
/// }
///
/// impl BitDecode for Header {
///     fn decode<R: BitRead>(reader: &mut R) -> Result<Self, R::Error> {
///         Ok(Header {
///             version: reader.read_u8(4)?,
///             payload_len: reader.read_u32(24)?,
///         })
///     }
/// }
///
/// let mut bytes = Vec::new();
/// let mut writer = BitWriter::new(MemByteWriterVec::new(&mut bytes));
/// Header { version: 2, payload_len: 512 }.encode(&mut writer).unwrap();
/// writer.align(1).unwrap();
/// drop(writer);
///
/// let mut reader = BitReader::new(MemByteReader::new(&bytes));
/// let header = Header::decode(&mut reader).unwrap();
/// assert_eq!(header.version, 2);
/// assert_eq!(header.payload_len, 512);
/// ```
pub trait BitEncode {
    /// Write `self` to a bit stream.
    fn encode<W: BitWrite>(&self, writer: &mut W) -> Result<(), W::Error>;
}

/// Explicit bit-stream decoding for application types.
pub trait BitDecode: Sized {
    /// Read a value from a bit stream.
    fn decode<R: BitRead>(reader: &mut R) -> Result<Self, R::Error>;
}

macro_rules! impl_convert_int {
    ($($ty:ty, $write:ident, $read:ident, $width:literal);*) => {$(
        impl BitEncode for $ty {
            #[inline]
            fn encode<W: BitWrite>(&self, writer: &mut W) -> Result<(), W::Error> {
                writer.$write(*self, $width)
            }
        }

        impl BitDecode for $ty {
            #[inline]
            fn decode<R: BitRead>(reader: &mut R) -> Result<Self, R::Error> {
                reader.$read($width)
            }
        }
    )*};
}

impl_convert_int!(
    u8, write_u8, read_u8, 8;
    u16, write_u16, read_u16, 16;
    u32, write_u32, read_u32, 32;
    u64, write_u64, read_u64, 64;
    i8, write_i8, read_i8, 8;
    i16, write_i16, read_i16, 16;
    i32, write_i32, read_i32, 32;
    i64, write_i64, read_i64, 64
);

impl BitEncode for bool {
    #[inline]
    fn encode<W: BitWrite>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.write_bool(*self)
    }
}

impl BitDecode for bool {
    #[inline]
    fn decode<R: BitRead>(reader: &mut R) -> Result<Self, R::Error> {
        reader.read_bool()
    }
}

impl BitEncode for f32 {
    #[inline]
    fn encode<W: BitWrite>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.write_f32(*self)
    }
}

impl BitDecode for f32 {
    #[inline]
    fn decode<R: BitRead>(reader: &mut R) -> Result<Self, R::Error> {
        reader.read_f32()
    }
}

impl BitEncode for f64 {
    #[inline]
    fn encode<W: BitWrite>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.write_f64(*self)
    }
}

impl BitDecode for f64 {
    #[inline]
    fn decode<R: BitRead>(reader: &mut R) -> Result<Self, R::Error> {
        reader.read_f64()
    }
}

impl BitEncode for char {
    #[inline]
    fn encode<W: BitWrite>(&self, writer: &mut W) -> Result<(), W::Error> {
        writer.write_char(*self)
    }
}

impl BitDecode for char {
    #[inline]
    fn decode<R: BitRead>(reader: &mut R) -> Result<Self, R::Error> {
        reader.read_char()
    }
}
