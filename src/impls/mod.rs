/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of bit readers/writers and byte transports.

If you need to read or write bytes from a file or any backend implementing
[`std::io::Read`] or [`std::io::Write`] you just need to wrap it in a
[`ByteAdapter`]. If instead you want to read or write directly from memory,
you can use [`MemByteReader`], [`MemByteWriter`], and [`MemByteWriterVec`].

Once you have a way to exchange bytes, [`BitReader`] and [`BitWriter`] turn
the byte stream into a bit-granular stream: both keep a single in-flight
byte and a count of its remaining bits, so values of any width can start and
end away from byte boundaries.

*/

mod mem_byte_reader;
pub use mem_byte_reader::*;

mod mem_byte_writer;
pub use mem_byte_writer::*;

#[cfg(feature = "std")]
mod byte_adapter;
#[cfg(feature = "std")]
pub use byte_adapter::*;

mod bit_reader;
pub use bit_reader::BitReader;

mod bit_writer;
pub use bit_writer::BitWriter;
