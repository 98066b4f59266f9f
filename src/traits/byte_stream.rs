/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::error::Error;

/// Sequential, streaming byte-by-byte reads.
///
/// This is the only capability a [`BitReader`](crate::impls::BitReader)
/// requires of its transport: produce the next byte, or fail if the
/// transport is exhausted. There is no seeking and no peeking.
pub trait ByteRead {
    type Error: Error + Send + Sync + 'static;

    /// Read a byte and advance the current position.
    fn read_byte(&mut self) -> Result<u8, Self::Error>;
}

/// Sequential, streaming byte-by-byte writes.
///
/// This is the only capability a [`BitWriter`](crate::impls::BitWriter)
/// requires of its transport: accept one byte, or fail if the underlying
/// medium rejects it.
pub trait ByteWrite {
    type Error: Error + Send + Sync + 'static;

    /// Write a byte and advance the current position.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Flush the transport, if it buffers.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<B: ByteRead> ByteRead for &mut B {
    type Error = B::Error;

    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        (**self).read_byte()
    }
}

impl<B: ByteWrite> ByteWrite for &mut B {
    type Error = B::Error;

    #[inline(always)]
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}
