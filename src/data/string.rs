/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Strings as length-prefixed byte arrays.
//!
//! [`StringWrite::write_string`] stores the UTF-8 bytes of the string at
//! full byte width; invalid sequences on the read side decode lossily, the
//! way [`String::from_utf8_lossy`] does. The dedicated ASCII path packs one
//! character per seven bits instead, masking anything outside the ASCII
//! range to its low seven bits.

use alloc::string::String;

use crate::data::bytes::{BytesRead, BytesWrite};
use crate::traits::*;

/// Trait for reading strings.
pub trait StringRead: BitRead {
    /// Read a `scale`-bit length, then that many bytes of UTF-8.
    fn read_string(&mut self, scale: u32) -> Result<String, Self::Error>;

    /// Read a `scale`-bit length, then that many seven-bit-packed ASCII
    /// characters.
    fn read_ascii(&mut self, scale: u32) -> Result<String, Self::Error>;
}

impl<B: BitRead> StringRead for B {
    fn read_string(&mut self, scale: u32) -> Result<String, Self::Error> {
        let bytes = self.read_bytes(scale, 8)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn read_ascii(&mut self, scale: u32) -> Result<String, Self::Error> {
        let bytes = self.read_bytes(scale, 7)?;
        Ok(bytes.into_iter().map(char::from).collect())
    }
}

/// Trait for writing strings.
pub trait StringWrite: BitWrite {
    /// Write a `scale`-bit length, then the UTF-8 bytes of `string`.
    fn write_string(&mut self, string: &str, scale: u32) -> Result<(), Self::Error>;

    /// Write a `scale`-bit length, then one seven-bit element per byte of
    /// `string`.
    fn write_ascii(&mut self, string: &str, scale: u32) -> Result<(), Self::Error>;
}

impl<B: BitWrite> StringWrite for B {
    fn write_string(&mut self, string: &str, scale: u32) -> Result<(), Self::Error> {
        self.write_bytes(string.as_bytes(), scale, 8)
    }

    fn write_ascii(&mut self, string: &str, scale: u32) -> Result<(), Self::Error> {
        self.write_bytes(string.as_bytes(), scale, 7)
    }
}
