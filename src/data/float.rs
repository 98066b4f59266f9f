/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! IEEE 754 floating-point values.
//!
//! A float travels as the full-width signed integer sharing its bit
//! pattern; there is no separate bit algorithm, so every payload —
//! infinities, NaNs, signed zeros — round-trips exactly.

use crate::traits::*;

/// Trait for reading floating-point values.
pub trait FloatRead: BitRead {
    fn read_f32(&mut self) -> Result<f32, Self::Error>;
    fn read_f64(&mut self) -> Result<f64, Self::Error>;
}

impl<B: BitRead> FloatRead for B {
    #[inline]
    fn read_f32(&mut self) -> Result<f32, Self::Error> {
        Ok(f32::from_bits(self.read_i32(32)? as u32))
    }

    #[inline]
    fn read_f64(&mut self) -> Result<f64, Self::Error> {
        Ok(f64::from_bits(self.read_i64(64)? as u64))
    }
}

/// Trait for writing floating-point values.
pub trait FloatWrite: BitWrite {
    fn write_f32(&mut self, value: f32) -> Result<(), Self::Error>;
    fn write_f64(&mut self, value: f64) -> Result<(), Self::Error>;
}

impl<B: BitWrite> FloatWrite for B {
    #[inline]
    fn write_f32(&mut self, value: f32) -> Result<(), Self::Error> {
        self.write_i32(value.to_bits() as i32, 32)
    }

    #[inline]
    fn write_f64(&mut self, value: f64) -> Result<(), Self::Error> {
        self.write_i64(value.to_bits() as i64, 64)
    }
}
