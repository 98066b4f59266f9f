/*
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use alloc::string::String;
use alloc::vec::Vec;

use arbitrary::Arbitrary;

use crate::prelude::*;

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    commands: Vec<RandomCommand>,
}

#[derive(Arbitrary, Debug, Clone)]
enum RandomCommand {
    Bool(bool),
    U8(u8, u32),
    U16(u16, u32),
    U32(u32, u32),
    U64(u64, u32),
    I8(i8, u32),
    I16(i16, u32),
    I32(i32, u32),
    I64(i64, u32),
    F32(u32),
    F64(u64),
    Char(u16),
    Bytes(Vec<u8>, u32),
    SignedBytes(Vec<i8>, u32),
    Utf8(String),
    Ascii(String),
    Align(u64),
}

macro_rules! clamp_unsigned {
    ($value:expr, $width:expr, $bits:literal) => {{
        *$width = 1 + *$width % $bits;
        if *$width < $bits {
            *$value &= (1 << *$width) - 1;
        }
    }};
}

macro_rules! clamp_signed {
    ($value:expr, $width:expr, $bits:literal) => {{
        *$width = 1 + *$width % $bits;
        // truncate, then sign-extend, so the value is representable
        *$value = (*$value << ($bits - *$width)) >> ($bits - *$width);
    }};
}

pub fn harness(data: FuzzCase) {
    let mut data = data;
    for command in &mut data.commands {
        match command {
            RandomCommand::Bool(_) => {}
            RandomCommand::U8(value, width) => clamp_unsigned!(value, width, 8),
            RandomCommand::U16(value, width) => clamp_unsigned!(value, width, 16),
            RandomCommand::U32(value, width) => clamp_unsigned!(value, width, 32),
            RandomCommand::U64(value, width) => clamp_unsigned!(value, width, 64),
            RandomCommand::I8(value, width) => clamp_signed!(value, width, 8),
            RandomCommand::I16(value, width) => clamp_signed!(value, width, 16),
            RandomCommand::I32(value, width) => clamp_signed!(value, width, 32),
            RandomCommand::I64(value, width) => clamp_signed!(value, width, 64),
            RandomCommand::F32(_) | RandomCommand::F64(_) => {}
            RandomCommand::Char(unit) => {
                if (0xD800..=0xDFFF).contains(unit) {
                    *unit &= 0x07FF;
                }
            }
            RandomCommand::Bytes(bytes, range) => {
                *range = 1 + *range % 8;
                bytes.truncate(63);
                for byte in bytes {
                    *byte &= 0xFF >> (8 - *range);
                }
            }
            RandomCommand::SignedBytes(bytes, range) => {
                *range = 1 + *range % 8;
                bytes.truncate(63);
                for byte in bytes {
                    *byte = (*byte << (8 - *range)) >> (8 - *range);
                }
            }
            RandomCommand::Utf8(string) => {
                while string.len() > 48 {
                    string.pop();
                }
            }
            RandomCommand::Ascii(string) => {
                string.retain(|c| c.is_ascii());
                while string.len() > 48 {
                    string.pop();
                }
            }
            RandomCommand::Align(boundary) => *boundary = 1 + *boundary % 8,
        };
    }

    const SCALE: u32 = 6;

    let mut buffer = Vec::new();
    let mut paddings = Vec::new();
    // write
    {
        let mut writer = BitWriter::new(MemByteWriterVec::new(&mut buffer));
        for command in data.commands.iter() {
            match command {
                RandomCommand::Bool(value) => writer.write_bool(*value).unwrap(),
                RandomCommand::U8(value, width) => writer.write_u8(*value, *width).unwrap(),
                RandomCommand::U16(value, width) => writer.write_u16(*value, *width).unwrap(),
                RandomCommand::U32(value, width) => writer.write_u32(*value, *width).unwrap(),
                RandomCommand::U64(value, width) => writer.write_u64(*value, *width).unwrap(),
                RandomCommand::I8(value, width) => writer.write_i8(*value, *width).unwrap(),
                RandomCommand::I16(value, width) => writer.write_i16(*value, *width).unwrap(),
                RandomCommand::I32(value, width) => writer.write_i32(*value, *width).unwrap(),
                RandomCommand::I64(value, width) => writer.write_i64(*value, *width).unwrap(),
                RandomCommand::F32(bits) => writer.write_f32(f32::from_bits(*bits)).unwrap(),
                RandomCommand::F64(bits) => writer.write_f64(f64::from_bits(*bits)).unwrap(),
                RandomCommand::Char(unit) => {
                    writer.write_char(char::from_u32(*unit as u32).unwrap()).unwrap()
                }
                RandomCommand::Bytes(bytes, range) => {
                    writer.write_bytes(bytes, SCALE, *range).unwrap()
                }
                RandomCommand::SignedBytes(bytes, range) => {
                    writer.write_signed_bytes(bytes, SCALE, *range).unwrap()
                }
                RandomCommand::Utf8(string) => writer.write_string(string, 32).unwrap(),
                RandomCommand::Ascii(string) => writer.write_ascii(string, 32).unwrap(),
                RandomCommand::Align(boundary) => {
                    paddings.push(writer.align(*boundary).unwrap());
                }
            };
        }
        writer.align(1).unwrap();
    }

    // read back and check
    {
        let mut reader = BitReader::new(MemByteReader::new(&buffer));
        let mut paddings = paddings.iter();
        for command in data.commands.iter() {
            match command {
                RandomCommand::Bool(value) => assert_eq!(reader.read_bool().unwrap(), *value),
                RandomCommand::U8(value, width) => {
                    assert_eq!(reader.read_u8(*width).unwrap(), *value)
                }
                RandomCommand::U16(value, width) => {
                    assert_eq!(reader.read_u16(*width).unwrap(), *value)
                }
                RandomCommand::U32(value, width) => {
                    assert_eq!(reader.read_u32(*width).unwrap(), *value)
                }
                RandomCommand::U64(value, width) => {
                    assert_eq!(reader.read_u64(*width).unwrap(), *value)
                }
                RandomCommand::I8(value, width) => {
                    assert_eq!(reader.read_i8(*width).unwrap(), *value)
                }
                RandomCommand::I16(value, width) => {
                    assert_eq!(reader.read_i16(*width).unwrap(), *value)
                }
                RandomCommand::I32(value, width) => {
                    assert_eq!(reader.read_i32(*width).unwrap(), *value)
                }
                RandomCommand::I64(value, width) => {
                    assert_eq!(reader.read_i64(*width).unwrap(), *value)
                }
                RandomCommand::F32(bits) => {
                    assert_eq!(reader.read_f32().unwrap().to_bits(), *bits)
                }
                RandomCommand::F64(bits) => {
                    assert_eq!(reader.read_f64().unwrap().to_bits(), *bits)
                }
                RandomCommand::Char(unit) => {
                    assert_eq!(reader.read_char().unwrap() as u32, *unit as u32)
                }
                RandomCommand::Bytes(bytes, range) => {
                    assert_eq!(&reader.read_bytes(SCALE, *range).unwrap(), bytes)
                }
                RandomCommand::SignedBytes(bytes, range) => {
                    assert_eq!(&reader.read_signed_bytes(SCALE, *range).unwrap(), bytes)
                }
                RandomCommand::Utf8(string) => {
                    assert_eq!(&reader.read_string(32).unwrap(), string)
                }
                RandomCommand::Ascii(string) => {
                    assert_eq!(&reader.read_ascii(32).unwrap(), string)
                }
                RandomCommand::Align(boundary) => {
                    assert_eq!(reader.align(*boundary).unwrap(), *paddings.next().unwrap());
                }
            };
        }
    }
}
