/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Bit-exact fixtures: these byte sequences are the wire format, and any
//! change that alters them is a compatibility break.

use bitgrain::prelude::*;

#[test]
fn test_packing_fixture() -> Result<(), anyhow::Error> {
    let mut bytes = Vec::new();
    let mut writer = BitWriter::new(MemByteWriterVec::new(&mut bytes));

    writer.write_bool(false)?;
    // -72 truncated to 9 bits, i.e. 0b1_1011_1000
    writer.write_u16(-72i16 as u16, 9)?;
    writer.write_bool(true)?;
    writer.write_u64(99, 33)?;
    assert_eq!(writer.align(4)?, 20);
    assert_eq!(writer.byte_count(), 8);
    drop(writer);

    assert_eq!(
        bytes,
        [
            0b0110_1110,
            0b0010_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0110,
            0b0011_0000,
            0b0000_0000,
            0b0000_0000,
        ]
    );

    let mut reader = BitReader::new(MemByteReader::new(&bytes));
    assert!(!reader.read_bool()?);
    assert_eq!(reader.read_u16(9)?, 0b1_1011_1000);
    assert!(reader.read_bool()?);
    assert_eq!(reader.read_u64(33)?, 99);
    assert_eq!(reader.align(4)?, 20);
    assert_eq!(reader.byte_count(), 8);

    // the same nine bits, read as a signed field, are the original -72:
    // one sign bit plus the low eight bits of the two's complement
    let mut reader = BitReader::new(MemByteReader::new(&bytes));
    reader.read_bool()?;
    assert_eq!(reader.read_i16(9)?, -72);
    Ok(())
}

#[test]
fn test_msb_first_within_byte() -> Result<(), anyhow::Error> {
    let mut bytes = Vec::new();
    let mut writer = BitWriter::new(MemByteWriterVec::new(&mut bytes));
    writer.write_bool(true)?;
    writer.write_u8(0, 7)?;
    drop(writer);
    // the first bit written is the top bit of the first byte
    assert_eq!(bytes, [0b1000_0000]);
    Ok(())
}

#[test]
fn test_sign_bit_is_top_bit() -> Result<(), anyhow::Error> {
    let mut bytes = Vec::new();
    let mut writer = BitWriter::new(MemByteWriterVec::new(&mut bytes));
    writer.write_i8(-1, 4)?;
    writer.write_i8(5, 4)?;
    drop(writer);
    // -1 is sign bit 1 plus magnitude bits 111; 5 is 0 plus 101
    assert_eq!(bytes, [0b1111_0101]);

    let mut reader = BitReader::new(MemByteReader::new(&bytes));
    assert_eq!(reader.read_i8(4)?, -1);
    assert_eq!(reader.read_i8(4)?, 5);
    Ok(())
}

#[test]
fn test_straddle_byte_boundary() -> Result<(), anyhow::Error> {
    let mut bytes = Vec::new();
    let mut writer = BitWriter::new(MemByteWriterVec::new(&mut bytes));
    writer.write_u8(0b101, 3)?;
    writer.write_u16(0x1FF, 9)?;
    writer.write_u8(0b1111, 4)?;
    drop(writer);
    assert_eq!(bytes, [0b1011_1111, 0b1111_1111]);

    let mut reader = BitReader::new(MemByteReader::new(&bytes));
    assert_eq!(reader.read_u8(3)?, 0b101);
    assert_eq!(reader.read_u16(9)?, 0x1FF);
    assert_eq!(reader.read_u8(4)?, 0b1111);
    Ok(())
}

#[test]
fn test_chunked_composition_is_big_endian() -> Result<(), anyhow::Error> {
    let mut bytes = Vec::new();
    let mut writer = BitWriter::new(MemByteWriterVec::new(&mut bytes));
    writer.write_u64(0x0123_4567_89AB_CDEF, 64)?;
    writer.write_u32(0xCAFE_BABE, 32)?;
    writer.write_u16(0xBEEF, 16)?;
    drop(writer);
    assert_eq!(
        bytes,
        [
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, //
            0xCA, 0xFE, 0xBA, 0xBE, //
            0xBE, 0xEF,
        ]
    );
    Ok(())
}

#[test]
fn test_alignment_symmetry() -> Result<(), anyhow::Error> {
    for prior_bits in 0..16 {
        for boundary in 1..=4 {
            let mut bytes = Vec::new();
            let mut writer = BitWriter::new(MemByteWriterVec::new(&mut bytes));
            for _ in 0..prior_bits {
                writer.write_bool(true)?;
            }
            let padded = writer.align(boundary)?;
            let writer_count = writer.byte_count();
            assert_eq!(writer_count % boundary, 0);
            drop(writer);

            let mut reader = BitReader::new(MemByteReader::new(&bytes));
            for _ in 0..prior_bits {
                reader.read_bool()?;
            }
            assert_eq!(reader.align(boundary)?, padded);
            assert_eq!(reader.byte_count(), writer_count);
            assert_eq!(reader.byte_count() % boundary, 0);
        }
    }
    Ok(())
}

#[test]
fn test_monotonic_counters() -> Result<(), anyhow::Error> {
    let mut bytes = Vec::new();
    let mut writer = BitWriter::new(MemByteWriterVec::new(&mut bytes));
    let mut last = 0;
    for width in 1..=64 {
        writer.write_u64(u64::MAX >> (64 - width), width)?;
        assert!(writer.byte_count() >= last);
        last = writer.byte_count();
    }
    writer.align(8)?;
    assert_eq!(writer.byte_count() % 8, 0);
    drop(writer);

    let mut reader = BitReader::new(MemByteReader::new(&bytes));
    let mut last = 0;
    for width in 1..=64 {
        reader.read_u64(width)?;
        assert!(reader.byte_count() >= last);
        last = reader.byte_count();
    }
    reader.align(8)?;
    assert_eq!(reader.byte_count() % 8, 0);
    Ok(())
}

#[test]
fn test_align_reports_zero_when_aligned() -> Result<(), anyhow::Error> {
    let mut bytes = Vec::new();
    let mut writer = BitWriter::new(MemByteWriterVec::new(&mut bytes));
    writer.write_u32(0xFFFF_FFFF, 32)?;
    assert_eq!(writer.align(2)?, 0);
    assert_eq!(writer.align(4)?, 0);
    drop(writer);

    let mut reader = BitReader::new(MemByteReader::new(&bytes));
    reader.read_u32(32)?;
    assert_eq!(reader.align(2)?, 0);
    assert_eq!(reader.align(4)?, 0);
    Ok(())
}
