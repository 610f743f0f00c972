//! LEB128 variable-length integers, as used throughout the binary format.
//!
//! 32-bit values go through the 64-bit routines. Widening is lossless and the
//! shortest encoding of a value does not depend on the width it came from.

use super::*;

pub fn write_unsigned<S: Sink + ?Sized>(w: &mut S, value: u64) {
    let mut x = value;
    loop {
        let mut b = (x & 0x7f) as u8;
        x >>= 7;
        if x != 0 {
            b |= 0x80;
        }
        w.write_byte(b);
        if x == 0 {
            break;
        }
    }
}

pub fn write_signed<S: Sink + ?Sized>(w: &mut S, value: i64) {
    let mut x = value;
    loop {
        let b = (x & 0x7f) as u8;
        // arithmetic shift, keeps the sign
        x >>= 7;
        if (x == 0 && b & 0x40 == 0) || (x == -1 && b & 0x40 == 0x40) {
            w.write_byte(b);
            break;
        }
        w.write_byte(b | 0x80);
    }
}

pub fn encode_unsigned(value: u64) -> Vec<u8> {
    let mut bytes: Vec<u8> = Vec::new();
    write_unsigned(&mut bytes, value);
    bytes
}

pub fn encode_signed(value: i64) -> Vec<u8> {
    let mut bytes: Vec<u8> = Vec::new();
    write_signed(&mut bytes, value);
    bytes
}

/// Number of bytes `write_unsigned` emits for `value`.
pub fn unsigned_size(value: u64) -> usize {
    let mut x = value >> 7;
    let mut size = 1;
    while x != 0 {
        x >>= 7;
        size += 1;
    }
    size
}
