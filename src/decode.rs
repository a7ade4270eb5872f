use crate::codec::{Codec, CodecError, PAD};
use crate::length::decoded_len;

/// Classification of one input byte during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Contributes no bits and never fails: CR, LF and the pad character.
    Skip,
    /// Not part of the alphabet; aborts the decode.
    Invalid,
    /// A symbol carrying its value's worth of payload bits.
    Symbol(u8),
}

/// Classifies a byte against the codec's alphabet.
pub fn classify(byte: u8, codec: &Codec) -> CharClass {
    if byte == b'\r' || byte == b'\n' || byte == PAD {
        return CharClass::Skip;
    }
    match codec.symbol_value(byte) {
        Some(value) => CharClass::Symbol(value),
        None => CharClass::Invalid,
    }
}

/// Decodes symbol text from `data` into `buf`, returning the number of
/// bytes written — always at most [`decoded_len`]`(data.len(), codec)`,
/// which is the minimum size `buf` must have.
///
/// Stray CR, LF and pad characters anywhere in the input are tolerated.
///
/// # Errors
///
/// Returns [`CodecError::EmptyInput`] when `data` is empty and
/// [`CodecError::InvalidByte`] on the first byte outside the alphabet.
pub fn decode_into(data: &[u8], buf: &mut [u8], codec: &Codec) -> Result<usize, CodecError> {
    if data.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    let bound = decoded_len(data.len(), codec);
    assert!(
        buf.len() >= bound,
        "output buffer too small: {} < {}",
        buf.len(),
        bound
    );

    let group = codec.group();
    let bits = codec.bits() as usize;
    let egroup = codec.egroup();
    let top = (egroup - 1) * bits;

    let mut acc = 0u64;
    let mut count = 0usize;
    let mut idx = 0usize;

    for &byte in data {
        match classify(byte, codec) {
            CharClass::Skip => continue,
            CharClass::Invalid => return Err(CodecError::InvalidByte(byte)),
            CharClass::Symbol(value) => {
                acc |= (u64::from(value) & codec.mask()) << (top - count * bits);
                count += 1;
                if count == egroup {
                    idx = unpack(acc, group, group, buf, idx);
                    acc = 0;
                    count = 0;
                }
            }
        }
    }

    // Trailing short group, typically because padding was stripped or never
    // present. Flush the whole bytes accumulated so far even when they are
    // all zero; an encoded run of zero bytes must survive the round trip.
    if count > 0 {
        idx = unpack(acc, count * bits / 8, group, buf, idx);
    }

    Ok(idx)
}

/// Unpacks the `bytes` leading bytes of a `group`-wide accumulator.
fn unpack(acc: u64, bytes: usize, group: usize, buf: &mut [u8], mut idx: usize) -> usize {
    for j in 0..bytes {
        buf[idx] = (acc >> (8 * (group - 1 - j))) as u8;
        idx += 1;
    }
    idx
}
