use crate::codec::{Codec, CodecError, PAD};
use crate::length::encoded_len;

/// Output characters per line when chunking is enabled.
pub(crate) const LINE_WIDTH: usize = 76;

/// Tracks the output position and the count of alphabet/pad characters
/// written so far. Line breaks are counted separately so a break lands
/// after every 76th symbol regardless of earlier breaks.
struct SymbolWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    symbols: usize,
    chunked: bool,
}

impl SymbolWriter<'_> {
    fn push(&mut self, symbol: u8) {
        if self.chunked && self.symbols > 0 && self.symbols % LINE_WIDTH == 0 {
            self.buf[self.pos] = b'\r';
            self.buf[self.pos + 1] = b'\n';
            self.pos += 2;
        }
        self.buf[self.pos] = symbol;
        self.pos += 1;
        self.symbols += 1;
    }
}

/// Encodes `data` into `buf`, returning the number of bytes written.
///
/// `buf` must hold at least [`encoded_len`]`(data.len(), codec)` bytes; the
/// caller owns sizing, and an undersized buffer is a programming error.
/// With padding disabled the written count may be below the estimate.
///
/// # Errors
///
/// Returns [`CodecError::EmptyInput`] when `data` is empty.
pub fn encode_into(data: &[u8], buf: &mut [u8], codec: &Codec) -> Result<usize, CodecError> {
    if data.is_empty() {
        return Err(CodecError::EmptyInput);
    }
    let needed = encoded_len(data.len(), codec);
    assert!(
        buf.len() >= needed,
        "output buffer too small: {} < {}",
        buf.len(),
        needed
    );

    let bits = codec.bits();
    let egroup = codec.egroup();
    let mask = codec.mask();
    let table = codec.entable();

    let mut out = SymbolWriter {
        buf,
        pos: 0,
        symbols: 0,
        chunked: codec.chunked(),
    };

    let mut blocks = data.chunks_exact(codec.group());
    for block in &mut blocks {
        // First byte most significant, then egroup fields from the top.
        let mut value = 0u64;
        for &byte in block {
            value = (value << 8) | u64::from(byte);
        }
        for field in (0..egroup as u32).rev() {
            out.push(table[((value >> (field * bits)) & mask) as usize]);
        }
    }

    let left = blocks.remainder();
    if !left.is_empty() {
        let mut value = 0u64;
        for &byte in left {
            value = (value << 8) | u64::from(byte);
        }
        // Zero-fill the low-order bits so the partial block stays aligned to
        // whole symbols.
        let symbols = (left.len() * 8).div_ceil(bits as usize);
        value <<= symbols * bits as usize - left.len() * 8;
        for field in (0..symbols as u32).rev() {
            out.push(table[((value >> (field * bits)) & mask) as usize]);
        }
        if codec.padding() {
            for _ in symbols..egroup {
                out.push(PAD);
            }
        }
    }

    Ok(out.pos)
}
