use crate::codec::Codec;
use crate::encode::LINE_WIDTH;

/// Exact output size of encoding `datalen` bytes with padding enabled; an
/// upper bound when padding is disabled. Returns 0 for empty input, which
/// callers must treat as the empty-input condition rather than a valid
/// zero-length encoding.
pub fn encoded_len(datalen: usize, codec: &Codec) -> usize {
    if datalen == 0 {
        return 0;
    }

    let groups = datalen.div_ceil(codec.group());
    let mut len = groups * codec.egroup();
    if codec.chunked() {
        // One CRLF lands after every full line of the symbol stream.
        len += (len - 1) / LINE_WIDTH * 2;
    }

    len
}

/// Upper bound on the output size of decoding `datalen` input bytes.
///
/// Line breaks, pad characters and a short trailing group all reduce the
/// true count, so decode reports the number of bytes actually written.
pub fn decoded_len(datalen: usize, codec: &Codec) -> usize {
    if datalen == 0 {
        return 0;
    }

    datalen.div_ceil(codec.egroup()) * codec.group()
}
