mod codec;
mod config;
mod decode;
mod encode;
mod length;

pub use codec::{Codec, CodecError, CodecOptions, IgnoredOption, ParamError};
pub use config::{VariantConfig, VariantsConfig};
pub use decode::{CharClass, classify, decode_into};
pub use encode::encode_into;
pub use length::{decoded_len, encoded_len};

/// Encodes `data` into a freshly allocated string.
pub fn encode(data: &[u8], codec: &Codec) -> Result<String, CodecError> {
    let mut buf = vec![0u8; encoded_len(data.len(), codec)];
    let written = encode_into(data, &mut buf, codec)?;
    buf.truncate(written);
    // Output is alphabet symbols, '=' and CRLF, all ASCII.
    Ok(String::from_utf8(buf).unwrap())
}

/// Decodes symbol text into a freshly allocated byte vector.
pub fn decode(encoded: &str, codec: &Codec) -> Result<Vec<u8>, CodecError> {
    let data = encoded.as_bytes();
    let mut buf = vec![0u8; decoded_len(data.len(), codec)];
    let written = decode_into(data, &mut buf, codec)?;
    buf.truncate(written);
    Ok(buf)
}
