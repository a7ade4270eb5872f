use std::fmt;

/// Pad character appended to align a short trailing group.
pub(crate) const PAD: u8 = b'=';

/// Marks a byte as absent from the alphabet in the inverse table.
const SENTINEL: u8 = 0xff;

/// A block of `group` bytes is packed through a u64 accumulator.
const MAX_GROUP: usize = 8;

/// The two runtime-toggleable codec options, with their documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Insert a CRLF after every 76 output characters.
    pub chunked: bool,
    /// Pad a short trailing group with `=` up to the full symbol count.
    pub padding: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            chunked: true,
            padding: true,
        }
    }
}

/// Errors rejected by the [`Codec`] constructor.
///
/// Every variant describes a structural problem with the requested
/// parameters; a constructed `Codec` is always internally consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// `group` was zero or larger than the packing accumulator allows.
    GroupOutOfRange(usize),
    /// `bits` was outside `1..=7`.
    BitsOutOfRange(u32),
    /// `bits` does not evenly divide `group * 8`, which would desynchronize
    /// encode/decode bit alignment.
    UnevenDivision { group: usize, bits: u32 },
    /// The alphabet does not hold exactly `2^bits` symbols.
    AlphabetSize { expected: usize, actual: usize },
    /// The same symbol appears twice in the alphabet.
    DuplicateSymbol(u8),
    /// The alphabet uses a byte reserved by the wire format (`=`).
    ReservedSymbol(u8),
    /// The alphabet contains a byte outside the printable ASCII range.
    UnprintableSymbol(u8),
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::GroupOutOfRange(group) => {
                write!(f, "group must be in 1..={}, got {}", MAX_GROUP, group)
            }
            ParamError::BitsOutOfRange(bits) => {
                write!(f, "bits per symbol must be in 1..=7, got {}", bits)
            }
            ParamError::UnevenDivision { group, bits } => {
                write!(f, "{} bits per symbol does not divide {} block bits", bits, group * 8)
            }
            ParamError::AlphabetSize { expected, actual } => {
                write!(f, "alphabet must hold {} symbols, got {}", expected, actual)
            }
            ParamError::DuplicateSymbol(symbol) => {
                write!(f, "duplicate symbol in alphabet: {:?}", *symbol as char)
            }
            ParamError::ReservedSymbol(symbol) => {
                write!(f, "symbol {:?} is reserved by the wire format", *symbol as char)
            }
            ParamError::UnprintableSymbol(symbol) => {
                write!(f, "symbol 0x{:02x} is not printable ASCII", symbol)
            }
        }
    }
}

impl std::error::Error for ParamError {}

/// Recoverable transform failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The input was empty; distinct from a successful zero-length transform.
    EmptyInput,
    /// Decode input contained a byte that is neither a skip character nor
    /// part of the alphabet.
    InvalidByte(u8),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::EmptyInput => write!(f, "input is empty"),
            CodecError::InvalidByte(byte) => {
                write!(f, "invalid byte in input: 0x{:02x}", byte)
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Report returned when an option name is not recognized.
///
/// Non-fatal: the codec is left unchanged and remains usable, but callers
/// can surface the name to detect misconfiguration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredOption {
    pub name: String,
}

impl fmt::Display for IgnoredOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ignored unknown option '{}'", self.name)
    }
}

impl std::error::Error for IgnoredOption {}

/// Immutable parameters for one base-N variant.
///
/// A `Codec` packs `group` raw bytes into `egroup` output symbols of `bits`
/// bits each. The same engine realizes base64 (`group = 3, bits = 6`),
/// base32 (`group = 5, bits = 5`) and base16 (`group = 1, bits = 4`) style
/// encodings purely through parameters.
///
/// Construction validates every structural precondition, so any value you
/// hold satisfies the packing invariants. Apart from the two boolean
/// toggles, a `Codec` is never mutated and may be shared freely across
/// concurrent encode/decode calls.
#[derive(Debug, Clone)]
pub struct Codec {
    group: usize,
    bits: u32,
    egroup: usize,
    mask: u64,
    entable: Vec<u8>,
    detable: [u8; 256],
    chunked: bool,
    padding: bool,
}

impl Codec {
    /// Creates a codec with the default options (chunking and padding on).
    ///
    /// # Errors
    ///
    /// Returns a [`ParamError`] if `group` is not in `1..=8`, `bits` is not
    /// in `1..=7`, `bits` does not evenly divide `group * 8`, or the
    /// alphabet is not exactly `2^bits` distinct printable ASCII symbols.
    pub fn new(group: usize, bits: u32, alphabet: &[u8]) -> Result<Self, ParamError> {
        Self::with_options(group, bits, alphabet, CodecOptions::default())
    }

    /// Creates a codec with explicit options.
    ///
    /// The inverse lookup table is derived from `alphabet`, so the two can
    /// never disagree.
    pub fn with_options(
        group: usize,
        bits: u32,
        alphabet: &[u8],
        options: CodecOptions,
    ) -> Result<Self, ParamError> {
        if group == 0 || group > MAX_GROUP {
            return Err(ParamError::GroupOutOfRange(group));
        }
        if !(1..=7).contains(&bits) {
            return Err(ParamError::BitsOutOfRange(bits));
        }
        if (group * 8) % bits as usize != 0 {
            return Err(ParamError::UnevenDivision { group, bits });
        }
        let expected = 1usize << bits;
        if alphabet.len() != expected {
            return Err(ParamError::AlphabetSize {
                expected,
                actual: alphabet.len(),
            });
        }

        let mut detable = [SENTINEL; 256];
        for (value, &symbol) in alphabet.iter().enumerate() {
            if !symbol.is_ascii_graphic() {
                return Err(ParamError::UnprintableSymbol(symbol));
            }
            if symbol == PAD {
                return Err(ParamError::ReservedSymbol(symbol));
            }
            if detable[symbol as usize] != SENTINEL {
                return Err(ParamError::DuplicateSymbol(symbol));
            }
            detable[symbol as usize] = value as u8;
        }

        Ok(Codec {
            group,
            bits,
            egroup: group * 8 / bits as usize,
            mask: (1u64 << bits) - 1,
            entable: alphabet.to_vec(),
            detable,
            chunked: options.chunked,
            padding: options.padding,
        })
    }

    /// Sets an option by name: `"chunked"` or `"padding"`.
    ///
    /// Unknown names leave the codec untouched and are reported through
    /// [`IgnoredOption`] so callers can detect typos.
    pub fn set_option(&mut self, name: &str, enabled: bool) -> Result<(), IgnoredOption> {
        match name {
            "chunked" => self.chunked = enabled,
            "padding" => self.padding = enabled,
            other => {
                return Err(IgnoredOption {
                    name: other.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Toggles CRLF insertion every 76 output characters.
    pub fn set_chunked(&mut self, enabled: bool) {
        self.chunked = enabled;
    }

    /// Toggles `=` padding of a short trailing group.
    pub fn set_padding(&mut self, enabled: bool) {
        self.padding = enabled;
    }

    /// Number of raw bytes consumed per packing unit.
    pub fn group(&self) -> usize {
        self.group
    }

    /// Bits represented by one output symbol.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of symbols produced per `group` bytes.
    pub fn egroup(&self) -> usize {
        self.egroup
    }

    /// Bit mask isolating one symbol's bits.
    pub fn mask(&self) -> u64 {
        self.mask
    }

    pub fn chunked(&self) -> bool {
        self.chunked
    }

    pub fn padding(&self) -> bool {
        self.padding
    }

    /// Looks a byte up in the inverse table.
    ///
    /// Returns `None` for bytes outside the alphabet.
    pub fn symbol_value(&self, byte: u8) -> Option<u8> {
        let value = self.detable[byte as usize];
        if value == SENTINEL { None } else { Some(value) }
    }

    pub(crate) fn entable(&self) -> &[u8] {
        &self.entable
    }
}
