use base_n::{VariantsConfig, decode, encode};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "base-n")]
#[command(about = "Encode and decode binary data with configurable base-N alphabets", long_about = None)]
struct Cli {
    /// Variant to use for encoding/decoding
    #[arg(short, long, default_value = "base64")]
    variant: String,

    /// File to encode/decode (if not provided, reads from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// List available variants
    #[arg(short, long)]
    list: bool,

    /// Do not insert CRLF line breaks every 76 output characters
    #[arg(long)]
    no_wrap: bool,

    /// Do not pad the final group with '='
    #[arg(long)]
    no_pad: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load variant configuration with user overrides
    let config = VariantsConfig::load_with_overrides()?;

    if cli.list {
        println!("Available variants:\n");
        let mut variants: Vec<_> = config.variants.iter().collect();
        variants.sort_by_key(|(name, _)| *name);

        for (name, variant) in variants {
            let base = variant.chars.chars().count();
            let preview: String = variant.chars.chars().take(20).collect();
            let suffix = if base > 20 { "..." } else { "" };
            let wrap = if variant.chunked { "wrap" } else { "    " };
            let pad = if variant.padding { "pad" } else { "   " };
            println!(
                "  {:<12} base-{:<3} {}/{} {} {}  {}{}",
                name, base, variant.group, variant.bits, wrap, pad, preview, suffix
            );
        }
        return Ok(());
    }

    let variant = config.get_variant(&cli.variant).ok_or_else(|| {
        format!(
            "Variant '{}' not found. Use --list to see available variants.",
            cli.variant
        )
    })?;

    for name in variant.ignored_options() {
        eprintln!(
            "Warning: ignoring unknown option '{}' for variant '{}'",
            name, cli.variant
        );
    }

    let mut codec = variant
        .build()
        .map_err(|e| format!("Invalid variant '{}': {}", cli.variant, e))?;
    if cli.no_wrap {
        codec.set_chunked(false);
    }
    if cli.no_pad {
        codec.set_padding(false);
    }

    // Read input data
    let input_data = if let Some(file_path) = cli.file {
        fs::read(&file_path)?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    if cli.decode {
        let input_str =
            String::from_utf8(input_data).map_err(|_| "Input must be valid UTF-8 for decoding")?;
        let decoded = decode(input_str.trim(), &codec).map_err(|e| e.to_string())?;
        io::stdout().write_all(&decoded)?;
    } else {
        let encoded = encode(&input_data, &codec).map_err(|e| e.to_string())?;
        println!("{}", encoded);
    }

    Ok(())
}
