//! Bitcodec CLI - inspect byte-order encodings and bit patterns.
//!
//! This is the main entry point for the bitcodec command-line application.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use bitcodec::prelude::*;

/// Bitcodec - byte-order aware numeric and bit codec
#[derive(Parser)]
#[command(name = "bitcodec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Byte order (big, little, network, native)
    #[arg(short, long, global = true, env = "BITCODEC_ORDER", default_value = "little")]
    order: ByteOrder,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Fixed-width value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Int,
    Long,
    Float,
    Double,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a value into bytes
    Encode {
        /// Value kind
        #[arg(short, long, value_enum)]
        kind: Kind,

        /// Value (decimal, 0x hex or 0b binary for integers)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Decode a value from hex bytes
    Decode {
        /// Value kind
        #[arg(short, long, value_enum)]
        kind: Kind,

        /// Bytes as hex, e.g. "0d0c0b0a" or "0d 0c 0b 0a"
        hex: String,

        /// Offset of the value within the bytes
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },

    /// Combine two 32-bit halves into a 64-bit value
    Halves {
        /// High half
        #[arg(allow_hyphen_values = true)]
        high: String,

        /// Low half
        #[arg(allow_hyphen_values = true)]
        low: String,
    },

    /// Render a 64-bit register as a bit string
    Bits {
        /// Register value
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Number of bits to render
        #[arg(short, long, default_value_t = 64)]
        bits: u32,

        /// Render the lowest bits instead of the highest
        #[arg(long)]
        last: bool,
    },

    /// Reverse the bits of a 64-bit register
    Reverse {
        /// Register value
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Number of bits to reverse
        #[arg(short, long)]
        max_bits: u32,

        /// Reverse the highest bits instead of the lowest
        #[arg(long)]
        left: bool,
    },

    /// Parse a bit string into bytes or a 64-bit register
    ParseBits {
        /// Bit string, most-significant bit first
        bits: String,

        /// Pack into a 64-bit register instead of bytes
        #[arg(long)]
        long: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let codec = bitcodec::get(cli.order);
    debug!(order = %codec.order(), "selected codec");

    match cli.command {
        Commands::Encode { kind, value } => cmd_encode(codec, kind, &value)?,
        Commands::Decode { kind, hex, offset } => cmd_decode(codec, kind, &hex, offset)?,
        Commands::Halves { high, low } => cmd_halves(codec, &high, &low)?,
        Commands::Bits { value, bits, last } => cmd_bits(codec, &value, bits, last)?,
        Commands::Reverse { value, max_bits, left } => cmd_reverse(codec, &value, max_bits, left)?,
        Commands::ParseBits { bits, long } => cmd_parse_bits(codec, &bits, long)?,
    }

    Ok(())
}

fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_encode(codec: &dyn ByteOrderCodec, kind: Kind, value: &str) -> Result<()> {
    debug!(?kind, value, "encoding");

    let bytes: Vec<u8> = match kind {
        Kind::Int => codec.encode_int(parse_int(value)?).to_vec(),
        Kind::Long => codec.encode_long(parse_register(value)? as i64).to_vec(),
        Kind::Float => {
            let v: f32 = value.parse().with_context(|| format!("invalid float: {value}"))?;
            codec.encode_float(v).to_vec()
        }
        Kind::Double => {
            let v: f64 = value.parse().with_context(|| format!("invalid double: {value}"))?;
            codec.encode_double(v).to_vec()
        }
    };

    println!("order: {}", codec.order());
    println!("bytes: {}", format_hex(&bytes));
    println!("bits:  {}", codec.bytes_to_bit_string(&bytes));

    Ok(())
}

fn cmd_decode(codec: &dyn ByteOrderCodec, kind: Kind, hex: &str, offset: usize) -> Result<()> {
    let bytes = parse_hex(hex)?;
    debug!(?kind, len = bytes.len(), offset, "decoding");

    let rendered = match kind {
        Kind::Int => {
            let v = codec.to_int(&bytes, offset).context("Failed to decode int")?;
            format!("{v} (0x{:08x})", v as u32)
        }
        Kind::Long => {
            let v = codec.to_long(&bytes, offset).context("Failed to decode long")?;
            format!("{v} (0x{:016x})", v as u64)
        }
        Kind::Float => {
            let v = codec.to_float(&bytes, offset).context("Failed to decode float")?;
            format!("{v:?} (bits 0x{:08x})", v.to_bits())
        }
        Kind::Double => {
            let v = codec.to_double(&bytes, offset).context("Failed to decode double")?;
            format!("{v:?} (bits 0x{:016x})", v.to_bits())
        }
    };

    println!("{rendered}");

    Ok(())
}

fn cmd_halves(codec: &dyn ByteOrderCodec, high: &str, low: &str) -> Result<()> {
    let v = codec.long_from_halves(parse_int(high)?, parse_int(low)?);
    println!("{v} (0x{:016x})", v as u64);
    Ok(())
}

fn cmd_bits(codec: &dyn ByteOrderCodec, value: &str, bits: u32, last: bool) -> Result<()> {
    let v = parse_register(value)?;
    let rendered = if last {
        codec.to_last_bit_string(v, bits)?
    } else {
        codec.to_bit_string(v, bits)?
    };
    println!("{rendered}");
    Ok(())
}

fn cmd_reverse(codec: &dyn ByteOrderCodec, value: &str, max_bits: u32, left: bool) -> Result<()> {
    let v = parse_register(value)?;
    let reversed = if left {
        codec.reverse_left(v, max_bits)?
    } else {
        codec.reverse(v, max_bits)?
    };
    debug!(value = v, max_bits, left, reversed, "reversed");

    println!("0x{reversed:016x}");
    println!("{}", codec.to_bit_string64(reversed));
    Ok(())
}

fn cmd_parse_bits(codec: &dyn ByteOrderCodec, bits: &str, long: bool) -> Result<()> {
    if long {
        let v = codec
            .from_bit_string_to_long(bits)
            .context("Failed to pack bit string")?;
        println!("0x{v:016x}");
    } else {
        println!("{}", format_hex(&codec.from_bit_string(bits)));
    }
    Ok(())
}

/// Parse a register value: decimal (optionally negative), `0x` hex or `0b` binary.
fn parse_register(s: &str) -> Result<u64> {
    let cleaned = s.trim().replace('_', "");
    let parsed = if let Some(hex) = cleaned.strip_prefix("0x").or_else(|| cleaned.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else if let Some(bin) = cleaned.strip_prefix("0b").or_else(|| cleaned.strip_prefix("0B")) {
        u64::from_str_radix(bin, 2)
    } else if cleaned.starts_with('-') {
        cleaned.parse::<i64>().map(|v| v as u64)
    } else {
        cleaned.parse::<u64>()
    };
    parsed.with_context(|| format!("invalid register value: {s}"))
}

/// Parse a 32-bit value, accepting both signed and unsigned spellings.
fn parse_int(s: &str) -> Result<i32> {
    let v = parse_register(s)?;
    if v <= u32::MAX as u64 {
        return Ok(v as u32 as i32);
    }
    match i32::try_from(v as i64) {
        Ok(v) => Ok(v),
        Err(_) => bail!("value does not fit into 32 bits: {s}"),
    }
}

fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: String = s
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '_')
        .collect();

    if digits.len() % 2 != 0 {
        bail!("hex string has an odd number of digits: {s}");
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .with_context(|| format!("invalid hex byte at position {i}"))
        })
        .collect()
}

fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
