//! Command-line interface for `blockcipher`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use blockcipher_binding::{blockcipher, Mode};
use blockcipher_core::{block_from_slice, expand_key, Aes128, Aes128Key, Block, RoundKeys};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Single-block AES-128 CLI.
#[derive(Parser)]
#[command(
    name = "blockcipher",
    version,
    author,
    about = "Encrypt or decrypt a single 16-byte block with AES-128"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the round keys come from.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeySource {
    /// AES-128 key as 32 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
    /// Schedule file written by `expand`.
    #[arg(long, value_name = "FILE")]
    schedule: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block.
    Enc {
        #[command(flatten)]
        key: KeySource,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one block.
    Dec {
        #[command(flatten)]
        key: KeySource,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Expand a key and cache its round keys in a file.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Output path for the serialized schedule.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
    },
    /// Run the known-answer vector and random round trips.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt and decrypt a random block under a random key.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

const KAT_KEY: &str = "000102030405060708090a0b0c0d0e0f";
const KAT_PLAIN: &str = "00112233445566778899aabbccddeeff";
const KAT_CIPHER: &str = "69c4e0d86a7b0430d8cdb78070b4c55a";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { key, block_hex } => cmd_block(Mode::Encrypt, &key, &block_hex),
        Commands::Dec { key, block_hex } => cmd_block(Mode::Decrypt, &key, &block_hex),
        Commands::Expand { key_hex, out } => cmd_expand(&key_hex, &out),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_block(mode: Mode, source: &KeySource, block_hex: &str) -> Result<()> {
    let cipher = load_cipher(source)?;
    let block = parse_block_hex(block_hex)?;
    let output = mode.apply(&cipher, &block);
    debug!("{mode:?} {} -> {}", hex::encode(block), hex::encode(output));
    println!("{}", hex::encode(output));
    Ok(())
}

fn cmd_expand(key_hex: &str, out: &Path) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let round_keys = expand_key(&key);
    write_schedule(&round_keys, out)?;
    info!("wrote round keys to {}", out.display());
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let key = parse_key_hex(KAT_KEY)?;
    let aes = Aes128::new(&key);
    let plain = parse_block_hex(KAT_PLAIN)?;
    let ct = aes.encrypt_block(&plain);
    if hex::encode(ct) != KAT_CIPHER {
        bail!("known-answer encryption mismatch: got {}", hex::encode(ct));
    }
    if aes.decrypt_block(&ct) != plain {
        bail!("known-answer decryption mismatch");
    }
    info!("known-answer vector ok");

    let mut rng = seeded_rng(seed);
    for sample in 0..samples {
        let mut key_bytes = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        rng.fill_bytes(&mut block);

        let aes = Aes128::new(&Aes128Key::from(key_bytes));
        let expected = aes.encrypt_block(&block);

        let key_ints = to_ints(&key_bytes);
        let ct = blockcipher(&key_ints, &to_ints(&block), i64::from(Mode::Encrypt))
            .context("encrypt through binding")?;
        if ct != to_ints(&expected) {
            bail!("sample {sample}: binding and core disagree");
        }
        let pt = blockcipher(&key_ints, &ct, i64::from(Mode::Decrypt))
            .context("decrypt through binding")?;
        if pt != to_ints(&block) {
            bail!("sample {sample}: round trip failed");
        }
    }
    info!("{samples} random round trips ok");
    println!("ok");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let aes = Aes128::new(&Aes128Key::from(key_bytes));

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    let ciphertext = aes.encrypt_block(&block);
    let decrypted = aes.decrypt_block(&ciphertext);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn load_cipher(source: &KeySource) -> Result<Aes128> {
    match (&source.key_hex, &source.schedule) {
        (Some(key_hex), _) => Ok(Aes128::new(&parse_key_hex(key_hex)?)),
        (None, Some(path)) => Ok(Aes128::from_round_keys(read_schedule(path)?)),
        (None, None) => bail!("either --key-hex or --schedule is required"),
    }
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice())
        .context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    block_from_slice(&bytes).context("block must be 16 bytes (32 hex characters)")
}

fn write_schedule(round_keys: &RoundKeys, path: &Path) -> Result<()> {
    let bytes = bincode::serialize(round_keys).context("serialize round keys")?;
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

fn read_schedule(path: &Path) -> Result<RoundKeys> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    bincode::deserialize(&bytes).context("deserialize round keys")
}

fn to_ints(bytes: &[u8]) -> Vec<i64> {
    bytes.iter().map(|&b| i64::from(b)).collect()
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}
