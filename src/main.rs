use std::io::{self, Read};
use std::process;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use textbook_pk::{Pipeline, PipelineConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scheme {
    Rsa,
    Elgamal,
}

/// Encrypt a short ASCII message with textbook RSA or ElGamal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    #[arg(long, value_enum, default_value_t = Scheme::Rsa)]
    scheme: Scheme,

    /// Seed for reproducible key material
    #[arg(long)]
    seed: Option<u64>,

    /// Print the generated key material
    #[arg(long)]
    show_keys: bool,

    /// Print the raw cipher blocks as hex
    #[arg(long)]
    show_blocks: bool,

    /// Plaintext; read from stdin when omitted
    plaintext: Option<String>,
}

fn run(args: Args) -> anyhow::Result<()> {
    let plaintext = match args.plaintext {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read plaintext from stdin")?;
            buffer
        }
    };

    let mut config = PipelineConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut pipeline = Pipeline::new(config);

    match args.scheme {
        Scheme::Rsa => {
            let outcome = pipeline.rsa_encrypt(&plaintext).context("RSA encryption failed")?;
            if args.show_keys {
                let keys = &outcome.keys;
                println!("p = {}, q = {}", outcome.primes.0, outcome.primes.1);
                println!("encryption key: (n = {}, {})", keys.modulus(), keys.encryption_key.exponent);
                println!("decryption key: (n = {}, {})", keys.modulus(), keys.decryption_key.exponent);
            }
            if args.show_blocks {
                println!("blocks: {}", outcome.blocks.to_hex());
            }
            println!("{}", outcome.ciphertext);
        }
        Scheme::Elgamal => {
            let outcome = pipeline
                .elgamal_encrypt(&plaintext)
                .context("ElGamal encryption failed")?;
            if args.show_keys {
                let public = &outcome.keys.public;
                println!(
                    "public key: (p = {}, g = {}, beta = {})",
                    public.prime, public.generator, public.beta
                );
                println!("private key: d = {}", outcome.keys.private.exponent);
            }
            if args.show_blocks {
                println!("blocks: {}", outcome.blocks.to_hex());
            }
            println!("{}", outcome.ciphertext);
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
