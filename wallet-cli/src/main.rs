//! owg: offline wallet generator.
//!
//! Thin front end over `owg-core`: turns a hex seed or BIP-39 phrase into
//! seed bytes, picks a generator and prints the wallet as JSON.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use owg_core::chains::avalanche::AvaxChain;
use owg_core::{generator_for, Coin, GeneratorConfig, PathFamily, Position};
use tracing::debug;
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(name = "owg")]
#[command(version, about = "Derive HD wallet addresses offline.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive addresses for one coin
    Generate(GenerateArgs),
    /// List supported coins and their path families
    Coins,
}

#[derive(Args)]
struct GenerateArgs {
    /// Coin ticker or name (btc, eth, xmr, ...)
    coin: String,

    #[command(flatten)]
    seed: SeedArgs,

    /// BIP-39 passphrase, used with --mnemonic
    #[arg(long, requires = "mnemonic")]
    passphrase: Option<String>,

    /// Account (account/change/index and account-only coins)
    #[arg(short, long)]
    account: Option<u32>,

    /// Change branch (account/change/index coins)
    #[arg(long)]
    change: Option<u32>,

    /// First address index (account/change/index and index-only coins)
    #[arg(short, long)]
    index: Option<u32>,

    /// Number of consecutive addresses
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Include private key text
    #[arg(long)]
    private: bool,

    /// Include public key text
    #[arg(long)]
    public: bool,

    /// Avalanche ledgers to fan out to (X, P, C)
    #[arg(long, value_delimiter = ',')]
    chains: Vec<String>,

    /// JSON generator config; flags override it
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SeedArgs {
    /// Seed as hex (16..=64 bytes)
    #[arg(long)]
    seed: Option<String>,

    /// BIP-39 mnemonic phrase
    #[arg(long)]
    mnemonic: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate(args),
        Commands::Coins => list_coins(),
    }
}

/// Derive and print one wallet.
fn generate(args: GenerateArgs) -> Result<()> {
    let coin: Coin = args.coin.parse()?;
    let config = load_config(&args)?;
    let seed = resolve_seed(&args.seed, args.passphrase.as_deref())?;

    let generator = generator_for(coin, &seed, &config)
        .with_context(|| format!("Failed to set up {} generator", coin))?;

    let wallet = match start_position(generator.family(), &args)? {
        None => generator.generate_default_wallet(),
        Some(start) => generator.generate_wallet(start, args.count.unwrap_or(1)),
    }
    .with_context(|| format!("Failed to generate {} wallet", coin))?;

    println!("{}", serde_json::to_string_pretty(&wallet)?);
    Ok(())
}

fn list_coins() -> Result<()> {
    for coin in Coin::ALL {
        println!("{:<5} {:<10} {}", coin.ticker(), coin.name(), coin.family());
    }
    Ok(())
}

/// Config file (if any) with command-line flags layered on top.
fn load_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };

    config.include_private_key |= args.private;
    config.include_public_key |= args.public;
    if !args.chains.is_empty() {
        config.avalanche_chains = args
            .chains
            .iter()
            .map(|c| c.parse::<AvaxChain>())
            .collect::<Result<_, _>>()?;
    }

    debug!(?config, "resolved generator config");
    Ok(config)
}

fn resolve_seed(args: &SeedArgs, passphrase: Option<&str>) -> Result<Zeroizing<Vec<u8>>> {
    if let Some(seed) = &args.seed {
        let bytes = hex::decode(seed.trim()).context("Seed is not valid hex")?;
        return Ok(Zeroizing::new(bytes));
    }

    let Some(phrase) = &args.mnemonic else {
        bail!("Provide --seed or --mnemonic");
    };
    let mnemonic = bip39::Mnemonic::parse(phrase.trim()).context("Invalid BIP-39 mnemonic")?;
    Ok(Zeroizing::new(
        mnemonic.to_seed(passphrase.unwrap_or_default()).to_vec(),
    ))
}

/// `None` when no position flag was given, meaning the default wallet.
fn start_position(family: PathFamily, args: &GenerateArgs) -> Result<Option<Position>> {
    if args.account.is_none()
        && args.change.is_none()
        && args.index.is_none()
        && args.count.is_none()
    {
        return Ok(None);
    }

    let position = match family {
        PathFamily::AccountChangeIndex => Position::AccountChangeIndex {
            account: args.account.unwrap_or(0),
            change: args.change.unwrap_or(0),
            index: args.index.unwrap_or(0),
        },
        PathFamily::IndexOnly => {
            if args.account.is_some() || args.change.is_some() {
                bail!("--account and --change do not apply to {} coins", family);
            }
            Position::Index {
                index: args.index.unwrap_or(0),
            }
        }
        PathFamily::AccountOnly => {
            if args.change.is_some() || args.index.is_some() {
                bail!("--change and --index do not apply to {} coins", family);
            }
            Position::Account {
                account: args.account.unwrap_or(0),
            }
        }
    };

    Ok(Some(position))
}
