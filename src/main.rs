use std::io::Read;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, trace};

use caesarcrypt::server::{self, ServerConfig, DEFAULT_PORT};
use caesarcrypt::{map_alphabet, validate, Direction, ShiftAmount, ShiftParam};

#[derive(Parser, Debug)]
#[command(name = "caesarcrypt", version, about = "Caesar shift cipher")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "CAESAR_HOST", default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on
        #[arg(long, env = "CAESAR_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Shift shown on the index page before any request succeeds
        #[arg(long, env = "CAESAR_DEFAULT_SHIFT", default_value_t = ShiftAmount::DEFAULT)]
        default_shift: ShiftAmount,
    },
    /// Encode text (reads stdin when TEXT is omitted or "-")
    Encode {
        #[arg(short, long)]
        shift: String,
        text: Option<String>,
    },
    /// Decode text (reads stdin when TEXT is omitted or "-")
    Decode {
        #[arg(short, long)]
        shift: String,
        text: Option<String>,
    },
    /// Print the identity and shifted alphabets
    Alphabet {
        #[arg(short, long)]
        shift: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose >= 1)
        .with_writer(std::io::stderr)
        .init();

    debug!("caesarcrypt started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            default_shift,
        } => {
            server::serve(ServerConfig {
                host,
                port,
                default_shift,
            })
            .await
        }
        Commands::Encode { shift, text } => run_cipher(&shift, text, Direction::Encode),
        Commands::Decode { shift, text } => run_cipher(&shift, text, Direction::Decode),
        Commands::Alphabet { shift } => run_alphabet(&shift),
    };

    if let Err(e) = result {
        debug!("Fatal error: {:?}", e);
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run_cipher(shift: &str, text: Option<String>, direction: Direction) -> Result<()> {
    let text = match text.as_deref() {
        None | Some("-") => read_stdin()?,
        Some(text) => text.to_string(),
    };
    let request = validate(&text, Some(&ShiftParam::from(shift)), ShiftAmount::DEFAULT)?;
    debug!(?direction, shift = %request.shift, "running cipher");
    println!("{}", request.apply(direction));
    Ok(())
}

fn run_alphabet(shift: &str) -> Result<()> {
    let shift = ShiftParam::from(shift).parse()?;
    let (original, shifted) = map_alphabet(shift).rows();
    println!("{}\n{}", original, shifted);
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    // Drop the single trailing newline a shell pipe adds.
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}
