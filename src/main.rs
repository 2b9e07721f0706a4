use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, LevelFilter};

use rsa_leak::rsa::generate_keypair;
use rsa_leak::transport::{DatagramCodec, UdpSink, UdpSource};
use rsa_leak::util::{load_private_key, load_public_key, write_key_file};
use rsa_leak::{leak, Reporter};

#[derive(Parser)]
#[command(
    name = "rsa-leak",
    version,
    about = "Send and receive RSA-OAEP encrypted messages over UDP"
)]
struct Cli {
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a key pair and write both halves to disk.
    Keygen {
        #[arg(long, default_value_t = 2048)]
        bits: u32,
        #[arg(long, default_value_t = 65537)]
        exponent: u64,
        #[arg(value_name = "PUBLIC_KEY_FILE")]
        public_key: PathBuf,
        #[arg(value_name = "PRIVATE_KEY_FILE")]
        private_key: PathBuf,
    },
    /// Encrypt one message and send it to a reporter.
    Leak {
        rhost: String,
        rport: u16,
        lhost: String,
        lport: u16,
        #[arg(value_name = "PUBLIC_KEY_FILE")]
        public_key: PathBuf,
        /// Wrap in quotes to send several words.
        message: String,
    },
    /// Listen for messages and print each one that decrypts.
    Report {
        rhost: String,
        rport: u16,
        #[arg(value_name = "PRIVATE_KEY_FILE")]
        private_key: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Keygen {
            bits,
            exponent,
            public_key,
            private_key,
        } => keygen(bits, exponent, &public_key, &private_key),
        Commands::Leak {
            rhost,
            rport,
            lhost,
            lport,
            public_key,
            message,
        } => {
            let key = load_public_key(&public_key)?;
            let destination = resolve(&rhost, rport)?;
            let socket = bind(&lhost, lport)?;
            let mut sink = UdpSink::new(socket, destination, DatagramCodec::new(key.modulus()));
            leak(&message, &key, &mut sink).context("could not send message")
        }
        Commands::Report {
            rhost,
            rport,
            private_key,
        } => {
            let key = load_private_key(&private_key)?;
            let socket = bind(&rhost, rport)?;
            let source = UdpSource::new(socket, DatagramCodec::new(key.modulus()));
            let mut reporter = Reporter::new(key, |message| println!("{message}"));
            source.run(&mut reporter)
        }
    }
}

fn keygen(bits: u32, exponent: u64, public_path: &Path, private_path: &Path) -> Result<()> {
    info!("generating {bits} bit key pair");
    let keypair = generate_keypair(bits, exponent)?;

    let public_key = &keypair.public_key;
    write_key_file(public_path, public_key.exponent(), public_key.modulus())?;
    let private_key = &keypair.private_key;
    write_key_file(private_path, private_key.exponent(), private_key.modulus())?;

    info!(
        "wrote {} and {}",
        public_path.display(),
        private_path.display()
    );
    Ok(())
}

fn resolve(host: &str, port: u16) -> Result<SocketAddr> {
    (host, port)
        .to_socket_addrs()
        .with_context(|| format!("could not resolve {host}:{port}"))?
        .next()
        .with_context(|| format!("no address for {host}:{port}"))
}

fn bind(host: &str, port: u16) -> Result<UdpSocket> {
    let addr = resolve(host, port)?;
    UdpSocket::bind(addr).with_context(|| format!("could not bind to {host}:{port}"))
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
