use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "keymint", version, about = "Keymint license authority CLI")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Root authority management
    Authority {
        #[command(subcommand)]
        cmd: AuthorityCommand,
    },

    /// Mint a license token using a persisted root credential
    Mint {
        /// Directory holding ca.key and ca.crt
        #[arg(long, default_value = ".")]
        authority: PathBuf,

        /// License id, embedded as the token's first segment
        #[arg(long, default_value = "KEYMINT")]
        license_id: String,

        /// Product codes, comma-separated (defaults to the built-in catalog)
        #[arg(long, value_delimiter = ',')]
        codes: Vec<String>,

        /// Pay-through date, YYYY-MM-DD (defaults to 10 years from today)
        #[arg(long)]
        paid_up_to: Option<String>,

        /// Write the token to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Split a token and pretty-print its decoded payload
    Inspect {
        /// Token string, or path to a file containing one
        token: String,
    },
}

#[derive(Subcommand, Debug)]
enum AuthorityCommand {
    /// Generate a new root credential and write ca.key / ca.crt
    Issue {
        /// Output directory for ca.key and ca.crt
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// TOML file with authority settings
        #[arg(long)]
        config: Option<PathBuf>,

        /// Issuer common name (overrides config)
        #[arg(long)]
        issuer: Option<String>,

        /// Subject common name (overrides config)
        #[arg(long)]
        subject: Option<String>,

        /// Use random serial numbers instead of clock milliseconds
        #[arg(long, default_value_t = false)]
        random_serial: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Authority { cmd } => match cmd {
            AuthorityCommand::Issue {
                out_dir,
                config,
                issuer,
                subject,
                random_serial,
            } => commands::authority::issue(out_dir, config, issuer, subject, random_serial)?,
        },

        Command::Mint {
            authority,
            license_id,
            codes,
            paid_up_to,
            output,
        } => commands::mint::mint(authority, license_id, codes, paid_up_to, output)?,

        Command::Inspect { token } => commands::inspect::inspect(token)?,
    }

    Ok(())
}
