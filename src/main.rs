use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use taxcost::calculator;
use taxcost::config::{Settings, TaxCostPaths};
use taxcost::display::format_bracket_table;
use taxcost::locale::Locale;
use taxcost::logging::{init_logging, LogTarget};
use taxcost::models::{rate_for_identifier, TaxBracket};

#[derive(Parser)]
#[command(
    name = "taxcost",
    version,
    about = "Tax-adjusted cost calculator",
    long_about = "taxcost takes an amount and an income tax bracket and shows what \
                  the amount costs once the bracket's flat rate is deducted. Run \
                  without a subcommand for the interactive screen."
)]
struct Cli {
    /// Locale for currency formatting (e.g. en_AU); defaults to the host locale
    #[arg(long, global = true, env = "TAXCOST_LOCALE")]
    locale: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Print the adjusted cost of an amount
    Calc {
        /// Amount to adjust; unparsable text counts as zero
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Bracket identifier (e.g. bracket_45000 or 45000)
        #[arg(short, long, default_value = "bracket_18200")]
        bracket: String,
    },

    /// List the brackets and their rates
    Brackets {
        /// Also show the adjusted cost of this amount in every bracket
        #[arg(short, long, default_value = "0")]
        amount: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TaxCostPaths::new()?;
    let settings = Settings::load_or_default(&paths)?.with_overrides(cli.locale, cli.log_file);

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    let target = match (&settings.log_file, interactive) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Silent,
        (None, false) => LogTarget::Stderr,
    };
    init_logging(target)?;

    let locale = Locale::resolve(settings.locale.as_deref())?;
    tracing::debug!(locale = %locale, "resolved locale");

    match cli.command {
        None | Some(Commands::Tui) => {
            taxcost::tui::run_tui(locale)?;
        }
        Some(Commands::Calc { amount, bracket }) => {
            let rate = rate_for_identifier(&bracket);
            println!("{}", calculator::calculate_with_rate(&amount, rate, &locale));
        }
        Some(Commands::Brackets { amount }) => {
            println!("{}", format_bracket_table(&amount, &locale));
        }
        Some(Commands::Config) => {
            println!("taxcost Configuration");
            println!("=====================");
            println!("Config file:     {}", paths.settings_file().display());
            println!("Locale:          {}", locale);
            println!(
                "Locale source:   {}",
                if settings.locale.is_some() { "override" } else { "host" }
            );
            match &settings.log_file {
                Some(path) => println!("Log file:        {}", path.display()),
                None => println!("Log file:        (none)"),
            }
            println!("Default bracket: {}", TaxBracket::default());
        }
    }

    Ok(())
}
