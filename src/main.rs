//! folio CLI
//!
//! Terminal portfolio page, theme preference, and contact form handoff.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio::contact::{build_payload, validate};
use folio::mailto::{mailto_link, MailComposer, SystemMailer};
use folio::preference::{self, FileStore, MemoryStore, PreferenceStore, ThemePreference};
use folio::report::{format_submission, format_theme, format_validation};
use folio::tui;
use folio::types::{
    ContactFormInput, ContactSettings, OutputFormat, PreferenceConfig, ThemeMode,
    DEFAULT_RECIPIENT_ADDRESS, DEFAULT_RECIPIENT_NAME,
};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio page with a persisted theme and a contact form")]
#[command(version)]
struct Cli {
    /// Preference file (default: <config dir>/folio/preferences.json)
    #[arg(long, global = true, env = "FOLIO_PREFS")]
    prefs: Option<PathBuf>,

    /// Address contact messages are sent to
    #[arg(long, global = true, env = "FOLIO_MAIL_TO", default_value = DEFAULT_RECIPIENT_ADDRESS)]
    to: String,

    /// Name used in the message greeting
    #[arg(long, global = true, env = "FOLIO_RECIPIENT", default_value = DEFAULT_RECIPIENT_NAME)]
    recipient: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive page
    Page,

    /// Show or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Validate a contact message and compose it for the mail client
    Contact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        message: String,

        /// Open the composed message in the system mail client
        #[arg(long)]
        open: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum ThemeAction {
    /// Print the stored theme (default)
    Show,
    /// Switch to the other theme
    Toggle,
    /// Store a specific theme
    Set {
        #[arg(value_enum)]
        mode: ThemeModeArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ThemeModeArg {
    Dark,
    Light,
}

impl From<ThemeModeArg> for ThemeMode {
    fn from(arg: ThemeModeArg) -> Self {
        match arg {
            ThemeModeArg::Dark => ThemeMode::Dark,
            ThemeModeArg::Light => ThemeMode::Light,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The full-screen page stays quiet unless RUST_LOG says otherwise.
    init_tracing(match cli.command {
        Commands::Page => "off",
        _ => "warn",
    });

    let prefs = PreferenceConfig {
        path: cli.prefs.unwrap_or_default(),
    };
    let settings = ContactSettings {
        recipient_name: cli.recipient,
        recipient_address: cli.to,
    };

    let result = match cli.command {
        Commands::Page => cmd_page(&prefs, settings),
        Commands::Theme { action, format } => {
            cmd_theme(&prefs, action.unwrap_or(ThemeAction::Show), format.into())
        }
        Commands::Contact { name, email, message, open, format } => {
            let input = ContactFormInput { name, email, message };
            cmd_contact(&input, &settings, open, format.into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// SETUP
// ============================================================================

/// Install the stderr log subscriber. `RUST_LOG` overrides `default_directive`.
fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Open the preference store, falling back to memory when no config dir exists.
///
/// Returns the store and a printable location (None for memory).
fn open_store(config: &PreferenceConfig) -> (Box<dyn PreferenceStore>, Option<String>) {
    match FileStore::from_config(config) {
        Some(store) => {
            let location = store.path().display().to_string();
            (Box::new(store), Some(location))
        }
        None => {
            tracing::warn!("no config directory; theme will not persist");
            (Box::new(MemoryStore::default()), None)
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_page(prefs: &PreferenceConfig, settings: ContactSettings) -> Result<(), String> {
    let (store, _) = open_store(prefs);
    let mut pref = ThemePreference::new(store);
    tui::run::run(&mut pref, settings, &SystemMailer).map_err(|e| e.to_string())
}

fn cmd_theme(prefs: &PreferenceConfig, action: ThemeAction, format: OutputFormat) -> Result<(), String> {
    let (store, location) = open_store(prefs);
    let mut pref = ThemePreference::new(store);

    let mode = match action {
        ThemeAction::Show => pref.load(),
        ThemeAction::Toggle => {
            let next = preference::toggle(pref.load());
            pref.store(next);
            next
        }
        ThemeAction::Set { mode } => {
            let mode = ThemeMode::from(mode);
            pref.store(mode);
            mode
        }
    };

    print!("{}", format_theme(mode, location.as_deref(), format));
    Ok(())
}

fn cmd_contact(
    input: &ContactFormInput,
    settings: &ContactSettings,
    open: bool,
    format: OutputFormat,
) -> Result<(), String> {
    let result = validate(input);
    if !result.valid {
        print!("{}", format_validation(&result, format));
        return Err("contact form is invalid".to_string());
    }

    let payload = build_payload(input, &settings.recipient_name);
    let link = mailto_link(&settings.recipient_address, &payload);

    print!("{}", format_submission(&payload, &link, format));

    if open {
        SystemMailer.compose(&link).map_err(|e| e.to_string())?;
        if format == OutputFormat::Human {
            eprintln!("Your email client will open with the message pre-filled.");
        }
    }

    Ok(())
}
