//! Command-line front end.
//!
//! Each command fills the page's form inputs from its arguments, replays the
//! events a browser would fire, then prints what the page would show:
//!
//! ```bash
//! wishlist signup --username alice --password p1
//! wishlist login --username alice --password p1
//! wishlist dashboard
//! wishlist wishlist add "Birthday"
//! wishlist celebration add "Graduation" 2025-06-01
//! wishlist logout
//! ```

use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use crate::domain::{SessionStore, WishlistApi};
use crate::frameworks::config::Config;
use crate::frameworks::logging::init_tracing;
use crate::interface_adapters::clients::ApiClient;
use crate::interface_adapters::controller::{Event, Form, ViewController};
use crate::interface_adapters::document::{AlertKind, Document, MENU_OPEN_CLASS, Page, ids};
use crate::interface_adapters::session_store::FileSessionStore;

/// Wishlist and celebration client
#[derive(Parser, Debug)]
#[command(name = "wishlist", version)]
#[command(about = "Sign up, log in and browse wishlists and celebrations")]
pub struct Cli {
    /// API base URL (overrides WISHLIST_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file holding the access token (overrides WISHLIST_SESSION_FILE)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new account
    Signup(CredentialArgs),

    /// Log in and store the access token
    Login(CredentialArgs),

    /// Show your wishlists and celebrations
    Dashboard,

    /// Forget the stored access token
    Logout,

    /// Wishlist management
    #[command(subcommand)]
    Wishlist(WishlistCommand),

    /// Celebration management
    #[command(subcommand)]
    Celebration(CelebrationCommand),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CredentialArgs {
    #[arg(short, long)]
    pub username: String,

    #[arg(short, long)]
    pub password: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum WishlistCommand {
    /// Create a wishlist
    Add { name: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CelebrationCommand {
    /// Create a celebration
    Add { title: String, date: String },
}

pub async fn run() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    let config = match Config::load(cli.api_url.clone(), cli.session_file.clone()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    tracing::debug!(
        api = %config.api_base(),
        session_file = %config.session_file.display(),
        "client configured."
    );

    let api = ApiClient::new(config.api_base());
    let session = FileSessionStore::new(config.session_file.clone(), config.origin());

    let document = execute(&cli.command, api, session).await;
    print!("{}", present(&document));

    if document.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

// Runs one command against the given API and session store and returns the
// resulting page.
pub async fn execute<A, S>(command: &Command, api: A, session: S) -> Document
where
    A: WishlistApi + Clone,
    S: SessionStore + Clone,
{
    let mut controller = ViewController::new(api, session, prepare_document(command));

    let event = event_for(command);
    let before = controller.document().page();
    controller.handle(event).await;

    // Arriving on the dashboard through a redirect fires its page load.
    let after = controller.document().page();
    if after != before && after == Page::Dashboard {
        controller.handle(Event::PageLoad).await;
    }

    controller.into_document()
}

// The page a command starts on, with its form inputs filled in.
pub fn prepare_document(command: &Command) -> Document {
    match command {
        Command::Signup(args) => {
            let mut document = Document::new(Page::Index);
            document.set_input(ids::USERNAME, args.username.as_str());
            document.set_input(ids::PASSWORD, args.password.as_str());
            document
        }
        Command::Login(args) => {
            let mut document = Document::new(Page::SignIn);
            document.set_input(ids::LOGIN_USERNAME, args.username.as_str());
            document.set_input(ids::LOGIN_PASSWORD, args.password.as_str());
            document
        }
        Command::Dashboard | Command::Logout => Document::new(Page::Dashboard),
        Command::Wishlist(WishlistCommand::Add { name }) => {
            let mut document = Document::new(Page::Dashboard);
            document.set_input(ids::WISHLIST_NAME, name.as_str());
            document
        }
        Command::Celebration(CelebrationCommand::Add { title, date }) => {
            let mut document = Document::new(Page::Dashboard);
            document.set_input(ids::CELEBRATION_TITLE, title.as_str());
            document.set_input(ids::CELEBRATION_DATE, date.as_str());
            document
        }
    }
}

pub fn event_for(command: &Command) -> Event {
    match command {
        Command::Signup(_) => Event::Submit(Form::SignUp),
        Command::Login(_) => Event::Submit(Form::LogIn),
        Command::Dashboard => Event::PageLoad,
        Command::Logout => Event::Logout,
        Command::Wishlist(_) => Event::Submit(Form::NewWishlist),
        Command::Celebration(_) => Event::Submit(Form::NewCelebration),
    }
}

// Text rendition of the page: alerts, the current page, the menu when it is
// open, then each container.
pub fn present(document: &Document) -> String {
    let mut out = String::new();

    for alert in document.alerts() {
        let marker = match alert.kind {
            AlertKind::Info => '*',
            AlertKind::Error => '!',
        };
        let _ = writeln!(out, "{marker} {}", alert.message);
    }

    let _ = writeln!(out, "→ {}", document.page().path());

    if document.menu_open() {
        let _ = writeln!(out, "[{}] {MENU_OPEN_CLASS}", ids::DROPDOWN_MENU);
    }

    for (id, children) in document.containers() {
        let _ = writeln!(out, "[{id}]");
        for child in children {
            let _ = writeln!(out, "  {child}");
        }
    }

    out
}
