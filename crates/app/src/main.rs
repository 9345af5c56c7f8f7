use std::fmt;
use std::sync::Arc;

use deck_core::model::{Identity, Owner, SubjectId};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{DeckEditorService, DeckService};
use storage::http::{API_URL_ENV, DEFAULT_API_URL, RemoteConfig};
use storage::repository::{NewCardRecord, NewDeckRecord, Storage, StorageError};
use ui::{App, UiApp, build_app_context};

const USER_ENV: &str = "FLASHDECK_USER";
const SUBJECT_ENV: &str = "FLASHDECK_SUBJECT_ID";
const DEMO_USER: &str = "demo";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingUser,
    InvalidUser { raw: String },
    InvalidSubjectId { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingUser => write!(f, "no user given (use --user or {USER_ENV})"),
            ArgsError::InvalidUser { raw } => write!(f, "invalid --user value: {raw:?}"),
            ArgsError::InvalidSubjectId { raw } => write!(f, "invalid --subject value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    identity: Identity,
    deck_service: Arc<DeckService>,
    editor_service: Arc<DeckEditorService>,
}

impl UiApp for DesktopApp {
    fn identity(&self) -> Identity {
        self.identity.clone()
    }

    fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }

    fn editor_service(&self) -> Arc<DeckEditorService> {
        Arc::clone(&self.editor_service)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    api_url: String,
    user: Option<String>,
    subject_id: SubjectId,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--api <url>] [--user <name>] [--subject <id>]");
    eprintln!("  cargo run -p app -- demo [--user <name>] [--subject <id>]  # in-memory store");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api {DEFAULT_API_URL}");
    eprintln!("  --subject 1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {API_URL_ENV}, {USER_ENV}, {SUBJECT_ENV}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Demo,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "demo" => Some(Self::Demo),
            _ => None,
        }
    }
}

impl Args {
    /// Flags win over the environment; `env` is looked up once per setting.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut api_url = env(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut user = env(USER_ENV).filter(|value| !value.trim().is_empty());
        let mut subject_id = match env(SUBJECT_ENV) {
            Some(raw) => parse_subject(raw)?,
            None => SubjectId::new(1),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api" => api_url = require_value(args, "--api")?,
                "--user" => user = Some(require_value(args, "--user")?),
                "--subject" => subject_id = parse_subject(require_value(args, "--subject")?)?,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            api_url,
            user,
            subject_id,
        })
    }

    fn identity(&self, fallback_user: Option<&str>) -> Result<Identity, ArgsError> {
        let raw = self
            .user
            .as_deref()
            .or(fallback_user)
            .ok_or(ArgsError::MissingUser)?;
        let owner = Owner::parse(raw).map_err(|_| ArgsError::InvalidUser {
            raw: raw.to_string(),
        })?;
        Ok(Identity::new(owner, self.subject_id))
    }
}

fn parse_subject(raw: String) -> Result<SubjectId, ArgsError> {
    raw.parse::<SubjectId>()
        .map_err(|_| ArgsError::InvalidSubjectId { raw })
}

/// A few decks so the demo has something to list and study.
async fn seed_demo(storage: &Storage, identity: &Identity) -> Result<(), StorageError> {
    let decks: [(&str, &[(&str, &str)]); 2] = [
        (
            "Capitals",
            &[
                ("France capital?", "Paris"),
                ("Spain capital?", "Madrid"),
                ("Japan capital?", "Tokyo"),
            ],
        ),
        (
            "Rust basics",
            &[
                ("What does `?` do?", "Returns early with the error."),
                ("Who owns a value?", "Exactly one binding at a time."),
            ],
        ),
    ];

    for (title, cards) in decks {
        let deck_id = storage
            .decks
            .insert_new_deck(NewDeckRecord {
                owner: identity.owner.clone(),
                subject_id: identity.subject_id,
                title: title.to_string(),
            })
            .await?;
        for (front, back) in cards {
            storage
                .cards
                .insert_new_card(NewCardRecord {
                    owner: identity.owner.clone(),
                    deck_id,
                    front: (*front).to_string(),
                    back: (*back).to_string(),
                })
                .await?;
        }
    }
    log::info!("seeded demo store for {}", identity.owner);
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let (storage, identity) = match cmd {
        Command::Ui => {
            let identity = parsed.identity(None)?;
            let config = RemoteConfig::new(&parsed.api_url)?;
            log::info!("using remote store at {}", config.base_url());
            (Storage::http(&config)?, identity)
        }
        Command::Demo => {
            let identity = parsed.identity(Some(DEMO_USER))?;
            let storage = Storage::in_memory();
            seed_demo(&storage, &identity).await?;
            (storage, identity)
        }
    };

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        identity,
        deck_service: Arc::new(DeckService::from_storage(&storage)),
        editor_service: Arc::new(DeckEditorService::from_storage(&storage)),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Flashdeck")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
