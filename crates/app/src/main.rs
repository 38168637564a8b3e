use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{Question, QuizLimits};
use services::{Clock, IdentifierService, LockoutService, SubmissionService};
use storage::{InMemoryStore, RemoteStoreConfig, RemoteSubmissionStore, SubmissionRepository};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod bank;

struct DesktopApp {
    clock: Clock,
    limits: QuizLimits,
    bank: Arc<Vec<Question>>,
    identifier: Arc<IdentifierService>,
    lockout: Arc<LockoutService>,
    submissions: Arc<SubmissionService>,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn limits(&self) -> QuizLimits {
        self.limits
    }

    fn bank(&self) -> Arc<Vec<Question>> {
        Arc::clone(&self.bank)
    }

    fn identifier(&self) -> Arc<IdentifierService> {
        Arc::clone(&self.identifier)
    }

    fn lockout(&self) -> Arc<LockoutService> {
        Arc::clone(&self.lockout)
    }

    fn submissions(&self) -> Arc<SubmissionService> {
        Arc::clone(&self.submissions)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Pick the submission backend from the environment. Without a configured
/// endpoint the app still runs, but results do not survive a restart.
fn select_store() -> Arc<dyn SubmissionRepository> {
    match RemoteStoreConfig::from_env() {
        Some(config) => {
            tracing::info!(url = %config.base_url, "using remote submission store");
            Arc::new(RemoteSubmissionStore::new(config))
        }
        None => {
            tracing::warn!("QUIZ_STORE_URL not set; submissions are kept in memory only");
            Arc::new(InMemoryStore::new())
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let clock = Clock::default_clock();
    let limits = QuizLimits::default();
    let bank = Arc::new(bank::default_bank()?);
    let store = select_store();

    let app = DesktopApp {
        clock,
        limits,
        bank: Arc::clone(&bank),
        identifier: Arc::new(IdentifierService::new()),
        lockout: Arc::new(LockoutService::new(clock, Arc::clone(&store))),
        submissions: Arc::new(SubmissionService::new(clock, bank, store)),
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Physics Quiz Pro")
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
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
