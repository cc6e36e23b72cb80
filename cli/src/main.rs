use std::cell::RefCell;
use std::process::ExitCode;

use clap::Parser;
use cli::api::ReqwestApi;
use cli::config::{Command, Config};
use cli::output::{exit_code, render_text};
use cli::token_file::FileTokenStore;
use secrecy::ExposeSecret;
use shared::controller::Controller;
use shared::endpoints::Endpoints;
use shared::state::{AppAction, AppState, LoginForm, SignupForm};
use shared::view::{render, RemovalTarget};
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    debug!(?config, "Starting activities cli");

    let endpoints = Endpoints::new(config.endpoint.clone())?;
    let store = FileTokenStore::new(config.token_file()?);
    let controller = Controller::new(ReqwestApi::new(endpoints), store);

    let state = RefCell::new(AppState::default());
    let dispatch = |action: AppAction| state.borrow_mut().apply(action);

    controller.bootstrap(&dispatch).await;

    let session = state.borrow().session.clone();
    match config.command {
        Command::List => {}
        Command::Login { username, password } => {
            let form = LoginForm {
                username,
                password: password.expose_secret().to_owned(),
            };
            controller.login(form, &dispatch).await;
        }
        Command::Logout => controller.logout(&session, &dispatch).await,
        Command::Signup { activity, email } => {
            controller
                .signup(&session, SignupForm { email, activity }, &dispatch)
                .await;
        }
        Command::Unregister { activity, email } => {
            controller
                .unregister(&session, RemovalTarget { activity, email }, &dispatch)
                .await;
        }
    }

    let view = render(&state.borrow());
    print!("{}", render_text(&view));
    Ok(exit_code(&view))
}
