use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use secrecy::SecretString;
use url::Url;

const TOKEN_FILE_NAME: &str = ".activities-token";

#[derive(Parser, Clone, Debug)]
#[command(version, about = "Manage student sign-ups for school activities")]
pub struct Config {
    #[arg(
        long,
        help = "Base URL of the activities service",
        env = "ACTIVITIES_ENDPOINT",
        default_value = "http://localhost:8000"
    )]
    pub endpoint: Url,

    #[arg(
        long,
        help = "File holding the session token, defaults to ~/.activities-token",
        env = "ACTIVITIES_TOKEN_FILE"
    )]
    pub token_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// List activities and their rosters
    List,
    /// Sign in as a teacher and keep the session token
    Login {
        #[arg(long, env = "ACTIVITIES_USERNAME")]
        username: String,
        #[arg(long, env = "ACTIVITIES_PASSWORD")]
        password: SecretString,
    },
    /// End the session, locally even when the server is unreachable
    Logout,
    /// Register a student for an activity
    Signup {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
    /// Remove a student from an activity
    Unregister {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
}

impl Config {
    pub fn token_file(&self) -> anyhow::Result<PathBuf> {
        match &self.token_file {
            Some(path) => Ok(path.clone()),
            None => home::home_dir()
                .map(|home| home.join(TOKEN_FILE_NAME))
                .ok_or_else(|| anyhow!("Cannot locate home directory, use --token-file")),
        }
    }
}
