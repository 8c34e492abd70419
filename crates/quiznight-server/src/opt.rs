use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;

#[derive(Debug, Parser)]
#[command(name = "quiznight", about = "Run the trivia event server")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct OpenAiOpt {
    #[arg(long, env = "OPENAI_API_KEY", help = "Enables question generation when set")]
    pub(crate) openai_api_key: Option<String>,

    #[arg(long, env = "OPENAI_API_BASE")]
    pub(crate) openai_api_base: Option<String>,

    #[arg(long, default_value = "gpt-4o-mini")]
    pub(crate) openai_model: String,
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct UnsplashOpt {
    #[arg(long, env = "UNSPLASH_ACCESS_KEY", help = "Enables image search when set")]
    pub(crate) unsplash_access_key: Option<String>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite://quiznight.db?mode=rwc",
        help = "Connection string for the sqlite store"
    )]
    pub(crate) database_url: String,

    #[command(flatten)]
    pub(crate) db: Db,

    #[command(flatten)]
    pub(crate) openai: OpenAiOpt,

    #[command(flatten)]
    pub(crate) unsplash: UnsplashOpt,

    #[arg(long, help = "Allowed CORS origins for the browser client")]
    pub(crate) origins: Vec<String>,

    #[arg(long = "sentry-dsn", help = "Sentry url")]
    pub(crate) sentry_dsn: Option<String>,

    #[arg(long, default_value = "dev", help = "Environment name reported to sentry")]
    pub(crate) env: String,
}
