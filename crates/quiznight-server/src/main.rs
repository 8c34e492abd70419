use crate::opt::{Commands, Db, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use quiznight_core::question_gen::OpenAiSettings;
use quiznight_core::session::SessionStore;
use quiznight_core::unsplash::UnsplashClient;
use quiznight_migration::{Migrator, MigratorTrait};
use quiznight_utils::net::create_listener;
use sea_orm::{ConnectOptions, Database};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

mod app;
mod opt;
mod permissions;
mod routes;
mod user;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

#[derive(Debug)]
pub(crate) struct InnerAppConfig {
    env: String,
    openai: Option<OpenAiSettings>,
}

#[derive(Clone, Debug)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    pub(crate) fn new(env: String, openai: Option<OpenAiSettings>) -> Self {
        Self(Arc::new(InnerAppConfig { env, openai }))
    }

    pub fn env(&self) -> &str {
        &self.0.env
    }

    pub fn openai(&self) -> Option<&OpenAiSettings> {
        self.0.openai.as_ref()
    }
}

async fn run(opt: Run) -> Result<()> {
    let _guard = quiznight_utils::tracing::setup(
        quiznight_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.sentry_dsn.clone())
            .env(opt.env.clone())
            .build(),
    )?;

    let pool_options = build_connect_options(&opt.db, &opt.database_url);
    let pool = Database::connect(pool_options).await?;

    Migrator::up(&pool, None)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "failed to run migrations"))?;

    let sessions = Arc::new(SessionStore::new());

    let openai = opt.openai.openai_api_key.clone().map(|api_key| OpenAiSettings {
        api_key,
        api_base: opt.openai.openai_api_base.clone(),
        model: opt.openai.openai_model.clone(),
    });
    if openai.is_none() {
        tracing::warn!("no OpenAI key configured, question generation is disabled");
    }

    let unsplash = match &opt.unsplash.unsplash_access_key {
        Some(access_key) => Some(UnsplashClient::new(access_key.clone(), None)?),
        None => {
            tracing::warn!("no Unsplash key configured, image search is disabled");
            None
        }
    };

    let Run { host, port, origins, env, .. } = opt;

    let app_config = AppConfig::new(env, openai);
    let app = app::create_app(app_config, sessions, pool, unsplash, &origins)?;

    let listener = create_listener((host, port), (DEFAULT_HOST, DEFAULT_PORT)).await?;

    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, app.into_make_service()).await?;
    Ok(())
}

fn build_connect_options(db_options: &Db, db_url: &str) -> ConnectOptions {
    let mut pool_options = ConnectOptions::new(db_url);
    if let Some(min_connections) = db_options.db_min_connections {
        pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        pool_options.max_connections(max_connections);
    }
    pool_options
}

fn main() -> Result<()> {
    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
