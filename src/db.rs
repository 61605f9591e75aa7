use std::env;

use anyhow::Context;
use sqlx::PgPool;

/// Connection targets for the content and thread databases. No schema or
/// query code lives in this service yet; the pools connect lazily and are
/// handed to whichever repository attaches later.
#[derive(Debug, Clone)]
pub struct Datasources {
    pub content: PgPool,
    pub threads: PgPool,
}

impl Datasources {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let thread_database_url =
            env::var("THREAD_DATABASE_URL").context("THREAD_DATABASE_URL must be set")?;

        let content =
            PgPool::connect_lazy(&database_url).context("invalid DATABASE_URL")?;
        let threads =
            PgPool::connect_lazy(&thread_database_url).context("invalid THREAD_DATABASE_URL")?;

        Ok(Self { content, threads })
    }
}
