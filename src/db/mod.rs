pub(crate) mod models;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};

use crate::core::config::Settings;

pub(crate) async fn init_pool(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    pool_options(settings).connect_with(connect_options(settings)?).await
}

/// Same pool as [`init_pool`] without opening a connection until first use.
#[cfg(test)]
pub(crate) fn lazy_pool(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    Ok(pool_options(settings).connect_lazy_with(connect_options(settings)?))
}

pub(crate) async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

fn pool_options(settings: &Settings) -> PgPoolOptions {
    let database = settings.database();
    PgPoolOptions::new()
        .max_connections(database.max_connections)
        .min_connections(1)
        .acquire_timeout(database.acquire_timeout())
        .test_before_acquire(true)
}

fn connect_options(settings: &Settings) -> Result<PgConnectOptions, sqlx::Error> {
    let database = settings.database();
    let mut options: PgConnectOptions = database.database_url().parse()?;

    options = options
        .application_name("blog-pagination")
        .log_statements(tracing::log::LevelFilter::Off);

    if let Some(timeout) = database.statement_timeout() {
        options = options.options([("statement_timeout", timeout.as_millis().to_string())]);
    }

    Ok(options)
}
