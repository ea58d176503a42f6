//! Marketplace console
//!
//! Opens one marketplace page against a fixture-seeded in-memory store and
//! prints what the view shows once every pending delivery has been applied.

use std::{io, process, sync::Arc};

use marketplace_app::{
    channels::Identity,
    domain::products::ProductId,
    memory::{HistoryNavigator, MemoryStore},
    paths::Route,
    sync::{ViewPhase, ViewSyncController},
    views::{self, PRODUCTS_ROUTE, listings, new_product, product},
};
use tracing::{debug, info};

use crate::{
    config::{Command, ConsoleConfig},
    errors::ConsoleError,
};

mod config;
mod errors;
mod fixture;
mod observability;
mod render;

#[tokio::main]
pub async fn main() {
    let config = match ConsoleConfig::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    if let Err(error) = run(config).await {
        #[expect(clippy::print_stderr, reason = "report fatal errors before exiting")]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}

fn starting_route(command: &Command) -> Route {
    match command {
        Command::Listings => Route::new(PRODUCTS_ROUTE),
        Command::Product(args) => views::product_route(&ProductId::new(args.id.as_str())),
        Command::Create(_) => Route::new(format!("{PRODUCTS_ROUTE}/new")),
    }
}

async fn run(config: ConsoleConfig) -> Result<(), ConsoleError> {
    observability::init_subscriber(&config.logging)?;

    let store = MemoryStore::new();

    if let Some(path) = &config.fixture {
        fixture::seed(&store, path)?;
    }

    store.set_identity(config.user.clone().map(Identity::new));

    let navigator = HistoryNavigator::starting_at(starting_route(&config.command));
    let controller = ViewSyncController::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(navigator.clone()),
    );

    let mut out = io::stdout();

    match config.command {
        Command::Listings => {
            let view = listings::open(&controller)?;
            let delivered = store.drain();

            debug!(delivered, "listings settled");

            render::listing(&mut out, &view.state())?;
        }
        Command::Product(args) => {
            let view = product::open(&controller, &args.id)?;
            let delivered = store.drain();

            debug!(delivered, "product settled");

            if view.phase() == ViewPhase::Unauthenticated {
                render::redirected(&mut out, navigator.current().as_ref())?;
            } else {
                render::product_detail(&mut out, &view.state())?;
            }
        }
        Command::Create(args) => {
            let view = new_product::open(&controller)?;

            store.drain();

            if view.phase() == ViewPhase::Unauthenticated {
                render::redirected(&mut out, navigator.current().as_ref())?;

                return Ok(());
            }

            let id = new_product::post(&view, args.into())?.await?;

            info!(%id, "product created");

            render::created(&mut out, &id)?;
        }
    }

    Ok(())
}
