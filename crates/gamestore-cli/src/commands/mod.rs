pub mod add_genre;
pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;

use std::sync::Arc;

use gamestore_client::{ApiClient, Confirm, GenreRef, Stores};
use time::{macros::format_description, Date};

use crate::{config::ServerArgs, console::ConsoleNotifier};

#[allow(async_fn_in_trait)]
pub trait Executor {
    async fn run(self, server: &ServerArgs) -> anyhow::Result<()>;
}

fn stores(server: &ServerArgs, confirm: Arc<dyn Confirm>) -> Stores {
    let api = ApiClient::new(server.url.clone());
    Stores::new(api, Arc::new(ConsoleNotifier), confirm)
}

pub(crate) fn parse_date(value: &str) -> Result<Date, time::error::Parse> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
}

/// Numeric values are genre ids, anything else a genre name.
pub(crate) fn parse_genre(value: &str) -> Result<GenreRef, std::convert::Infallible> {
    Ok(match value.trim().parse::<i64>() {
        Ok(id) => GenreRef::Id(id),
        Err(_) => GenreRef::Name(value.trim().to_string()),
    })
}
