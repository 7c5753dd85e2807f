use std::thread;

use crate::api::models::TweetPage;
use crate::api::{ApiClient, Backend};
use crate::domain::{ExportSelection, FilterOptions, TableState};
use crate::resource::{Loadable, Resource};

pub struct ExplorerVm {
    pub table: TableState,
    pub options: Loadable<FilterOptions>,
    pub tweets: Loadable<TweetPage>,
    pub export: ExportSelection,
}

pub fn load_explorer<B: Backend>(client: &ApiClient<B>, mut table: TableState) -> ExplorerVm {
    let options = Resource::new("filter options");
    let tweets = Resource::new("tweets");

    thread::scope(|s| {
        s.spawn(|| options.refresh(|| client.filter_options()));
        s.spawn(|| tweets.refresh(|| client.tweets(table.pager().query(), table.filters())));
    });

    let tweets = record_total(&mut table, tweets.into_state());

    ExplorerVm {
        table,
        options: options.into_state(),
        tweets,
        export: ExportSelection::all(),
    }
}

/// Loads the table alone, for pager and page-size changes.
pub fn load_tweets<B: Backend>(
    client: &ApiClient<B>,
    table: &mut TableState,
) -> Loadable<TweetPage> {
    let tweets = super::load_one("tweets", || {
        client.tweets(table.pager().query(), table.filters())
    });
    record_total(table, tweets)
}

fn record_total(table: &mut TableState, tweets: Loadable<TweetPage>) -> Loadable<TweetPage> {
    if let Loadable::Ready(page) = &tweets {
        table.pager_mut().set_total(page.total);
    }
    tweets
}
