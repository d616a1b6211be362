//! Pinned content selector for the news page and the home spotlight

use std::cmp::Reverse;

use crate::domain::NewsItem;

/// Number of items shown in the home page spotlight.
pub const HOME_SPOTLIGHT_LIMIT: usize = 3;

/// News page order: items pinned for the news page first, then the rest,
/// each group newest first. Equal dates keep their input order.
pub fn news_listing(items: &[NewsItem]) -> Vec<NewsItem> {
    let mut listing = items.to_vec();
    listing.sort_by_key(|item| (!item.is_pinned_news, Reverse(item.published_at)));
    listing
}

/// Home page spotlight: items pinned for the home page, newest first, at
/// most [`HOME_SPOTLIGHT_LIMIT`].
pub fn home_spotlight(items: &[NewsItem]) -> Vec<NewsItem> {
    let mut pinned: Vec<NewsItem> = items
        .iter()
        .filter(|item| item.is_pinned_home)
        .cloned()
        .collect();
    pinned.sort_by_key(|item| Reverse(item.published_at));
    pinned.truncate(HOME_SPOTLIGHT_LIMIT);
    pinned
}

/// Drops inactive items; the public site never shows them.
pub fn active_only(items: Vec<NewsItem>) -> Vec<NewsItem> {
    items.into_iter().filter(|item| item.is_active).collect()
}
