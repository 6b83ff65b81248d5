//! # Page Iteration
//!
//! Walks a paged collection (`value` + `@odata.nextLink`) item by item.
//! Fetching a page is the caller's job: the iterator hands over the next
//! link and expects the JSON body back.
//!
//! ```rust,no_run
//! use graph_models::models::{Subscription, SubscriptionCollectionResponse};
//! use graph_models::serialization::json;
//! use graph_models::{PageIterator, Result};
//!
//! fn walk(first: &[u8], get: impl FnMut(&str) -> Result<Vec<u8>>) -> Result<()> {
//!     let page = json::parse(first, SubscriptionCollectionResponse::create_from_discriminator_value)?;
//!     let pages = PageIterator::new(page, SubscriptionCollectionResponse::create_from_discriminator_value, get);
//!     for item in pages {
//!         let _sub = graph_models::downcast::<Subscription>(item?)?;
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::mem;

use crate::model::Value;
use crate::models::{ODATA_COUNT, ODATA_NEXT_LINK, VALUE};
use crate::serialization::{Parsable, ParsableFactory, json};
use crate::Result;

pub struct PageIterator<F> {
    items: std::vec::IntoIter<Box<dyn Parsable>>,
    next_link: Option<String>,
    odata_count: Option<i64>,
    page_factory: ParsableFactory,
    fetch: F,
    pages_fetched: usize,
}

impl<F> PageIterator<F>
where
    F: FnMut(&str) -> Result<Vec<u8>>,
{
    /// Start from an already-decoded first page.
    pub fn new(mut first_page: Box<dyn Parsable>, page_factory: ParsableFactory, fetch: F) -> Self {
        let odata_count = first_page.backing_store().get_value(&ODATA_COUNT);
        let (items, next_link) = take_page(&mut *first_page);
        Self {
            items: items.into_iter(),
            next_link,
            odata_count,
            page_factory,
            fetch,
            pages_fetched: 0,
        }
    }

    /// `@odata.count` of the first page, if the service sent one.
    pub fn odata_count(&self) -> Option<i64> {
        self.odata_count
    }

    /// Link the next fetch will use, if any.
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    /// Pages fetched after the first.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Feed items to `callback` until it returns `false` or the pages run
    /// out.
    pub fn iterate(&mut self, mut callback: impl FnMut(Box<dyn Parsable>) -> bool) -> Result<()> {
        for item in self.by_ref() {
            if !callback(item?) {
                break;
            }
        }
        Ok(())
    }

    fn fetch_next_page(&mut self, link: &str) -> Result<()> {
        tracing::debug!(next_link = link, "fetching next page");
        let body = (self.fetch)(link)?;
        let mut page = json::parse(&body, self.page_factory)?;
        let (items, next_link) = take_page(&mut *page);
        self.items = items.into_iter();
        self.next_link = next_link;
        self.pages_fetched += 1;
        Ok(())
    }
}

impl<F> Iterator for PageIterator<F>
where
    F: FnMut(&str) -> Result<Vec<u8>>,
{
    type Item = Result<Box<dyn Parsable>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.items.next() {
                return Some(Ok(item));
            }
            let link = self.next_link.take()?;
            if let Err(err) = self.fetch_next_page(&link) {
                return Some(Err(err));
            }
        }
    }
}

impl<F> fmt::Debug for PageIterator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageIterator")
            .field("buffered", &self.items.len())
            .field("next_link", &self.next_link)
            .field("pages_fetched", &self.pages_fetched)
            .finish()
    }
}

/// Move the items out of a page and read its next link.
fn take_page(page: &mut dyn Parsable) -> (Vec<Box<dyn Parsable>>, Option<String>) {
    let next_link = page
        .backing_store()
        .get_str(&ODATA_NEXT_LINK)
        .filter(|link| !link.is_empty())
        .map(str::to_owned);
    let items = match page.backing_store_mut().get_mut(&VALUE) {
        Some(Value::Collection(items)) => mem::take(items)
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(obj) => Some(obj.into_inner()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    (items, next_link)
}
