use std::collections::HashMap;

use crate::api::{Dog, Page, QueryKey};

/// Pages accumulated per query key, in fetch order.
#[derive(Debug, Default)]
pub struct PageCache {
    entries: HashMap<QueryKey, Vec<Page>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self, key: &QueryKey) -> &[Page] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn append(&mut self, key: &QueryKey, page: Page) {
        self.entries.entry(key.clone()).or_default().push(page);
    }

    /// Drop every page fetched under `key`.
    pub fn invalidate(&mut self, key: &QueryKey) {
        self.entries.remove(key);
    }

    /// All dogs for `key`, concatenated in fetch order.
    pub fn items<'a>(&'a self, key: &QueryKey) -> impl Iterator<Item = &'a Dog> + 'a {
        self.pages(key).iter().flat_map(|page| page.items.iter())
    }
}
