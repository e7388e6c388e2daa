//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use pawmatch::api::{Cursor, Dog, Page, QueryKey};
use pawmatch::config::DisplayConfig;
use pawmatch::dashboard::pagination::TicketedRequest;
use pawmatch::dashboard::{Dashboard, Effect};
use std::path::PathBuf;
use tempfile::TempDir;

/// A dog with predictable fields derived from `id`.
pub fn dog(id: &str) -> Dog {
    Dog {
        id: id.to_string(),
        img: format!("https://img.example/{}.jpg", id),
        name: format!("Dog {}", id),
        age: 4,
        zip_code: "48201".to_string(),
        breed: "Shiba Inu".to_string(),
    }
}

pub fn page(ids: &[&str], next: Option<&str>) -> Page {
    Page {
        items: ids.iter().map(|id| dog(id)).collect(),
        next: next.map(|c| Cursor(c.to_string())),
    }
}

/// Dashboard with default display settings (200ms debounce).
pub fn dashboard() -> Dashboard {
    Dashboard::new(QueryKey::default(), 25, &DisplayConfig::default())
}

/// Extract the single page request from a batch of effects.
pub fn fetch_request(effects: Vec<Effect>) -> TicketedRequest {
    let mut requests: Vec<TicketedRequest> = effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::FetchPage(req) => Some(req),
            Effect::SubmitMatch { .. } => None,
        })
        .collect();
    assert_eq!(requests.len(), 1, "expected exactly one page request");
    requests.remove(0)
}

/// Extract the single match submission from a batch of effects.
pub fn match_submission(effects: Vec<Effect>) -> (u64, Vec<String>) {
    let mut submissions: Vec<(u64, Vec<String>)> = effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::SubmitMatch { submission, ids } => Some((submission, ids)),
            Effect::FetchPage(_) => None,
        })
        .collect();
    assert_eq!(submissions.len(), 1, "expected exactly one match submission");
    submissions.remove(0)
}

/// Dashboard with `pages` already loaded, in order.
pub fn loaded_dashboard(pages: Vec<Page>) -> Dashboard {
    let mut dashboard = dashboard();
    for (index, page) in pages.into_iter().enumerate() {
        let effects = if index == 0 {
            dashboard.start()
        } else {
            dashboard.fetch_next()
        };
        let req = fetch_request(effects);
        dashboard.page_loaded(req.ticket, Ok(page));
    }
    dashboard
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
