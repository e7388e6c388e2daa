//! Executes dashboard effects on the tokio runtime.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::api::{ListingSource, MatchService};
use crate::dashboard::Effect;

use super::events::AppEvent;

/// Spawns one task per effect and posts the outcome back to the UI loop.
#[derive(Clone)]
pub struct EffectRunner {
    handle: Handle,
    listing: Arc<dyn ListingSource>,
    matcher: Arc<dyn MatchService>,
    events: Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(
        handle: Handle,
        listing: Arc<dyn ListingSource>,
        matcher: Arc<dyn MatchService>,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            handle,
            listing,
            matcher,
            events,
        }
    }

    pub fn run_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    pub fn run(&self, effect: Effect) {
        let events = self.events.clone();
        match effect {
            Effect::FetchPage(req) => {
                let listing = Arc::clone(&self.listing);
                self.handle.spawn(async move {
                    let result = listing.fetch_page(&req.request).await;
                    if events
                        .send(AppEvent::PageLoaded {
                            ticket: req.ticket,
                            result,
                        })
                        .is_err()
                    {
                        tracing::trace!("Page response dropped (UI gone)");
                    }
                });
            }
            Effect::SubmitMatch { submission, ids } => {
                let matcher = Arc::clone(&self.matcher);
                self.handle.spawn(async move {
                    let result = matcher.find_match(&ids).await;
                    if events
                        .send(AppEvent::MatchFinished { submission, result })
                        .is_err()
                    {
                        tracing::trace!("Match response dropped (UI gone)");
                    }
                });
            }
        }
    }
}
