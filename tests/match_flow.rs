//! Match submission: one request per opening, snapshot selection, late responses.

mod common;

use common::{loaded_dashboard, match_submission, page};
use pawmatch::api::{ApiError, MatchResponse};
use pawmatch::dashboard::matching::MatchDialogState;
use pawmatch::dashboard::MatchView;
use std::time::Instant;

fn resolved(id: &str) -> Result<MatchResponse, ApiError> {
    Ok(MatchResponse {
        match_id: id.to_string(),
    })
}

#[test]
fn test_open_submits_selection_in_order() {
    let mut dashboard = loaded_dashboard(vec![page(&["a", "b", "c"], None)]);
    dashboard.toggle("c");
    dashboard.toggle("a");

    let (submission, ids) = match_submission(dashboard.open_match());
    assert_eq!(ids, ["c", "a"]);
    assert_eq!(dashboard.match_view(), MatchView::Loading);
    assert_eq!(dashboard.match_dialog().submission(), Some(submission));
}

#[test]
fn test_reopening_issues_a_new_submission() {
    let mut dashboard = loaded_dashboard(vec![page(&["a", "b"], None)]);
    dashboard.toggle("a");

    let (first, _) = match_submission(dashboard.open_match());
    assert!(dashboard.open_match().is_empty(), "already open");
    dashboard.close_match();
    let (second, _) = match_submission(dashboard.open_match());

    assert_ne!(first, second);
}

#[test]
fn test_resolution_covers_every_loaded_page() {
    let mut dashboard = loaded_dashboard(vec![
        page(&["a", "b"], Some("p2")),
        page(&["c"], None),
    ]);
    let now = Instant::now();

    let (submission, _) = match_submission(dashboard.open_match());
    dashboard.match_finished(submission, resolved("c"), now);

    match dashboard.match_view() {
        MatchView::Found(dog) => assert_eq!(dog.id, "c"),
        other => panic!("expected a found match, got {other:?}"),
    }
    assert_eq!(dashboard.match_dialog().match_id(), Some("c"));
}

#[test]
fn test_unknown_match_id_is_not_found() {
    let mut dashboard = loaded_dashboard(vec![page(&["a", "b", "c"], None)]);
    let (submission, _) = match_submission(dashboard.open_match());
    dashboard.match_finished(submission, resolved("z"), Instant::now());

    assert_eq!(dashboard.match_view(), MatchView::NotFound);
}

#[test]
fn test_selection_changes_after_open_do_not_affect_submission() {
    let mut dashboard = loaded_dashboard(vec![page(&["a", "b"], None)]);
    dashboard.toggle("a");

    let (_, ids) = match_submission(dashboard.open_match());
    dashboard.toggle("b");
    dashboard.toggle("a");

    assert_eq!(ids, ["a"]);
    match dashboard.match_dialog() {
        MatchDialogState::Submitting { selection, .. } => assert_eq!(selection, &["a"]),
        other => panic!("unexpected state {other:?}"),
    }
    assert_eq!(dashboard.selection().ids(), ["b"]);
}

#[test]
fn test_late_response_after_close_is_ignored() {
    let mut dashboard = loaded_dashboard(vec![page(&["a", "b"], None)]);
    let now = Instant::now();

    let (first, _) = match_submission(dashboard.open_match());
    dashboard.close_match();
    let (second, _) = match_submission(dashboard.open_match());

    dashboard.match_finished(first, resolved("a"), now);
    assert_eq!(dashboard.match_view(), MatchView::Loading);

    dashboard.match_finished(second, resolved("b"), now);
    assert!(matches!(dashboard.match_view(), MatchView::Found(dog) if dog.id == "b"));
}

#[test]
fn test_response_after_close_leaves_dialog_closed() {
    let mut dashboard = loaded_dashboard(vec![page(&["a"], None)]);
    let (submission, _) = match_submission(dashboard.open_match());
    dashboard.close_match();

    dashboard.match_finished(submission, resolved("a"), Instant::now());
    assert_eq!(dashboard.match_view(), MatchView::Hidden);
    assert!(!dashboard.match_dialog().is_open());
}

#[test]
fn test_failure_raises_toast_and_shows_not_found() {
    let mut dashboard = loaded_dashboard(vec![page(&["a"], None)]);
    let now = Instant::now();
    let (submission, _) = match_submission(dashboard.open_match());

    dashboard.match_finished(
        submission,
        Err(ApiError::Status {
            status: 401,
            message: "unauthorized".to_string(),
        }),
        now,
    );

    let view = dashboard.view();
    assert_eq!(view.match_view, MatchView::NotFound);
    assert_eq!(view.toast.map(|t| t.message.as_str()), Some("401 request."));
    assert!(dashboard.match_dialog().is_open());
}

#[test]
fn test_empty_selection_is_still_submitted() {
    let mut dashboard = loaded_dashboard(vec![page(&["a"], None)]);
    let (_, ids) = match_submission(dashboard.open_match());
    assert!(ids.is_empty());
}
