use super::common::*;
use crate::jobs::query::DEFAULT_PAGE_SIZE;
use crate::jobs::state::QueryState;

#[test]
fn defaults_match_the_browse_view() {
    let state = QueryState::default();

    assert_eq!(state.search_query, "");
    assert_eq!(state.category, None);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn next_page_stops_at_the_last_page() {
    let mut state = QueryState::default();
    let total = 13;

    assert!(state.next_page(total));
    assert!(state.next_page(total));
    assert_eq!(state.current_page, 3);
    assert!(!state.next_page(total), "13 results fit on three pages of six");
    assert_eq!(state.current_page, 3);
}

#[test]
fn previous_page_stops_at_the_first_page() {
    let mut state = QueryState::default();

    assert!(!state.previous_page());
    assert_eq!(state.current_page, 1);

    state.current_page = 2;
    assert!(state.previous_page());
    assert_eq!(state.current_page, 1);
}

#[test]
fn clamp_keeps_page_within_result_range() {
    let mut state = QueryState {
        current_page: 9,
        ..QueryState::default()
    };

    state.clamp(7);
    assert_eq!(state.current_page, 2);

    state.clamp(0);
    assert_eq!(state.current_page, 1);

    state.current_page = 0;
    state.clamp(20);
    assert_eq!(state.current_page, 1);
}

#[test]
fn selecting_the_empty_option_clears_the_category() {
    let mut state = QueryState::default();

    state.select_category("Remote");
    assert_eq!(state.category.as_deref(), Some("Remote"));

    state.select_category("");
    assert_eq!(state.category, None);

    state.select_category("Yearly");
    state.clear_category();
    assert_eq!(state.category, None);
}

#[test]
fn evaluate_uses_current_inputs() {
    let jobs = scenario_jobs();
    let mut state = QueryState::default();

    state.set_search_query("dev");
    let page = state.evaluate(&jobs);
    assert_eq!(titles(&page.jobs), vec!["Frontend Dev"]);

    state.set_search_query("");
    state.select_category("full-time");
    let page = state.evaluate(&jobs);
    assert_eq!(titles(&page.jobs), vec!["Backend Engineer"]);
    assert_eq!(page.total, 1);
}

#[test]
fn stale_page_after_narrowing_is_empty_until_clamped() {
    let jobs = numbered_jobs(13);
    let mut state = QueryState {
        current_page: 3,
        ..QueryState::default()
    };

    state.set_search_query("engineer 1");
    let page = state.evaluate(&jobs);
    assert!(page.is_empty());
    assert_eq!(page.total, 5, "Engineer 1 and Engineer 10 through 13");

    state.clamp(page.total);
    let page = state.evaluate(&jobs);
    assert_eq!(state.current_page, 1);
    assert_eq!(page.jobs.len(), 5);
}
