//! Integration tests for srcnav
//!
//! These drive a whole `BrowseSession` over the mock page handles and a
//! mock HTTP backend, checking the behaviour a user sees end to end.

use pretty_assertions::assert_eq;
use serde_json::json;
use srcnav::autocomplete::{AutocompleteAdapter, AutocompleteWidget, QueryClient, SearchKind, WidgetOptions};
use srcnav::config::{AutocompleteSettings, SrcnavConfig};
use srcnav::keybinds::DispatchOutcome;
use srcnav::locate::LineLocator;
use srcnav::session::{BrowseSession, PageParts};
use srcnav::tags::{HttpProbe, TagProbeResult, TagSwitcher};
use srcnav::ui::mock::{MockNavigator, MockOverlay, MockPage, MockSurfaces, MockWidget};
use srcnav::ui::{KeyEvent, Overlay, Page};
use srcnav::SearchMode;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Session = BrowseSession<MockPage, MockSurfaces, MockOverlay, MockNavigator>;

/// Helper function to start a session on `page` with default config
fn open(page: MockPage) -> Session {
    let parts = PageParts {
        page,
        surfaces: MockSurfaces::new(),
        help: MockOverlay::default(),
        about: MockOverlay::default(),
        navigator: MockNavigator::default(),
    };
    BrowseSession::new(parts, &SrcnavConfig::default()).unwrap()
}

/// Helper function to press one key on the document
fn press(session: &mut Session, key: char) -> (DispatchOutcome, bool) {
    let mut event = KeyEvent::new(key);
    let outcome = session.handle_keypress(&mut event);
    (outcome, event.default_prevented())
}

#[test]
fn test_g_scrolls_to_top_and_capital_g_to_bottom() {
    let mut session = open(MockPage::with_lines(300));
    session.page_mut().scroll_to(1200.0);

    press(&mut session, 'g');
    assert_eq!(session.page().scroll_offset(), 0.0);

    press(&mut session, 'G');
    assert_eq!(session.page().scroll_offset(), session.page().document_height());
}

#[test]
fn test_j_and_k_scroll_by_a_tenth_of_the_viewport() {
    let mut session = open(MockPage::with_lines(300));

    press(&mut session, 'j');
    press(&mut session, 'j');
    press(&mut session, 'k');
    assert_eq!(session.page().scroll_history, vec![80.0, 160.0, 80.0]);
}

#[test]
fn test_s_switches_to_symbol_surface_and_focuses_it() {
    let mut session = open(MockPage::new());
    session.select_mode(SearchMode::Text);

    let (outcome, prevented) = press(&mut session, 's');
    assert!(matches!(outcome, DispatchOutcome::Handled(_)));
    assert!(prevented);
    assert!(session.surfaces().only_visible(SearchMode::Symbol));
    assert_eq!(session.surfaces().focused, Some(SearchMode::Symbol));
    assert_eq!(session.surfaces().checked, Some(SearchMode::Symbol));
}

#[test]
fn test_keys_are_ignored_while_typing() {
    let mut session = open(MockPage::new());
    session.page_mut().text_entry_focused = true;

    let (outcome, prevented) = press(&mut session, 'f');
    assert_eq!(outcome, DispatchOutcome::Irrelevant);
    assert!(!prevented);
    assert_eq!(session.active_mode(), SearchMode::Symbol);
    assert!(session.surfaces().only_visible(SearchMode::Symbol));
}

#[test]
fn test_unbound_key_is_not_consumed() {
    let mut session = open(MockPage::new());
    let (outcome, prevented) = press(&mut session, 'z');
    assert_eq!(outcome, DispatchOutcome::Unbound);
    assert!(!prevented);
}

#[test]
fn test_overlays_toggle() {
    let mut session = open(MockPage::new());
    press(&mut session, '?');
    press(&mut session, 'a');
    press(&mut session, 'a');
    assert!(session.help().is_open());
    assert!(!session.about().is_open());
}

#[test]
fn test_line_mode_needs_line_markers() {
    let mut session = open(MockPage::new());
    let (_, prevented) = press(&mut session, ':');
    assert!(prevented);
    assert_eq!(session.active_mode(), SearchMode::Symbol);

    let mut session = open(MockPage::with_lines(5));
    press(&mut session, ':');
    assert_eq!(session.active_mode(), SearchMode::Line);
}

#[test]
fn test_push_line_then_pop_restores_every_start_mode() {
    for start in SearchMode::ALL {
        let mut session = open(MockPage::with_lines(5));
        session.select_mode(start);

        session.push_mode(SearchMode::Line, true);
        assert_eq!(session.pop_mode(false), start);
        assert_eq!(session.active_mode(), start);
    }
}

#[test]
fn test_explicit_choice_survives_a_later_pop() {
    let mut session = open(MockPage::new());
    session.push_mode(SearchMode::File, true);
    session.select_mode(SearchMode::File);

    session.pop_mode(false);
    assert_eq!(session.active_mode(), SearchMode::File);
}

#[test]
fn test_jump_to_line_past_the_end_lands_on_last_line() {
    let mut session = open(MockPage::with_lines(50));
    press(&mut session, ':');
    session.surfaces_mut().set_value(SearchMode::Line, "9999");

    let mut enter = KeyEvent::enter();
    session.handle_search_key(SearchMode::Line, &mut enter);

    let last = LineLocator::locate(session.page(), 50).unwrap();
    assert_eq!(LineLocator::locate(session.page(), 9999), Some(last));
    assert_eq!(session.page().highlights.len(), 1);
    assert_eq!(session.page().highlights[0].0, last);
    assert_eq!(session.page().scroll_offset(), last.top - 70.0);
    assert_eq!(session.active_mode(), SearchMode::Symbol);
}

#[test]
fn test_unparsable_line_still_pops() {
    let mut session = open(MockPage::with_lines(50));
    press(&mut session, ':');
    session.surfaces_mut().set_value(SearchMode::Line, "abc");

    let mut enter = KeyEvent::enter();
    session.handle_search_key(SearchMode::Line, &mut enter);
    assert!(session.page().scroll_history.is_empty());
    assert_eq!(session.active_mode(), SearchMode::Symbol);
}

#[test]
fn test_selecting_symbol_suggestion_navigates_to_anchor() {
    let mut session = open(MockPage::new());
    let server = Url::parse("http://code.example/").unwrap();
    let options = WidgetOptions::symbol(&server, "v1", &AutocompleteSettings::default()).unwrap();
    let adapter = AutocompleteAdapter::new(options);
    let mut widget = MockWidget::new();

    let id = widget.begin_query("len");
    let payload = json!({"data": [{"name": "len", "hash": "abc", "kinds": [
        {"kind": "CXXMethod", "defs": [], "decls": []},
        {"kind": "Var", "defs": [], "decls": []}
    ]}]});
    assert!(adapter.deliver(&mut widget, id, &payload));

    let picked = widget.suggestions()[1].clone();
    session.select_suggestion(&picked).unwrap();
    assert_eq!(session.navigator().last(), Some("../symbol/abc#SL1"));
}

#[tokio::test]
async fn test_query_client_feeds_widget() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/tree"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [
            {"file": "a.rs", "href": "/v1/sources/src/a.rs.html"},
            {"href": "/v1/sources/meta/index.html"}
        ]})))
        .mount(&server)
        .await;

    let client = QueryClient::new(Url::parse(&server.uri()).unwrap(), "v1").unwrap();
    let result = client.search(SearchKind::File, "a").await.unwrap();
    let names = result
        .suggestions
        .iter()
        .map(|s| s.display_value.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["a.rs", "(project root)"]);
}

#[tokio::test]
async fn test_tag_switch_falls_back_to_root() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/v2/sources/proj/file.cpp"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut session = open(MockPage::new());
    let current = Url::parse(&format!("{}/v1/sources/proj/file.cpp", server.uri())).unwrap();
    let switcher = TagSwitcher::new(HttpProbe::new().unwrap());

    let result = session.switch_tag(&switcher, &current, "v2").await.unwrap();
    assert!(matches!(result, TagProbeResult::NotFound { .. }));
    assert_eq!(
        session.navigator().last(),
        Some(format!("{}/v2/sources/meta/index.html", server.uri()).as_str())
    );
}

#[tokio::test]
async fn test_tag_switch_keeps_existing_page() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/v2/sources/proj/file.cpp"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut session = open(MockPage::new());
    let current = Url::parse(&format!("{}/v1/sources/proj/file.cpp", server.uri())).unwrap();
    let switcher = TagSwitcher::new(HttpProbe::new().unwrap());

    let result = session.switch_tag(&switcher, &current, "v2").await.unwrap();
    assert_eq!(result.target().path(), "/v2/sources/proj/file.cpp");
}
