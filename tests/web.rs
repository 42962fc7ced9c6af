//! Browser-only checks; run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use portfolio_site::article_data::FeedState;
use portfolio_site::content::{TAGLINES, TAGLINE_INTERVAL_MS};
use portfolio_site::feed::fetch_articles;
use portfolio_site::navigation::{resolve_sections, DomLocator, SECTIONS};
use portfolio_site::storage::{persist_theme, restore_theme, Theme, ThemeStore};
use portfolio_site::ui::header::Header;
use portfolio_site::ui::sections::{scroll_to_top, Projects, Terminal};
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::{AppHandle, BaseComponent, Renderer};

wasm_bindgen_test_configure!(run_in_browser);

fn root_is_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains("dark"))
        .unwrap_or(false)
}

/// Render a component into a fresh element attached to the body
fn mount<C>() -> (AppHandle<C>, web_sys::Element)
where
    C: BaseComponent,
    C::Properties: Default,
{
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    let handle = Renderer::<C>::with_root(root.clone()).render();
    (handle, root)
}

fn click(root: &web_sys::Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {}", selector))
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

fn has(root: &web_sys::Element, selector: &str) -> bool {
    root.query_selector(selector).unwrap().is_some()
}

async fn settle() {
    sleep(Duration::from_millis(20)).await;
}

#[wasm_bindgen_test]
fn theme_persists_and_applies() {
    persist_theme(Theme::Dark);
    assert!(root_is_dark());
    assert_eq!(ThemeStore::new().unwrap().load().unwrap(), Theme::Dark);

    persist_theme(Theme::Light);
    assert!(!root_is_dark());
    assert_eq!(restore_theme(), Theme::Light);
}

#[wasm_bindgen_test]
fn dom_locator_finds_mounted_sections() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let body = document.body().unwrap();

    let section = document.create_element("section").unwrap();
    section.set_id("about");
    body.append_child(&section).unwrap();

    let locator = DomLocator::new(&window).unwrap();
    let resolved = resolve_sections(SECTIONS, &locator);

    assert!(resolved.iter().any(|s| s.name == "About"));
    assert!(resolved.iter().all(|s| s.name != "Contact"));

    body.remove_child(&section).unwrap();
}

#[wasm_bindgen_test]
async fn unreachable_feed_is_empty() {
    let articles = fetch_articles("http://127.0.0.1:9/never-listening").await;
    assert_eq!(FeedState::from_articles(articles), FeedState::LoadedEmpty);
}

#[wasm_bindgen_test]
async fn project_modal_closes_from_backdrop_only() {
    let (handle, root) = mount::<Projects>();
    settle().await;
    assert!(!has(&root, ".modal"));

    click(&root, ".project-card");
    settle().await;
    assert!(has(&root, ".modal"));

    click(&root, ".modal");
    settle().await;
    assert!(has(&root, ".modal"), "click inside the dialog closed it");

    click(&root, ".modal-backdrop");
    settle().await;
    assert!(!has(&root, ".modal"));

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
fn back_to_top_scrolls_window() {
    assert!(scroll_to_top().is_ok());
}

#[wasm_bindgen_test]
async fn terminal_rotates_taglines() {
    let (handle, root) = mount::<Terminal>();
    settle().await;

    let line = || root.query_selector(".terminal-line").unwrap().unwrap().text_content().unwrap_or_default();
    assert_eq!(line(), TAGLINES[0]);

    sleep(Duration::from_millis(u64::from(TAGLINE_INTERVAL_MS) + 200)).await;
    assert_eq!(line(), TAGLINES[1]);

    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn header_stops_listening_after_unmount() {
    let (handle, root) = mount::<Header>();
    settle().await;

    handle.destroy();
    settle().await;
    root.remove();

    // Teardown removed the listener; later scrolls dispatch without reaching the header
    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new("scroll").unwrap();
    assert!(window.dispatch_event(&event).is_ok());
}
