/// Site header: scroll-aware navigation bar, mobile menu and theme toggle

use crate::content::OWNER;
use crate::navigation::{DomLocator, NavChrome, ScrollTracker, SECTIONS};
use crate::storage::{persist_theme, restore_theme, Theme};
use gloo_timers::callback::Timeout;
use patternfly_yew::prelude::{Button, ButtonVariant};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    let chrome = use_state_eq(NavChrome::default);
    let tracker = use_mut_ref(ScrollTracker::default);
    let menu_open = use_state(|| false);
    let theme = use_state(Theme::default);

    // Restore the saved theme on mount
    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            theme.set(restore_theme());
            || ()
        });
    }

    // Track scrolling for the lifetime of the header
    {
        let chrome = chrome.setter();
        let tracker = tracker.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window();
            let trailing: Rc<RefCell<Option<Timeout>>> = Rc::default();

            let handler = window.as_ref().map(|window| {
                let handler_window = window.clone();
                let trailing = trailing.clone();

                let handler = Closure::<dyn FnMut()>::new(move || {
                    let Some(locator) = DomLocator::new(&handler_window) else {
                        return;
                    };
                    let now = js_sys::Date::now();
                    let offset = handler_window.scroll_y().unwrap_or(0.0);

                    let (next, delay) = {
                        let mut tracker = tracker.borrow_mut();
                        let was_pending = tracker.has_pending();
                        let next = tracker.on_scroll(now, offset, &locator);
                        let delay = (next.is_none() && !was_pending).then(|| tracker.flush_delay(now));
                        (next, delay)
                    };

                    if let Some(state) = next {
                        chrome.set(state.chrome());
                    }

                    // Throttled: make sure this event still lands once the window closes
                    if let Some(delay) = delay {
                        let tracker = tracker.clone();
                        let chrome = chrome.clone();
                        let window = handler_window.clone();
                        let timeout = Timeout::new(delay.ceil() as u32, move || {
                            let Some(locator) = DomLocator::new(&window) else {
                                return;
                            };
                            let flushed = tracker.borrow_mut().flush(js_sys::Date::now(), &locator);
                            if let Some(state) = flushed {
                                chrome.set(state.chrome());
                            }
                        });
                        *trailing.borrow_mut() = Some(timeout);
                    }
                });

                if let Err(e) = window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref()) {
                    log::warn!("Could not listen for scroll events: {:?}", e);
                }
                handler
            });

            move || {
                trailing.borrow_mut().take();
                if let (Some(window), Some(handler)) = (window, handler) {
                    if let Err(e) = window.remove_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref()) {
                        log::warn!("Could not remove scroll listener: {:?}", e);
                    }
                }
            }
        });
    }

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| {
            menu_open.set(!*menu_open);
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            persist_theme(next);
            theme.set(next);
        })
    };

    let on_nav_click = {
        let menu_open = menu_open.clone();
        move |anchor: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to(anchor);
                menu_open.set(false);
            })
        }
    };

    let header_class = classes!(
        "site-header",
        chrome.compacted.then_some("compact"),
        (!chrome.visible).then_some("hidden"),
    );

    let nav_links = |class: &'static str| -> Html {
        html! {
            {for SECTIONS.iter().map(|section| {
                let active = chrome.active_section == section.name;
                html! {
                    <a
                        key={section.name}
                        href={section.anchor}
                        class={classes!(class, active.then_some("active"))}
                        aria-current={active.then_some("page")}
                        onclick={on_nav_click(section.anchor)}
                    >
                        {section.name}
                    </a>
                }
            })}
        }
    };

    let theme_label = if theme.is_dark() { "☀ Light" } else { "☾ Dark" };

    html! {
        <header class={header_class}>
            <nav class="nav-body">
                <a href="#home" class="nav-logo" onclick={on_nav_click("#home")}>{OWNER}</a>

                <div class="nav-items">
                    {nav_links("nav-link")}
                </div>

                <div class="nav-actions">
                    <Button onclick={on_toggle_theme} variant={ButtonVariant::Secondary}>
                        {theme_label}
                    </Button>
                    <button
                        class="mobile-toggle"
                        aria-label="Toggle menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={on_toggle_menu}
                    >
                        {if *menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>

            if *menu_open {
                <div class="mobile-menu">
                    {nav_links("mobile-link")}
                </div>
            }
        </header>
    }
}

/// Smoothly scroll a section into view
fn scroll_to(anchor: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(anchor).ok().flatten());

    match target {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("No element for {}", anchor),
    }
}
