//! Browser adapter: finds the page elements, wires listeners and paints the
//! decisions made by [`crate::core`].

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;

use crate::config::BehaviorConfig;
use crate::core::nav::{DROPDOWN_ITEM_SELECTOR, NavState};
use crate::core::state::{PageState, document_loading};

mod category;
mod dom;
mod menu;
mod preferences;
mod reveal;
mod scroll;
mod search;
mod theme;

/// Shared handles captured by every listener.
#[derive(Clone)]
pub(crate) struct Context {
    pub(crate) state: Rc<RefCell<PageState>>,
    pub(crate) config: Rc<BehaviorConfig>,
}

/// Listener handles and the reveal observer, kept alive for the page lifetime.
struct PageController {
    _listeners: Vec<EventListener>,
    _reveal: Option<reveal::RevealObserver>,
}

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

/// Start the page behavior controller once the document structure is ready.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = document();
    if document_loading(&document.ready_state()) {
        EventListener::once(&document, "DOMContentLoaded", |_| start()).forget();
    } else {
        start();
    }
}

fn start() {
    let config = preferences::load_config();
    let items = dom::query_all(DROPDOWN_ITEM_SELECTOR);
    let nav = NavState::new(
        items.len(),
        dom::viewport_width(),
        config.breakpoint_px,
        config.nav_mode,
    );
    let ctx = Context {
        state: Rc::new(RefCell::new(PageState::new(nav))),
        config: Rc::new(config),
    };

    let mut listeners = Vec::new();
    menu::wire(&ctx, items, &mut listeners);
    scroll::wire(&ctx, &mut listeners);
    search::wire(&mut listeners);
    let reveal = match reveal::wire(&ctx, &mut listeners) {
        Ok(observer) => observer,
        Err(err) => {
            console::error!("scroll reveal unavailable", format!("{err:?}"));
            None
        }
    };
    category::wire(&ctx, &mut listeners);
    theme::wire(&ctx, &mut listeners);

    CONTROLLER.with(|slot| {
        *slot.borrow_mut() = Some(PageController {
            _listeners: listeners,
            _reveal: reveal,
        });
    });
}
