//! Mobile menu toggle, dropdown parents and resize handling.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::{document, window};
use web_sys::{Element, Event, EventTarget};

use crate::app::{Context, dom};
use crate::core::nav::{
    DROPDOWN_OPEN_CLASS, LINK_SELECTOR, MENU_ID, MENU_OPEN_CLASS, NavEvent, NavState, TOGGLE_ID,
};

struct NavElements {
    toggle: Option<Element>,
    menu: Option<Element>,
    items: Vec<Element>,
}

pub(crate) fn wire(ctx: &Context, items: Vec<Element>, listeners: &mut Vec<EventListener>) {
    let elements = Rc::new(NavElements {
        toggle: dom::by_id(TOGGLE_ID),
        menu: dom::by_id(MENU_ID),
        items,
    });

    if let Some(toggle) = &elements.toggle {
        listeners.push(listen(ctx, &elements, toggle, "click", |_| {
            Some(NavEvent::ToggleActivated)
        }));
    }

    let parent_links: Vec<Option<Element>> = elements
        .items
        .iter()
        .map(|item| item.query_selector(LINK_SELECTOR).ok().flatten())
        .collect();
    for link in dom::query_all(LINK_SELECTOR) {
        let event = parent_links
            .iter()
            .position(|parent| {
                parent
                    .as_ref()
                    .is_some_and(|parent| dom::same_element(parent, &link))
            })
            .map_or(NavEvent::LinkActivated, |item| {
                NavEvent::ParentLinkActivated { item }
            });
        listeners.push(listen(ctx, &elements, &link, "click", move |_| Some(event)));
    }

    if let (Some(toggle), Some(menu)) = (elements.toggle.clone(), elements.menu.clone()) {
        listeners.push(listen(ctx, &elements, &document(), "click", move |event| {
            let target = dom::event_node(event)?;
            Some(NavEvent::DocumentClicked {
                inside_toggle: toggle.contains(Some(&target)),
                inside_menu: menu.contains(Some(&target)),
            })
        }));
    }

    for (item, element) in elements.items.iter().enumerate() {
        listeners.push(listen(ctx, &elements, element, "mouseenter", move |_| {
            Some(NavEvent::PointerEntered { item })
        }));
        listeners.push(listen(ctx, &elements, element, "mouseleave", move |_| {
            Some(NavEvent::PointerLeft { item })
        }));
    }

    listeners.push(listen(ctx, &elements, &window(), "resize", |_| {
        Some(NavEvent::Resized)
    }));
}

fn listen<F>(
    ctx: &Context,
    elements: &Rc<NavElements>,
    target: &EventTarget,
    event_type: &'static str,
    classify: F,
) -> EventListener
where
    F: Fn(&Event) -> Option<NavEvent> + 'static,
{
    let ctx = ctx.clone();
    let elements = Rc::clone(elements);
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(nav_event) = classify(event) else {
                return;
            };
            let width = dom::viewport_width();
            let (outcome, snapshot) = {
                let mut state = ctx.state.borrow_mut();
                let outcome = state.nav.apply(nav_event, width);
                (outcome, state.nav.clone())
            };
            if outcome.prevent_default {
                event.prevent_default();
            }
            if outcome.changed {
                paint(&elements, &snapshot);
            }
        },
    )
}

fn paint(elements: &NavElements, nav: &NavState) {
    for element in [&elements.toggle, &elements.menu].into_iter().flatten() {
        dom::log_failure(
            "menu class update failed",
            dom::set_class(element, MENU_OPEN_CLASS, nav.menu_open),
        );
    }
    for (index, item) in elements.items.iter().enumerate() {
        dom::log_failure(
            "dropdown class update failed",
            dom::set_class(item, DROPDOWN_OPEN_CLASS, nav.is_dropdown_open(index)),
        );
    }
}
