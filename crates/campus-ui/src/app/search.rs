//! Search box stub: submissions are logged, never sent.

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::app::dom;
use crate::core::search::{INPUT_SELECTOR, LOG_PREFIX, SUBMIT_SELECTOR, is_submit_key, keyword};

pub(crate) fn wire(listeners: &mut Vec<EventListener>) {
    let input = dom::query(INPUT_SELECTOR).and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    let submit = dom::query(SUBMIT_SELECTOR).and_then(|el| el.dyn_into::<HtmlElement>().ok());

    if let Some(button) = &submit {
        let input = input.clone();
        listeners.push(EventListener::new_with_options(
            button,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let raw = input
                    .as_ref()
                    .map(HtmlInputElement::value)
                    .unwrap_or_default();
                if let Some(keyword) = keyword(&raw) {
                    console::log!(LOG_PREFIX, keyword);
                }
            },
        ));
    }

    if let Some(field) = &input {
        listeners.push(EventListener::new_with_options(
            field,
            "keypress",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if !is_submit_key(&key_event.key()) {
                    return;
                }
                event.prevent_default();
                if let Some(button) = &submit {
                    button.click();
                }
            },
        ));
    }
}
