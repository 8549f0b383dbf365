//! Intersection-driven card reveal and hover lift.

use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::app::{Context, dom};
use crate::core::reveal::{
    HOVER_SELECTORS, Hover, REVEAL_SELECTORS, VISIBLE_CLASS, hidden_style, hover_transform,
    selector_list, visible_rule,
};
use crate::error::UiResult;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Observer plus the closure it calls; dropping it stops observation.
pub(crate) struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub(crate) fn wire(
    ctx: &Context,
    listeners: &mut Vec<EventListener>,
) -> UiResult<Option<RevealObserver>> {
    dom::log_failure(
        "reveal style injection failed",
        dom::inject_style(&visible_rule(&REVEAL_SELECTORS)),
    );

    let cards = Rc::new(dom::query_all(&selector_list(&REVEAL_SELECTORS)));
    wire_hover(ctx, &cards, listeners);
    if cards.is_empty() {
        return Ok(None);
    }

    let callback = on_intersect(ctx, &cards);
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ctx.config.reveal.threshold));
    options.set_root_margin(&ctx.config.reveal.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|err| dom::host_error("IntersectionObserver", &err))?;

    for (index, card) in cards.iter().enumerate() {
        let style = hidden_style(index, ctx.config.reveal.step_tenths);
        for (property, value) in [
            ("opacity", style.opacity),
            ("transform", style.transform),
            ("transition", style.transition.as_str()),
        ] {
            dom::log_failure(
                "reveal style update failed",
                dom::set_style(card, property, value),
            );
        }
        observer.observe(card);
    }

    Ok(Some(RevealObserver {
        observer,
        _callback: callback,
    }))
}

fn on_intersect(ctx: &Context, cards: &Rc<Vec<Element>>) -> ObserverCallback {
    let ctx = ctx.clone();
    let cards = Rc::clone(cards);
    Closure::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            let Some(index) = cards
                .iter()
                .position(|card| dom::same_element(card, &target))
            else {
                continue;
            };
            let first = ctx.state.borrow_mut().revealed.mark(index);
            if first {
                dom::log_failure(
                    "reveal class update failed",
                    dom::set_class(&target, VISIBLE_CLASS, true),
                );
            }
            observer.unobserve(&target);
        }
    })
}

fn wire_hover(ctx: &Context, cards: &Rc<Vec<Element>>, listeners: &mut Vec<EventListener>) {
    let hover_selectors = selector_list(&HOVER_SELECTORS);
    for (index, card) in cards.iter().enumerate() {
        if !card.matches(&hover_selectors).unwrap_or(false) {
            continue;
        }
        for (event_type, hover) in [("mouseenter", Hover::Enter), ("mouseleave", Hover::Leave)] {
            let ctx = ctx.clone();
            let target = card.clone();
            listeners.push(EventListener::new(card, event_type, move |_| {
                let revealed = ctx.state.borrow().revealed.contains(index);
                if let Some(transform) = hover_transform(revealed, hover) {
                    dom::log_failure(
                        "card hover update failed",
                        dom::set_style(&target, "transform", transform),
                    );
                }
            }));
        }
    }
}
