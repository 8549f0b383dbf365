//! Category link highlight.

use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};

use crate::app::{Context, dom};
use crate::core::category::{ACTIVE_CLASS, CATEGORY_ACTIVE_RULE, LINK_SELECTOR};

pub(crate) fn wire(ctx: &Context, listeners: &mut Vec<EventListener>) {
    dom::log_failure(
        "category style injection failed",
        dom::inject_style(CATEGORY_ACTIVE_RULE),
    );

    let links = Rc::new(dom::query_all(LINK_SELECTOR));
    for (index, link) in links.iter().enumerate() {
        let ctx = ctx.clone();
        let links = Rc::clone(&links);
        listeners.push(EventListener::new_with_options(
            link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let flags = {
                    let mut state = ctx.state.borrow_mut();
                    state.category.select(index);
                    state.category.flags(links.len())
                };
                for (link, active) in links.iter().zip(flags) {
                    dom::log_failure(
                        "category class update failed",
                        dom::set_class(link, ACTIVE_CLASS, active),
                    );
                }
            },
        ));
    }
}
