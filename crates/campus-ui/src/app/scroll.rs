//! Smooth in-page anchor scrolling and the header shadow.

use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::window;

use crate::app::{Context, dom};
use crate::core::scroll::{
    ANCHOR_SELECTOR, HEADER_SELECTOR, HeaderShadow, NAVIGATION_BAR_SELECTOR, anchor_target,
    scroll_destination,
};

pub(crate) fn wire(ctx: &Context, listeners: &mut Vec<EventListener>) {
    let header_offset = ctx.config.header_offset_px;
    for anchor in dom::query_all(ANCHOR_SELECTOR) {
        let link = anchor.clone();
        listeners.push(EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let Some(href) = link.get_attribute("href") else {
                    return;
                };
                let Some(target) = anchor_target(&href).and_then(dom::by_id) else {
                    return;
                };
                let top = target.get_bounding_client_rect().top();
                dom::smooth_scroll_to(scroll_destination(
                    top,
                    dom::page_y_offset(),
                    header_offset,
                ));
            },
        ));
    }

    let header = dom::query(HEADER_SELECTOR);
    let navigation_bar = dom::query(NAVIGATION_BAR_SELECTOR);
    let threshold = ctx.config.shadow_threshold_px;
    listeners.push(EventListener::new(&window(), "scroll", move |_| {
        let shadow = HeaderShadow::for_offset(dom::page_y_offset(), threshold);
        if let Some(header) = &header {
            dom::log_failure(
                "header shadow update failed",
                dom::set_style(header, "box-shadow", shadow.header()),
            );
        }
        if let Some(bar) = &navigation_bar {
            dom::log_failure(
                "navigation bar shadow update failed",
                dom::set_style(bar, "box-shadow", shadow.navigation_bar()),
            );
        }
    }));
}
