//! Thin, failure-tolerant wrappers over web-sys document calls.

use gloo::console;
use gloo::utils::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CssStyleDeclaration, Element, Event, HtmlElement, Node, ScrollBehavior, ScrollToOptions,
    SvgElement,
};

use crate::error::{DomError, UiError, UiResult};

/// Used when the host cannot report a width.
const FALLBACK_WIDTH: f64 = 1280.0;

pub(crate) fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    let Ok(nodes) = document().query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub(crate) fn same_element(left: &Element, right: &Element) -> bool {
    AsRef::<JsValue>::as_ref(left) == AsRef::<JsValue>::as_ref(right)
}

pub(crate) fn event_node(event: &Event) -> Option<Node> {
    event.target()?.dyn_into::<Node>().ok()
}

pub(crate) fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Inline style of an HTML or SVG element (logo icons are inline SVG).
fn inline_style(element: &Element) -> UiResult<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        Ok(html.style())
    } else if let Some(svg) = element.dyn_ref::<SvgElement>() {
        Ok(svg.style())
    } else {
        Err(DomError::Missing {
            what: "styleable element",
        }
        .into())
    }
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) -> UiResult<()> {
    inline_style(element)?
        .set_property(property, value)
        .map_err(|err| host_error("style.setProperty", &err))
}

pub(crate) fn set_class(element: &Element, class: &str, enabled: bool) -> UiResult<()> {
    element
        .class_list()
        .toggle_with_force(class, enabled)
        .map(|_| ())
        .map_err(|err| host_error("classList.toggle", &err))
}

pub(crate) fn inject_style(css: &str) -> UiResult<()> {
    let document = document();
    let style = document
        .create_element("style")
        .map_err(|err| host_error("createElement", &err))?;
    style.set_text_content(Some(css));
    let head = document.head().ok_or(DomError::Missing {
        what: "document head",
    })?;
    head.append_child(&style)
        .map_err(|err| host_error("appendChild", &err))?;
    Ok(())
}

pub(crate) fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(FALLBACK_WIDTH)
}

pub(crate) fn page_y_offset() -> f64 {
    window().page_y_offset().unwrap_or(0.0)
}

pub(crate) fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_with_scroll_to_options(&options);
}

pub(crate) fn host_error(operation: &'static str, err: &JsValue) -> UiError {
    let detail = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"));
    DomError::Operation { operation, detail }.into()
}

pub(crate) fn log_failure(context: &'static str, result: UiResult<()>) {
    if let Err(err) = result {
        console::error!(context, format!("{err:?}"));
    }
}
