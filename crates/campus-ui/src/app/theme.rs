//! Theme switcher: paints theme plans and wires the selector links.

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::document;

use crate::app::preferences::LocalPreferences;
use crate::app::{Context, dom};
use crate::core::prefs::stored_theme;
use crate::core::theme::{
    ACTIVE_CLASS, NAV_LINK_SELECTOR, Scope, THEME_ACTIVE_RULE, THEME_ATTRIBUTE,
    THEME_LINK_SELECTOR, ThemePlan,
};
use crate::error::{DomError, UiResult};

pub(crate) fn wire(ctx: &Context, listeners: &mut Vec<EventListener>) {
    dom::log_failure(
        "theme style injection failed",
        dom::inject_style(THEME_ACTIVE_RULE),
    );

    let saved = stored_theme(&LocalPreferences, &ctx.config.storage_key);
    apply(ctx, &saved);

    for link in dom::query_all(THEME_LINK_SELECTOR) {
        let ctx = ctx.clone();
        let source = link.clone();
        listeners.push(EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let requested = source.get_attribute(THEME_ATTRIBUTE).unwrap_or_default();
                apply(&ctx, &requested);
            },
        ));
    }

    // One delegated listener for every nav link, present or added later.
    let ctx = ctx.clone();
    listeners.push(EventListener::new(&document(), "mouseover", move |event| {
        let Some(background) = ctx.state.borrow().nav_hover_background() else {
            return;
        };
        let Some(link) = dom::event_element(event)
            .and_then(|element| element.closest(NAV_LINK_SELECTOR).ok().flatten())
        else {
            return;
        };
        dom::log_failure(
            "nav link hover update failed",
            dom::set_style(&link, "background-color", background),
        );
    }));
}

fn apply(ctx: &Context, requested: &str) {
    let mut store = LocalPreferences;
    let (plan, persisted) =
        ctx.state
            .borrow_mut()
            .apply_theme(requested, &mut store, &ctx.config.storage_key);
    paint(&plan);
    if let Err(err) = persisted {
        console::error!("theme persistence failed", format!("{err:?}"));
    }
}

fn paint(plan: &ThemePlan) {
    dom::log_failure("theme root variables update failed", paint_root(plan));

    for style in &plan.element_styles {
        let targets = match style.scope {
            Scope::First => dom::query(style.selector).into_iter().collect(),
            Scope::All => dom::query_all(style.selector),
        };
        for target in targets {
            dom::log_failure(
                "theme style update failed",
                dom::set_style(&target, style.property, &style.value),
            );
        }
    }

    for link in dom::query_all(THEME_LINK_SELECTOR) {
        let active = link.get_attribute(THEME_ATTRIBUTE).as_deref() == Some(plan.active_link());
        dom::log_failure(
            "theme link class update failed",
            dom::set_class(&link, ACTIVE_CLASS, active),
        );
    }
}

fn paint_root(plan: &ThemePlan) -> UiResult<()> {
    let root = document().document_element().ok_or(DomError::Missing {
        what: "document element",
    })?;
    for (name, value) in &plan.root_variables {
        dom::set_style(&root, name, value)?;
    }
    Ok(())
}
