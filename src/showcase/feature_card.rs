//! Feature cards and their "Deep Dive" detail dialogs.
//!
//! Every card owns its dialog: a per-card open flag means opening one
//! feature never touches another and two dialogs can in principle be
//! open at once. The dialog itself is a plain component over a
//! [`FeatureDescriptor`] reference, so it renders the same section list
//! every time it mounts.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::catalog::{FeatureDescriptor, SectionStyle, FEATURES};

#[derive(Properties, PartialEq)]
pub struct FeatureDialogProps {
    pub feature: &'static FeatureDescriptor,
    pub on_close: Callback<()>,
}

/// Modal detail view for one feature.
///
/// Dismissal: the corner button, a click on the backdrop, or Escape.
/// Focus moves to the panel on mount and is trapped there: Tab and
/// Shift+Tab wrap inside the panel until the dialog closes. The opener
/// is responsible for taking focus back on close.
#[function_component(FeatureDialog)]
pub fn feature_dialog(props: &FeatureDialogProps) -> Html {
    let panel_ref = use_node_ref();

    {
        let panel_ref = panel_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(panel) = panel_ref.cast::<HtmlElement>() {
                    let _ = panel.focus();
                }
                || ()
            },
            (),
        );
    }

    {
        let on_close = props.on_close.clone();
        let panel_ref = panel_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|window| window.document());
                let on_keydown =
                    Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                        match event.key().as_str() {
                            "Escape" => on_close.emit(()),
                            "Tab" => {
                                if let Some(panel) = panel_ref.cast::<HtmlElement>() {
                                    confine_tab(&event, &panel);
                                }
                            }
                            _ => {}
                        }
                    });
                if let Some(document) = document.as_ref() {
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        on_keydown.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_panel_click = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let feature = props.feature;
    let title_id = format!("{}-dialog-title", feature.id);

    html! {
        <div class="dialog-backdrop" onclick={on_backdrop_click}>
            <div
                ref={panel_ref}
                class="dialog-panel"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                tabindex="-1"
                onclick={on_panel_click}
            >
                <button class="dialog-close" aria-label="Close" onclick={on_close_click}>
                    <i class="fas fa-xmark"></i>
                </button>
                <div class="dialog-icon"><i class={feature.icon}></i></div>
                <h3 id={title_id} class="dialog-title">{feature.title}</h3>
                <p class="dialog-subtitle">{"How it protects you"}</p>
                <div class="dialog-sections">
                    { for feature.details.sections()
                        .filter(|(_, items)| !items.is_empty())
                        .map(|(kind, items)| html! {
                            <div key={kind.key()} class="dialog-section" data-section={kind.key()}>
                                <h4 class="dialog-section-heading">{kind.heading()}</h4>
                                { section_body(kind.style(), items) }
                            </div>
                        }) }
                    <div class="dialog-outcome">
                        <i class="fas fa-bolt"></i>
                        <div>
                            <div class="dialog-outcome-label">{"Core Outcome"}</div>
                            <div class="dialog-outcome-text">{feature.details.outcome()}</div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

/// Keeps a Tab press inside the panel: wraps at either end and pulls
/// focus back in when it has drifted outside.
fn confine_tab(event: &KeyboardEvent, panel: &HtmlElement) {
    let focusables = focusable_elements(panel);
    if focusables.is_empty() {
        event.prevent_default();
        let _ = panel.focus();
        return;
    }
    let active = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element());
    let from = match active.as_ref() {
        Some(element) => {
            let position = focusables.iter().position(|focusable| {
                let focusable: &Element = focusable.as_ref();
                focusable == element
            });
            match position {
                Some(index) => FocusPoint::Item(index),
                None if panel.contains(Some(element.as_ref())) => FocusPoint::Panel,
                None => FocusPoint::Outside,
            }
        }
        None => FocusPoint::Outside,
    };
    if let Some(index) = tab_trap_target(focusables.len(), from, event.shift_key()) {
        event.prevent_default();
        if let Some(target) = focusables.get(index) {
            let _ = target.focus();
        }
    }
}

fn focusable_elements(panel: &HtmlElement) -> Vec<HtmlElement> {
    let Ok(nodes) = panel.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Where focus lives relative to the dialog panel when a Tab press
/// arrives.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum FocusPoint {
    Outside,
    Panel,
    Item(usize),
}

/// The focusable a Tab press must jump to for focus to stay inside the
/// panel, or `None` when the browser's own order already stays inside.
fn tab_trap_target(count: usize, from: FocusPoint, shift: bool) -> Option<usize> {
    let last = count.saturating_sub(1);
    match (from, shift) {
        (FocusPoint::Outside, false) => Some(0),
        (FocusPoint::Outside, true) => Some(last),
        (FocusPoint::Panel, false) => None,
        (FocusPoint::Panel, true) => Some(last),
        (FocusPoint::Item(index), false) => (index == last).then_some(0),
        (FocusPoint::Item(index), true) => (index == 0).then_some(last),
    }
}

fn section_body(style: SectionStyle, items: &'static [&'static str]) -> Html {
    match style {
        SectionStyle::Checklist => html! {
            <ul class="detail-list">
                { for items.iter().enumerate().map(|(index, item)| html! {
                    <li key={index.to_string()} class="detail-item check">
                        <i class="fas fa-circle-check"></i>
                        <span>{*item}</span>
                    </li>
                }) }
            </ul>
        },
        SectionStyle::Steps => html! {
            <ol class="detail-list">
                { for items.iter().enumerate().map(|(index, item)| html! {
                    <li key={index.to_string()} class="detail-item step">
                        <span class="step-number">{index + 1}</span>
                        <span>{*item}</span>
                    </li>
                }) }
            </ol>
        },
        SectionStyle::Tags => html! {
            <div class="detail-tags">
                { for items.iter().enumerate().map(|(index, item)| html! {
                    <span key={index.to_string()} class="detail-tag">{*item}</span>
                }) }
            </div>
        },
        SectionStyle::Alerts => html! {
            <ul class="detail-list">
                { for items.iter().enumerate().map(|(index, item)| html! {
                    <li key={index.to_string()} class="detail-item alert">
                        <i class="fas fa-triangle-exclamation"></i>
                        <span>{*item}</span>
                    </li>
                }) }
            </ul>
        },
        SectionStyle::Quotes => html! {
            <div class="detail-quotes">
                { for items.iter().enumerate().map(|(index, item)| html! {
                    <div key={index.to_string()} class="detail-quote">{format!("\"{}\"", item)}</div>
                }) }
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: &'static FeatureDescriptor,
}

/// One grid card: icon, title, summary and the dialog trigger.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let open = use_state(|| false);
    let trigger_ref = use_node_ref();

    let on_open = {
        let open = open.clone();
        let id = props.feature.id;
        Callback::from(move |_: MouseEvent| {
            log::debug!("feature dialog open: {}", id);
            open.set(true);
        })
    };
    let on_close = {
        let open = open.clone();
        let trigger_ref = trigger_ref.clone();
        let id = props.feature.id;
        Callback::from(move |_: ()| {
            log::debug!("feature dialog close: {}", id);
            open.set(false);
            if let Some(trigger) = trigger_ref.cast::<HtmlElement>() {
                let _ = trigger.focus();
            }
        })
    };

    html! {
        <div class="feature-card">
            <div class="feature-icon"><i class={props.feature.icon}></i></div>
            <h3 class="feature-title">{props.feature.title}</h3>
            <p class="feature-summary">{props.feature.summary}</p>
            <button ref={trigger_ref} class="feature-open" onclick={on_open}>
                {"Deep Dive"}
                <i class="fas fa-circle-info"></i>
            </button>
            if *open {
                <FeatureDialog feature={props.feature} on_close={on_close} />
            }
        </div>
    }
}

/// The six-card feature grid plus the styling for cards and dialogs.
#[function_component(FeatureGrid)]
pub fn feature_grid() -> Html {
    html! {
        <div class="feature-grid">
            { for FEATURES.iter().map(|feature| html! {
                <FeatureCard key={feature.id} feature={feature} />
            }) }
            <style>
                {r#"
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .feature-card {
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 20px;
                    border: 1px solid rgba(139, 92, 246, 0.12);
                    background: rgba(20, 17, 34, 0.6);
                    transition: border-color 0.4s ease, transform 0.4s ease;
                }
                .feature-card:hover {
                    border-color: rgba(139, 92, 246, 0.4);
                    transform: translateY(-4px);
                }
                .feature-icon {
                    width: 56px;
                    height: 56px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 16px;
                    background: rgba(139, 92, 246, 0.12);
                    margin-bottom: 1.5rem;
                }
                .feature-icon i {
                    color: #a78bfa;
                    font-size: 1.5rem;
                }
                .feature-title {
                    font-size: 1.5rem;
                    color: #a78bfa;
                    margin: 0 0 1rem;
                }
                .feature-summary {
                    color: #b7b0d4;
                    line-height: 1.6;
                    flex-grow: 1;
                    margin: 0 0 2rem;
                }
                .feature-open {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    width: 100%;
                    padding: 0.6rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(139, 92, 246, 0.15);
                    background: rgba(139, 92, 246, 0.06);
                    color: #e9e5ff;
                    font-size: 0.95rem;
                    cursor: pointer;
                    transition: border-color 0.3s ease;
                }
                .feature-open:hover {
                    border-color: rgba(139, 92, 246, 0.5);
                }
                .feature-open i {
                    opacity: 0.5;
                }
                .feature-open:hover i {
                    opacity: 1;
                }
                .dialog-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                    background: rgba(5, 4, 10, 0.75);
                    backdrop-filter: blur(6px);
                    animation: backdrop-in 0.2s ease;
                }
                .dialog-panel {
                    position: relative;
                    width: 100%;
                    max-width: 42rem;
                    max-height: 85vh;
                    overflow-y: auto;
                    padding: 2rem;
                    border-radius: 20px;
                    border: 1px solid rgba(139, 92, 246, 0.25);
                    background: rgba(13, 11, 22, 0.98);
                    box-shadow: 0 0 80px rgba(139, 92, 246, 0.2);
                    animation: panel-in 0.25s ease;
                    outline: none;
                }
                .dialog-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 2.2rem;
                    height: 2.2rem;
                    border-radius: 50%;
                    border: none;
                    background: rgba(139, 92, 246, 0.1);
                    color: #b7b0d4;
                    cursor: pointer;
                }
                .dialog-close:hover {
                    color: #fff;
                    background: rgba(139, 92, 246, 0.25);
                }
                .dialog-icon {
                    width: 56px;
                    height: 56px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 16px;
                    background: rgba(139, 92, 246, 0.12);
                    margin-bottom: 1.5rem;
                }
                .dialog-icon i {
                    color: #a78bfa;
                    font-size: 1.5rem;
                }
                .dialog-title {
                    font-size: 1.9rem;
                    color: #a78bfa;
                    margin: 0;
                }
                .dialog-subtitle {
                    font-size: 1.1rem;
                    color: rgba(167, 139, 250, 0.6);
                    margin: 0.5rem 0 0;
                }
                .dialog-sections {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    margin-top: 2rem;
                }
                .dialog-section-heading {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: #8d86ab;
                    margin: 0 0 1rem;
                }
                .detail-list {
                    list-style: none;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1rem;
                    margin: 0;
                    padding: 0;
                }
                .detail-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    font-size: 0.9rem;
                    color: rgba(244, 242, 255, 0.8);
                }
                .detail-item.check i {
                    color: #a78bfa;
                }
                .detail-item.alert i {
                    color: #fb7185;
                }
                .detail-item.step .step-number {
                    flex-shrink: 0;
                    width: 1.5rem;
                    height: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(139, 92, 246, 0.15);
                    color: #a78bfa;
                    font-size: 0.75rem;
                    font-weight: 700;
                }
                .detail-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .detail-tag {
                    padding: 0.25rem 0.8rem;
                    border-radius: 999px;
                    border: 1px solid rgba(139, 92, 246, 0.2);
                    background: rgba(139, 92, 246, 0.1);
                    color: #a78bfa;
                    font-size: 0.85rem;
                }
                .detail-quotes {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .detail-quote {
                    padding: 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(139, 92, 246, 0.1);
                    background: rgba(139, 92, 246, 0.05);
                    font-style: italic;
                    font-size: 0.9rem;
                    color: rgba(167, 139, 250, 0.9);
                }
                .dialog-outcome {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem;
                    border-radius: 16px;
                    border: 1px solid rgba(139, 92, 246, 0.1);
                    background: rgba(139, 92, 246, 0.05);
                    margin-top: 0.5rem;
                }
                .dialog-outcome > i {
                    color: #a78bfa;
                    font-size: 1.3rem;
                    flex-shrink: 0;
                }
                .dialog-outcome-label {
                    font-size: 0.8rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #a78bfa;
                }
                .dialog-outcome-text {
                    color: rgba(244, 242, 255, 0.7);
                    margin-top: 0.25rem;
                }
                @keyframes backdrop-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes panel-in {
                    from { opacity: 0; transform: scale(0.96); }
                    to { opacity: 1; transform: none; }
                }
                @media (max-width: 768px) {
                    .dialog-panel {
                        padding: 1.5rem;
                        max-height: 90vh;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_from_the_last_focusable_wraps_to_the_first() {
        assert_eq!(tab_trap_target(3, FocusPoint::Item(2), false), Some(0));
        assert_eq!(tab_trap_target(1, FocusPoint::Item(0), false), Some(0));
    }

    #[test]
    fn shift_tab_from_the_first_focusable_wraps_to_the_last() {
        assert_eq!(tab_trap_target(3, FocusPoint::Item(0), true), Some(2));
        assert_eq!(tab_trap_target(1, FocusPoint::Item(0), true), Some(0));
    }

    #[test]
    fn interior_moves_are_left_to_the_browser() {
        assert_eq!(tab_trap_target(3, FocusPoint::Item(1), false), None);
        assert_eq!(tab_trap_target(3, FocusPoint::Item(1), true), None);
        assert_eq!(tab_trap_target(3, FocusPoint::Panel, false), None);
    }

    #[test]
    fn focus_outside_the_panel_is_pulled_back_in() {
        assert_eq!(tab_trap_target(2, FocusPoint::Outside, false), Some(0));
        assert_eq!(tab_trap_target(2, FocusPoint::Outside, true), Some(1));
        assert_eq!(tab_trap_target(2, FocusPoint::Panel, true), Some(1));
    }
}
