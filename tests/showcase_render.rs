//! Server side render checks for the demo toggle and feature dialogs.

use yew::prelude::*;
use yew::LocalServerRenderer;

use inboxbully::showcase::catalog::{feature_by_id, FEATURES};
use inboxbully::showcase::demo::{DemoInbox, DemoInboxProps, DemoSection, DemoState};
use inboxbully::showcase::feature_card::{FeatureCard, FeatureDialog, FeatureDialogProps, FeatureGrid};

// The renderer spawns its writer task on the current thread, so every
// render runs inside a LocalSet.
async fn render_local(render: impl std::future::Future<Output = String>) -> String {
    tokio::task::LocalSet::new().run_until(render).await
}

async fn render_inbox(state: DemoState) -> String {
    render_local(
        LocalServerRenderer::<DemoInbox>::with_props(DemoInboxProps { state })
            .hydratable(false)
            .render(),
    )
    .await
}

async fn render_dialog(id: &str) -> String {
    let feature = feature_by_id(id).unwrap();
    render_local(
        LocalServerRenderer::<FeatureDialog>::with_props(FeatureDialogProps {
            feature,
            on_close: Callback::noop(),
        })
        .hydratable(false)
        .render(),
    )
    .await
}

// One feature's dialog open next to another feature's untouched card.
#[function_component(OneOpenDialog)]
fn one_open_dialog() -> Html {
    let unsubscribe = feature_by_id("unsubscribe").unwrap();
    let filters = feature_by_id("filters").unwrap();
    html! {
        <>
            <FeatureDialog feature={unsubscribe} on_close={Callback::noop()} />
            <FeatureCard feature={filters} />
        </>
    }
}

#[tokio::test]
async fn demo_inbox_renders_exactly_one_state() {
    let before = render_inbox(DemoState::Before).await;
    assert!(before.contains("FINAL WARNING: Account Suspension"));
    assert!(before.contains("URGENT: 90% OFF ENDS IN 2 HOURS"));
    assert!(before.contains("Newsletter: Weekly Update #452"));
    assert!(!before.contains("Inbox Protected"));

    let after = render_inbox(DemoState::After).await;
    assert!(after.contains("Inbox Protected"));
    assert!(after.contains("Essential: Utility Bill"));
    assert!(after.contains("Handle When Ready (2)"));
    assert!(!after.contains("FINAL WARNING"));
}

#[tokio::test]
async fn demo_section_starts_on_the_before_view() {
    let html = render_local(
        LocalServerRenderer::<DemoSection>::new()
            .hydratable(false)
            .render(),
    )
    .await;
    assert!(html.contains("FINAL WARNING: Account Suspension"));
    assert!(!html.contains("Inbox Protected"));
    assert!(html.contains("class=\"demo-tab active\""));
    assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
    assert_eq!(html.matches("aria-pressed=\"false\"").count(), 1);
}

#[tokio::test]
async fn unsubscribe_dialog_renders_detection_then_actions_then_outcome() {
    let html = render_dialog("unsubscribe").await;
    assert!(html.contains("Smart Unsubscribe Defense"));
    assert!(html.contains("How it protects you"));
    assert!(html.contains("Automatic Detection"));
    assert!(html.contains("Automatic Actions"));
    assert!(html.contains("Predatory subscriptions"));
    assert!(html.contains("Bulk unsubscribes with one click"));
    // 4 identifies rows plus 3 actions rows
    assert_eq!(html.matches("detail-item").count(), 7);
    let detection = html.find("Automatic Detection").unwrap();
    let actions = html.find("Automatic Actions").unwrap();
    assert!(detection < actions);
    assert!(html.contains("Core Outcome"));
    assert!(html.contains("Reclaim your mental energy and stop unwanted financial leaks."));
    assert!(!html.contains("data-section=\"folders\""));
    assert!(!html.contains("Stress Triggers"));
    assert!(!html.contains("Smart Organization"));
}

#[tokio::test]
async fn prompt_dialog_renders_only_the_examples_section() {
    let html = render_dialog("prompt").await;
    assert!(html.contains("AI Assistant Examples"));
    assert!(html.contains("Remove everything that stresses me out except my bills."));
    assert!(html.contains("Help me get my life back in order."));
    assert_eq!(html.matches("data-section=").count(), 1);
    assert!(html.contains("Complex organization handled through simple, calm conversation."));
}

#[tokio::test]
async fn filters_dialog_preserves_authored_section_and_item_order() {
    let html = render_dialog("filters").await;
    let folders = html.find("data-section=\"folders\"").unwrap();
    let detects = html.find("data-section=\"detects\"").unwrap();
    assert!(folders < detects);

    let debt = html.find("Debt threats").unwrap();
    let guilt = html.find("Guilt-based marketing").unwrap();
    let collections = html.find("Aggressive collections").unwrap();
    let spam = html.find("High-pressure spam").unwrap();
    assert!(debt < guilt);
    assert!(guilt < collections);
    assert!(collections < spam);
}

#[tokio::test]
async fn dialog_render_is_stable_across_reopens() {
    let first = render_dialog("guardrails").await;
    let second = render_dialog("guardrails").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn every_dialog_ends_on_its_outcome_block() {
    for feature in FEATURES.iter() {
        let html = render_dialog(feature.id).await;
        let outcome_at = html.find("dialog-outcome").unwrap();
        let last_section_at = html.rfind("data-section=").unwrap();
        assert!(
            last_section_at < outcome_at,
            "outcome must follow every section for {}",
            feature.id
        );
        let outcome = feature.details.outcome();
        let head = outcome
            .split(|c| c == '\'' || c == '"')
            .next()
            .unwrap_or(outcome);
        assert!(html.contains(head), "missing outcome copy for {}", feature.id);
    }
}

#[tokio::test]
async fn dialog_contains_only_its_own_feature() {
    let html = render_dialog("filters").await;
    assert!(html.contains("Emotional Safety Filters"));
    assert!(html.contains("aria-labelledby=\"filters-dialog-title\""));
    for feature in FEATURES.iter().filter(|feature| feature.id != "filters") {
        assert!(!html.contains(feature.title));
    }
}

#[tokio::test]
async fn an_open_dialog_leaves_every_other_card_closed() {
    let html = render_local(
        LocalServerRenderer::<OneOpenDialog>::new()
            .hydratable(false)
            .render(),
    )
    .await;
    assert_eq!(html.matches("class=\"dialog-backdrop\"").count(), 1);
    assert_eq!(html.matches("role=\"dialog\"").count(), 1);
    assert!(html.contains("aria-labelledby=\"unsubscribe-dialog-title\""));
    // The other card still offers its closed trigger and no dialog.
    assert_eq!(html.matches("Deep Dive").count(), 1);
    assert!(html.contains("Emotional Safety Filters"));
    assert!(!html.contains("filters-dialog-title"));
}

#[tokio::test]
async fn feature_grid_lists_every_feature_with_no_open_dialog() {
    let html = render_local(
        LocalServerRenderer::<FeatureGrid>::new()
            .hydratable(false)
            .render(),
    )
    .await;
    assert_eq!(html.matches("Deep Dive").count(), 6);
    for feature in FEATURES.iter() {
        assert!(html.contains(feature.title));
        assert!(html.contains(feature.summary));
    }
    assert!(!html.contains("class=\"dialog-backdrop\""));
    assert!(!html.contains("role=\"dialog\""));
}
