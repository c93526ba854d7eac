//! The "See the Relief" before/after inbox demo.
//!
//! [`DemoState`] is the whole state machine: two values, selected by two
//! tab buttons, starting at [`DemoState::Before`] on every page load.
//! [`DemoInbox`] is a pure view over one state so exactly one pane ever
//! exists; [`DemoSection`] adds the tabs and a short exit/enter swap
//! animation on top.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Milliseconds the outgoing pane gets to play its exit animation before
/// the incoming pane is mounted. Cosmetic only; selection itself is
/// synchronous.
const PANE_SWAP_MS: u32 = 180;

/// Which of the two demo inboxes is shown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DemoState {
    Before,
    After,
}

impl DemoState {
    pub const fn label(self) -> &'static str {
        match self {
            DemoState::Before => "Before",
            DemoState::After => "After",
        }
    }

    /// Stable key for DOM keying and logs.
    pub const fn key(self) -> &'static str {
        match self {
            DemoState::Before => "before",
            DemoState::After => "after",
        }
    }

    /// The three example messages rendered for this state, in authored
    /// order.
    pub const fn messages(self) -> &'static [DemoMessage] {
        match self {
            DemoState::Before => &BEFORE_MESSAGES,
            DemoState::After => &AFTER_MESSAGES,
        }
    }
}

/// Visual tone of one demo message row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageTone {
    /// Red-bordered stress mail.
    Alarm,
    /// Faded, years-old noise.
    Stale,
    /// The protected-inbox status card.
    Shielded,
    /// Calm, safe-to-read mail.
    Calm,
}

impl MessageTone {
    pub const fn class(self) -> &'static str {
        match self {
            MessageTone::Alarm => "alarm",
            MessageTone::Stale => "stale",
            MessageTone::Shielded => "shielded",
            MessageTone::Calm => "calm",
        }
    }
}

/// One row of the demo inbox.
#[derive(PartialEq, Eq, Debug)]
pub struct DemoMessage {
    pub icon: &'static str,
    pub headline: &'static str,
    pub body: &'static str,
    pub tone: MessageTone,
}

static BEFORE_MESSAGES: [DemoMessage; 3] = [
    DemoMessage {
        icon: "fas fa-triangle-exclamation",
        headline: "FINAL WARNING: Account Suspension",
        body: "Your subscription has expired. Pay now to avoid collections.",
        tone: MessageTone::Alarm,
    },
    DemoMessage {
        icon: "fas fa-bolt",
        headline: "URGENT: 90% OFF ENDS IN 2 HOURS",
        body: "Don't miss out on this once-in-a-lifetime predatory offer!",
        tone: MessageTone::Alarm,
    },
    DemoMessage {
        icon: "fas fa-clock",
        headline: "Newsletter: Weekly Update #452",
        body: "Here is some content you haven't read in 3 years.",
        tone: MessageTone::Stale,
    },
];

static AFTER_MESSAGES: [DemoMessage; 3] = [
    DemoMessage {
        icon: "fas fa-shield-halved",
        headline: "Inbox Protected",
        body: "3 predatory senders neutralized. 2 high-pressure emails moved to \"Handle When Ready\".",
        tone: MessageTone::Shielded,
    },
    DemoMessage {
        icon: "fas fa-circle-check",
        headline: "Essential: Utility Bill",
        body: "Your electricity bill is ready. No manipulative language detected.",
        tone: MessageTone::Calm,
    },
    DemoMessage {
        icon: "fas fa-heart",
        headline: "Handle When Ready (2)",
        body: "Sensitive financial updates are waiting for you when you're calm.",
        tone: MessageTone::Calm,
    },
];

/// Outcome of clicking a tab: the state to move to, or `None` when the
/// click lands on the tab already selected.
pub(crate) fn select_transition(current: DemoState, target: DemoState) -> Option<DemoState> {
    if current == target {
        None
    } else {
        Some(target)
    }
}

#[derive(Properties, PartialEq)]
pub struct DemoInboxProps {
    pub state: DemoState,
}

/// One demo inbox pane. Stateless: the pane for the given state and
/// nothing else.
#[function_component(DemoInbox)]
pub fn demo_inbox(props: &DemoInboxProps) -> Html {
    html! {
        <div class="demo-inbox">
            { for props.state.messages().iter().enumerate().map(|(index, message)| html! {
                <div key={index.to_string()} class={classes!("demo-mail", message.tone.class())}>
                    <i class={message.icon}></i>
                    <div class="demo-mail-copy">
                        <div class="demo-mail-title">{message.headline}</div>
                        <div class="demo-mail-body">{message.body}</div>
                    </div>
                </div>
            }) }
        </div>
    }
}

/// The demo card: Before/After tabs above a single animated inbox pane.
#[function_component(DemoSection)]
pub fn demo_section() -> Html {
    // What the user picked; updates synchronously so the tab highlight
    // never lags.
    let selected = use_state(|| DemoState::Before);
    // What is currently mounted; trails `selected` by one exit animation.
    let shown = use_state(|| DemoState::Before);
    let leaving = use_state(|| false);

    let select = {
        let selected = selected.clone();
        let shown = shown.clone();
        let leaving = leaving.clone();
        Callback::from(move |target: DemoState| {
            if select_transition(*selected, target).is_none() {
                return;
            }
            log::debug!("demo view -> {}", target.key());
            selected.set(target);
            leaving.set(true);
            let shown = shown.clone();
            let leaving = leaving.clone();
            Timeout::new(PANE_SWAP_MS, move || {
                shown.set(target);
                leaving.set(false);
            })
            .forget();
        })
    };

    let tab = |target: DemoState| {
        let select = select.clone();
        let active = *selected == target;
        let onclick = Callback::from(move |_: MouseEvent| select.emit(target));
        html! {
            <button
                class={classes!("demo-tab", active.then_some("active"))}
                aria-pressed={if active { "true" } else { "false" }}
                {onclick}
            >
                {target.label()}
            </button>
        }
    };

    html! {
        <div class="demo-card">
            <div class="demo-tabs">
                {tab(DemoState::Before)}
                {tab(DemoState::After)}
            </div>
            <div class="demo-stage">
                <div
                    key={shown.key()}
                    class={classes!("demo-pane", if *leaving { "leaving" } else { "entering" })}
                >
                    <DemoInbox state={*shown} />
                </div>
            </div>
            <style>
                {r#"
                .demo-card {
                    max-width: 900px;
                    margin: 0 auto;
                    border-radius: 20px;
                    border: 1px solid rgba(139, 92, 246, 0.2);
                    background: rgba(20, 17, 34, 0.7);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 0 60px rgba(139, 92, 246, 0.12);
                    overflow: hidden;
                }
                .demo-tabs {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 1rem;
                    background: rgba(11, 10, 18, 0.4);
                    border-bottom: 1px solid rgba(139, 92, 246, 0.15);
                }
                .demo-tab {
                    padding: 0.6rem 1.8rem;
                    border-radius: 999px;
                    border: 1px solid transparent;
                    background: none;
                    color: #b7b0d4;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .demo-tab:hover {
                    color: #fff;
                }
                .demo-tab.active {
                    background: linear-gradient(135deg, #8b5cf6, #6d28d9);
                    border-color: rgba(139, 92, 246, 0.5);
                    color: #fff;
                    box-shadow: 0 0 25px rgba(139, 92, 246, 0.45);
                }
                .demo-stage {
                    min-height: 450px;
                    padding: 2rem;
                    background: rgba(11, 10, 18, 0.5);
                    overflow: hidden;
                }
                .demo-pane.entering {
                    animation: demo-pane-in 0.3s ease;
                }
                .demo-pane.leaving {
                    animation: demo-pane-out 0.18s ease forwards;
                }
                @keyframes demo-pane-in {
                    from { opacity: 0; transform: translateX(20px); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes demo-pane-out {
                    to { opacity: 0; transform: translateX(-20px); }
                }
                .demo-inbox {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .demo-mail {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    padding: 1.25rem;
                    border-radius: 14px;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(20, 17, 34, 0.6);
                }
                .demo-mail i {
                    font-size: 1.3rem;
                    margin-top: 0.2rem;
                }
                .demo-mail-title {
                    font-weight: 700;
                    font-size: 1.1rem;
                    margin-bottom: 0.25rem;
                }
                .demo-mail-body {
                    color: #b7b0d4;
                    font-size: 0.95rem;
                    line-height: 1.5;
                }
                .demo-mail.alarm {
                    border-color: rgba(244, 63, 94, 0.3);
                    background: rgba(244, 63, 94, 0.06);
                }
                .demo-mail.alarm i,
                .demo-mail.alarm .demo-mail-title {
                    color: #fb7185;
                }
                .demo-mail.stale {
                    opacity: 0.4;
                }
                .demo-mail.shielded {
                    border-color: rgba(139, 92, 246, 0.35);
                    background: rgba(139, 92, 246, 0.07);
                    box-shadow: 0 0 30px rgba(139, 92, 246, 0.2);
                }
                .demo-mail.shielded i,
                .demo-mail.shielded .demo-mail-title {
                    color: #a78bfa;
                }
                .demo-mail.calm i {
                    color: #a78bfa;
                }
                @media (max-width: 768px) {
                    .demo-stage {
                        padding: 1rem;
                        min-height: 380px;
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
    fn both_states_author_three_messages() {
        assert_eq!(DemoState::Before.messages().len(), 3);
        assert_eq!(DemoState::After.messages().len(), 3);
    }

    #[test]
    fn before_and_after_share_no_headlines() {
        for before in DemoState::Before.messages() {
            for after in DemoState::After.messages() {
                assert_ne!(before.headline, after.headline);
            }
        }
    }

    #[test]
    fn before_leads_with_the_stress_mail() {
        let messages = DemoState::Before.messages();
        assert_eq!(messages[0].headline, "FINAL WARNING: Account Suspension");
        assert_eq!(messages[0].tone, MessageTone::Alarm);
        assert_eq!(messages[2].tone, MessageTone::Stale);
    }

    #[test]
    fn after_leads_with_the_protection_summary() {
        let messages = DemoState::After.messages();
        assert_eq!(messages[0].headline, "Inbox Protected");
        assert_eq!(messages[0].tone, MessageTone::Shielded);
    }

    #[test]
    fn state_keys_and_labels_are_distinct() {
        assert_ne!(DemoState::Before.key(), DemoState::After.key());
        assert_ne!(DemoState::Before.label(), DemoState::After.label());
    }

    #[test]
    fn selecting_the_current_tab_is_a_no_op() {
        assert_eq!(select_transition(DemoState::Before, DemoState::Before), None);
        assert_eq!(select_transition(DemoState::After, DemoState::After), None);
    }

    #[test]
    fn selection_round_trips_between_the_two_states() {
        let to_after = select_transition(DemoState::Before, DemoState::After);
        assert_eq!(to_after, Some(DemoState::After));
        let back = select_transition(to_after.unwrap(), DemoState::Before);
        assert_eq!(back, Some(DemoState::Before));
    }
}
