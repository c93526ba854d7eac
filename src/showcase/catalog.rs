//! Static feature catalog backing the landing page showcase.
//!
//! Every card, dialog section and outcome string on the features grid comes
//! from [`FEATURES`]. The data is fixed at compile time: descriptors are
//! `&'static`, section lists keep their authored order, and a descriptor
//! without an `outcome` fails the build rather than rendering broken.

/// How a section's rows are drawn inside the detail dialog.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionStyle {
    /// Check-marked capability rows.
    Checklist,
    /// Numbered process steps.
    Steps,
    /// Short categorical badges.
    Tags,
    /// Alert-toned rows for stress triggers.
    Alerts,
    /// Italic quoted lines (assistant prompts, gentle warnings).
    Quotes,
}

/// The fixed set of optional detail sections a feature can author.
///
/// [`SectionKind::ORDER`] is the one rendering order the dialog uses:
/// identification and process first, then actions and safeguards, then
/// categorical tags, then warning material, then free-text examples. The
/// outcome is not a kind; it is mandatory and always closes the dialog.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionKind {
    Identifies,
    Process,
    Actions,
    Features,
    Folders,
    Modes,
    Detects,
    Warnings,
    NeverDeletes,
    Examples,
}

impl SectionKind {
    /// Dialog rendering order. Stable; tests pin it.
    pub const ORDER: [SectionKind; 10] = [
        SectionKind::Identifies,
        SectionKind::Process,
        SectionKind::Actions,
        SectionKind::Features,
        SectionKind::Folders,
        SectionKind::Modes,
        SectionKind::Detects,
        SectionKind::Warnings,
        SectionKind::NeverDeletes,
        SectionKind::Examples,
    ];

    /// Stable key, used as a DOM marker (`data-section`).
    pub const fn key(self) -> &'static str {
        match self {
            SectionKind::Identifies => "identifies",
            SectionKind::Process => "process",
            SectionKind::Actions => "actions",
            SectionKind::Features => "features",
            SectionKind::Folders => "folders",
            SectionKind::Modes => "modes",
            SectionKind::Detects => "detects",
            SectionKind::Warnings => "warnings",
            SectionKind::NeverDeletes => "never-deletes",
            SectionKind::Examples => "examples",
        }
    }

    /// Section heading shown in the dialog.
    pub const fn heading(self) -> &'static str {
        match self {
            SectionKind::Identifies => "Automatic Detection",
            SectionKind::Process => "How It Works",
            SectionKind::Actions => "Automatic Actions",
            SectionKind::Features => "Built-In Safeguards",
            SectionKind::Folders => "Smart Organization",
            SectionKind::Modes => "Cleanup Modes",
            SectionKind::Detects => "Stress Triggers",
            SectionKind::Warnings => "Gentle Check-Ins",
            SectionKind::NeverDeletes => "Never Deleted Automatically",
            SectionKind::Examples => "AI Assistant Examples",
        }
    }

    pub const fn style(self) -> SectionStyle {
        match self {
            SectionKind::Identifies | SectionKind::Actions | SectionKind::Features => {
                SectionStyle::Checklist
            }
            SectionKind::Process => SectionStyle::Steps,
            SectionKind::Folders | SectionKind::Modes | SectionKind::NeverDeletes => {
                SectionStyle::Tags
            }
            SectionKind::Detects => SectionStyle::Alerts,
            SectionKind::Warnings | SectionKind::Examples => SectionStyle::Quotes,
        }
    }
}

/// The optional detail sections of one feature plus its mandatory outcome.
///
/// An empty slice means the feature does not author that section and the
/// dialog must omit the block entirely. Constructed only through
/// [`FeatureDetails::with_outcome`], which rejects an empty outcome at
/// compile time.
#[derive(PartialEq, Eq, Debug)]
pub struct FeatureDetails {
    identifies: &'static [&'static str],
    process: &'static [&'static str],
    actions: &'static [&'static str],
    features: &'static [&'static str],
    folders: &'static [&'static str],
    modes: &'static [&'static str],
    detects: &'static [&'static str],
    warnings: &'static [&'static str],
    never_deletes: &'static [&'static str],
    examples: &'static [&'static str],
    outcome: &'static str,
}

impl FeatureDetails {
    pub const fn with_outcome(outcome: &'static str) -> Self {
        assert!(
            !outcome.is_empty(),
            "every feature must author a non-empty outcome"
        );
        Self {
            identifies: &[],
            process: &[],
            actions: &[],
            features: &[],
            folders: &[],
            modes: &[],
            detects: &[],
            warnings: &[],
            never_deletes: &[],
            examples: &[],
            outcome,
        }
    }

    pub const fn identifies(mut self, items: &'static [&'static str]) -> Self {
        self.identifies = items;
        self
    }

    pub const fn process(mut self, items: &'static [&'static str]) -> Self {
        self.process = items;
        self
    }

    pub const fn actions(mut self, items: &'static [&'static str]) -> Self {
        self.actions = items;
        self
    }

    pub const fn features(mut self, items: &'static [&'static str]) -> Self {
        self.features = items;
        self
    }

    pub const fn folders(mut self, items: &'static [&'static str]) -> Self {
        self.folders = items;
        self
    }

    pub const fn modes(mut self, items: &'static [&'static str]) -> Self {
        self.modes = items;
        self
    }

    pub const fn detects(mut self, items: &'static [&'static str]) -> Self {
        self.detects = items;
        self
    }

    pub const fn warnings(mut self, items: &'static [&'static str]) -> Self {
        self.warnings = items;
        self
    }

    pub const fn never_deletes(mut self, items: &'static [&'static str]) -> Self {
        self.never_deletes = items;
        self
    }

    pub const fn examples(mut self, items: &'static [&'static str]) -> Self {
        self.examples = items;
        self
    }

    /// Closing line of every dialog. Non-empty by construction.
    pub const fn outcome(&self) -> &'static str {
        self.outcome
    }

    pub const fn section(&self, kind: SectionKind) -> &'static [&'static str] {
        match kind {
            SectionKind::Identifies => self.identifies,
            SectionKind::Process => self.process,
            SectionKind::Actions => self.actions,
            SectionKind::Features => self.features,
            SectionKind::Folders => self.folders,
            SectionKind::Modes => self.modes,
            SectionKind::Detects => self.detects,
            SectionKind::Warnings => self.warnings,
            SectionKind::NeverDeletes => self.never_deletes,
            SectionKind::Examples => self.examples,
        }
    }

    /// All known section kinds in rendering order, paired with their items.
    /// Absent sections come through as empty slices; callers that render
    /// skip those.
    pub fn sections(
        &self,
    ) -> impl Iterator<Item = (SectionKind, &'static [&'static str])> + '_ {
        SectionKind::ORDER
            .into_iter()
            .map(move |kind| (kind, self.section(kind)))
    }
}

/// One entry of the features grid.
#[derive(PartialEq, Eq, Debug)]
pub struct FeatureDescriptor {
    /// Unique, stable; used as list key and DOM id prefix.
    pub id: &'static str,
    pub title: &'static str,
    /// One-paragraph teaser shown on the card.
    pub summary: &'static str,
    /// Font Awesome class for the card and dialog glyph.
    pub icon: &'static str,
    pub details: FeatureDetails,
}

/// The six showcase features, in grid order.
pub static FEATURES: [FeatureDescriptor; 6] = [
    FeatureDescriptor {
        id: "unsubscribe",
        title: "Smart Unsubscribe Defense",
        icon: "fas fa-shield-halved",
        summary: "Neutralize predatory funnels before they bleed you dry. InboxBully identifies and shuts down aggressive marketing loops automatically.",
        details: FeatureDetails::with_outcome(
            "Reclaim your mental energy and stop unwanted financial leaks.",
        )
        .identifies(&[
            "Predatory subscriptions",
            "Manipulative marketing funnels",
            "Hidden recurring charges",
            "Fake urgency pressure tactics",
        ])
        .actions(&[
            "Bulk unsubscribes with one click",
            "Prioritizes high-cost senders",
            "Protects essential accounts",
        ]),
    },
    FeatureDescriptor {
        id: "filters",
        title: "Emotional Safety Filters",
        icon: "fas fa-filter",
        summary: "Your inbox shouldn’t ambush you. Stress-inducing emails get routed to a safe space until you’re ready.",
        details: FeatureDetails::with_outcome(
            "Soften the blow. View sensitive information only when you are emotionally ready.",
        )
        .folders(&[
            "Essential Accounts",
            "Renewal Alerts",
            "Handle When Ready",
            "Noise Filter",
        ])
        .detects(&[
            "Debt threats",
            "Guilt-based marketing",
            "Aggressive collections",
            "High-pressure spam",
        ]),
    },
    FeatureDescriptor {
        id: "cleanup",
        title: "Confident Bulk Cleanup",
        icon: "fas fa-trash-can",
        summary: "Reduce the clutter without fear. InboxBully explains every deletion in plain language so you always understand why.",
        details: FeatureDetails::with_outcome(
            "A clean slate without the anxiety of losing something important.",
        )
        .process(&[
            "Deep history analysis",
            "Identifies safe-to-delete noise",
            "Explains exactly why it's safe",
        ])
        .modes(&["One-tap purge", "Guided review mode"]),
    },
    FeatureDescriptor {
        id: "prompt",
        title: "Human-Language Control",
        icon: "fas fa-comment-dots",
        summary: "Say what you want in normal words. InboxBully organizes your inbox like a trusted friend would.",
        details: FeatureDetails::with_outcome(
            "Complex organization handled through simple, calm conversation.",
        )
        .examples(&[
            "Remove everything that stresses me out except my bills.",
            "Find every subscription that's costing me money.",
            "Delete the shopping noise but keep my warranties.",
            "Help me get my life back in order.",
        ]),
    },
    FeatureDescriptor {
        id: "awareness",
        title: "Emotional Awareness",
        icon: "fas fa-triangle-exclamation",
        summary: "Gentle, thoughtful warnings for hard-hitting financial content. You stay in control, not your anxiety.",
        details: FeatureDetails::with_outcome(
            "Your inbox stops feeling like an attack and starts feeling like a tool.",
        )
        .warnings(&[
            "This email mentions debt — view now or save for later?",
            "Detected financial pressure language. Move to safety?",
            "This looks like a manipulative tactic. Want a draft response?",
        ]),
    },
    FeatureDescriptor {
        id: "guardrails",
        title: "Human-First Guardrails",
        icon: "fas fa-heart",
        summary: "Absolute safety. InboxBully never touches your most critical documents without you.",
        details: FeatureDetails::with_outcome(
            "Stability and trust. You are always the one in the driver's seat.",
        )
        .never_deletes(&[
            "Identity documents",
            "Financial access",
            "Government notices",
            "Legal records",
        ])
        .features(&["Instant Undo", "Full transparency", "Human-readable logs"]),
    },
];

pub fn feature_by_id(id: &str) -> Option<&'static FeatureDescriptor> {
    FEATURES.iter().find(|feature| feature.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_feature_has_a_nonempty_outcome() {
        for feature in &FEATURES {
            assert!(
                !feature.details.outcome().is_empty(),
                "{} is missing its outcome",
                feature.id
            );
        }
    }

    #[test]
    fn feature_ids_are_unique() {
        let ids: HashSet<_> = FEATURES.iter().map(|feature| feature.id).collect();
        assert_eq!(ids.len(), FEATURES.len());
    }

    #[test]
    fn lookup_by_id_round_trips() {
        for feature in &FEATURES {
            let found = feature_by_id(feature.id).expect("id present in catalog");
            assert_eq!(found.title, feature.title);
        }
        assert!(feature_by_id("nonexistent").is_none());
    }

    #[test]
    fn section_order_is_stable() {
        let unsubscribe = feature_by_id("unsubscribe").unwrap();
        let kinds: Vec<_> = unsubscribe.details.sections().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, SectionKind::ORDER.to_vec());
    }

    #[test]
    fn unsubscribe_authors_detection_and_actions_only() {
        let details = &feature_by_id("unsubscribe").unwrap().details;
        assert_eq!(details.section(SectionKind::Identifies).len(), 4);
        assert_eq!(details.section(SectionKind::Actions).len(), 3);
        for kind in SectionKind::ORDER {
            if kind != SectionKind::Identifies && kind != SectionKind::Actions {
                assert!(
                    details.section(kind).is_empty(),
                    "unexpected {:?} section on unsubscribe",
                    kind
                );
            }
        }
    }

    #[test]
    fn authored_list_order_is_preserved() {
        let details = &feature_by_id("filters").unwrap().details;
        assert_eq!(
            details.section(SectionKind::Detects),
            [
                "Debt threats",
                "Guilt-based marketing",
                "Aggressive collections",
                "High-pressure spam",
            ]
        );
    }

    #[test]
    fn every_authored_section_is_reachable_in_order() {
        // Each feature's non-empty sections must appear in ORDER positions,
        // so the dialog never reorders what an author wrote.
        for feature in &FEATURES {
            let mut last_position = None;
            for (kind, items) in feature.details.sections() {
                if items.is_empty() {
                    continue;
                }
                let position = SectionKind::ORDER
                    .iter()
                    .position(|candidate| *candidate == kind)
                    .unwrap();
                if let Some(last) = last_position {
                    assert!(position > last, "sections out of order for {}", feature.id);
                }
                last_position = Some(position);
            }
        }
    }
}
