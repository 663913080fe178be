//! # Reconciliation
//!
//! Patches a live container so it matches a freshly generated candidate tree
//! while touching as few nodes as possible.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Lock-step Pre-order Walk                          │
//! │                                                                         │
//! │  candidate elements:  c0  c1  c2  c3 ...                               │
//! │  live elements:       l0  l1  l2  l3 ...                               │
//! │                                                                         │
//! │  for each i:                                                            │
//! │    c[i] == l[i] (deep)            → skip                               │
//! │    first child of c[i] is text    → overwrite l[i] text                │
//! │      (non-blank, text differs)                                          │
//! │    otherwise unequal              → copy c[i] attributes onto l[i]     │
//! │                                                                         │
//! │  Shapes must be congruent (same element count and tag sequence).       │
//! │  Divergent shapes fall back to a full replace.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Patches are planned against an immutable snapshot of both trees and then
//! applied from the last index to the first. A text overwrite discards the
//! element's children, so descendants are always patched before their
//! ancestors.

use tracing::{debug, warn};

use crate::node::{element_at_mut, flatten_elements, Element, Node};

// =============================================================================
// Outcome
// =============================================================================

/// Write counters of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchStats {
    /// Element pairs visited.
    pub compared: usize,
    /// Pairs that were already equal.
    pub unchanged: usize,
    /// Text overwrites performed.
    pub text_writes: usize,
    /// Attribute values that actually changed.
    pub attribute_writes: usize,
}

impl PatchStats {
    /// Total number of writes to the live tree.
    pub fn writes(&self) -> usize {
        self.text_writes + self.attribute_writes
    }
}

/// How a container was brought up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Patched in place.
    Patched(PatchStats),
    /// Shapes diverged; the live tree was replaced wholesale.
    Replaced,
}

impl Reconciliation {
    /// Returns the patch counters, if the container was patched in place.
    pub fn stats(&self) -> Option<PatchStats> {
        match self {
            Reconciliation::Patched(stats) => Some(*stats),
            Reconciliation::Replaced => None,
        }
    }
}

// =============================================================================
// Planning
// =============================================================================

struct Patch {
    index: usize,
    text: Option<String>,
    attributes: Vec<(String, String)>,
}

enum Plan {
    Nothing,
    Diverged { live: usize, candidate: usize },
    Apply { patches: Vec<Patch>, stats: PatchStats },
}

fn congruent(live: &[&Element], candidate: &[&Element]) -> bool {
    live.len() == candidate.len() && live.iter().zip(candidate).all(|(l, c)| l.tag == c.tag)
}

/// Text to write, if the candidate leads with non-blank text that the live
/// element does not already show.
fn planned_text(live: &Element, candidate: &Element) -> Option<String> {
    match candidate.first_child() {
        Some(Node::Text(value)) if !value.trim().is_empty() => {
            let next = candidate.text_content();
            (live.text_content() != next).then_some(next)
        }
        _ => None,
    }
}

fn planned_attributes(live: &Element, candidate: &Element) -> Vec<(String, String)> {
    candidate
        .attributes
        .iter()
        .filter(|(name, value)| live.get_attribute(name) != Some(value.as_str()))
        .cloned()
        .collect()
}

fn plan(live: &[Node], candidate: &[Node]) -> Plan {
    let next = flatten_elements(candidate);
    if next.is_empty() {
        return Plan::Nothing;
    }

    let current = flatten_elements(live);
    if !congruent(&current, &next) {
        return Plan::Diverged {
            live: current.len(),
            candidate: next.len(),
        };
    }

    let mut stats = PatchStats::default();
    let mut patches = Vec::new();

    for (index, (cur, new)) in current.iter().zip(&next).enumerate() {
        stats.compared += 1;

        if new.is_equal_node(cur) {
            stats.unchanged += 1;
            continue;
        }

        // A text target whose content already matches is left alone, so
        // an attribute-only change costs no text write.
        let text = planned_text(cur, new);
        let attributes = planned_attributes(cur, new);
        if text.is_some() || !attributes.is_empty() {
            patches.push(Patch {
                index,
                text,
                attributes,
            });
        }
    }

    Plan::Apply { patches, stats }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Brings `live` up to date with `candidate`.
///
/// ## Example
/// ```rust
/// use forkify_view::node::{el, Node};
/// use forkify_view::reconcile::{reconcile, Reconciliation};
///
/// let mut live: Vec<Node> = vec![el("span").text("4").into()];
/// let next: Vec<Node> = vec![el("span").text("8").into()];
///
/// let outcome = reconcile(&mut live, next);
/// assert_eq!(outcome.stats().unwrap().text_writes, 1);
/// assert_eq!(live[0].text_content(), "8");
/// ```
pub fn reconcile(live: &mut Vec<Node>, candidate: Vec<Node>) -> Reconciliation {
    match plan(live, &candidate) {
        Plan::Nothing => Reconciliation::Patched(PatchStats::default()),

        Plan::Diverged {
            live: live_count,
            candidate: candidate_count,
        } => {
            warn!(
                live = live_count,
                candidate = candidate_count,
                "View shape changed, replacing container contents"
            );
            *live = candidate;
            Reconciliation::Replaced
        }

        Plan::Apply { patches, mut stats } => {
            for patch in patches.into_iter().rev() {
                let Some(target) = element_at_mut(live, patch.index) else {
                    continue;
                };

                for (name, value) in patch.attributes {
                    if target.set_attribute(&name, value) {
                        stats.attribute_writes += 1;
                    }
                }

                if let Some(text) = patch.text {
                    target.set_text_content(text);
                    stats.text_writes += 1;
                }
            }

            debug!(
                compared = stats.compared,
                text_writes = stats.text_writes,
                attribute_writes = stats.attribute_writes,
                "Reconciled view"
            );
            Reconciliation::Patched(stats)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::el;

    fn card(title: &str, count: u32, active: bool) -> Vec<Node> {
        let class = if active { "card card--active" } else { "card" };
        vec![el("div")
            .attr("class", class)
            .child(el("h2").text(title))
            .child(
                el("p")
                    .child(el("span").attr("class", "count").text(count.to_string()))
                    .child(el("button").attr("data-update-to", (count + 1).to_string())),
            )
            .into()]
    }

    #[test]
    fn test_identical_markup_writes_nothing() {
        let mut live = card("Pizza", 4, false);
        let before = live.clone();

        let outcome = reconcile(&mut live, card("Pizza", 4, false));
        let stats = outcome.stats().unwrap();

        assert_eq!(stats.writes(), 0);
        assert_eq!(stats.compared, 5);
        assert_eq!(stats.unchanged, 5);
        assert_eq!(live, before);
    }

    #[test]
    fn test_single_text_leaf_is_one_write() {
        let mut live = card("Pizza", 4, false);
        let mut expected = card("Pasta", 4, false);

        let stats = reconcile(&mut live, expected.clone()).stats().unwrap();

        assert_eq!(stats.text_writes, 1);
        assert_eq!(stats.attribute_writes, 0);
        assert!(live[0].is_equal_node(&expected.remove(0)));
    }

    #[test]
    fn test_attribute_change_copies_only_changed_values() {
        let mut live = card("Pizza", 4, false);
        let stats = reconcile(&mut live, card("Pizza", 4, true)).stats().unwrap();

        assert_eq!(stats.text_writes, 0);
        assert_eq!(stats.attribute_writes, 1);
        assert_eq!(
            live[0].as_element().unwrap().get_attribute("class"),
            Some("card card--active")
        );
    }

    #[test]
    fn test_matching_text_is_not_rewritten() {
        let mut live: Vec<Node> = vec![el("h2").attr("data-id", "1").text("Pizza").into()];
        let candidate: Vec<Node> = vec![el("h2").attr("data-id", "2").text("Pizza").into()];

        let stats = reconcile(&mut live, candidate.clone()).stats().unwrap();

        assert_eq!(stats.text_writes, 0);
        assert_eq!(stats.attribute_writes, 1);
        assert_eq!(live, candidate);
    }

    #[test]
    fn test_nested_changes_reach_descendants() {
        let mut live = card("Pizza", 4, false);
        let candidate = card("Pizza", 8, false);

        let stats = reconcile(&mut live, candidate.clone()).stats().unwrap();

        // span text + button attribute
        assert_eq!(stats.text_writes, 1);
        assert_eq!(stats.attribute_writes, 1);
        assert_eq!(live, candidate);
    }

    #[test]
    fn test_patching_keeps_live_identity_of_untouched_siblings() {
        let mut live = card("Pizza", 4, false);
        // Extra attribute on the live tree is not part of the candidate and survives.
        if let Node::Element(root) = &mut live[0] {
            root.set_attribute("id", "keep");
        }

        reconcile(&mut live, card("Pasta", 4, false));
        assert_eq!(live[0].as_element().unwrap().get_attribute("id"), Some("keep"));
    }

    #[test]
    fn test_divergent_shape_replaces() {
        let mut live = card("Pizza", 4, false);
        let candidate: Vec<Node> = vec![el("ul").child(el("li").text("one")).into()];

        let outcome = reconcile(&mut live, candidate.clone());

        assert_eq!(outcome, Reconciliation::Replaced);
        assert_eq!(live, candidate);
    }

    #[test]
    fn test_empty_candidate_writes_nothing() {
        let mut live = card("Pizza", 4, false);
        let before = live.clone();

        let outcome = reconcile(&mut live, vec![Node::Text("loose".to_string())]);

        assert_eq!(outcome, Reconciliation::Patched(PatchStats::default()));
        assert_eq!(live, before);
    }

    #[test]
    fn test_whitespace_first_child_is_not_a_text_target() {
        let mut live: Vec<Node> = vec![el("div").text("  ").child(el("b").text("a")).into()];
        let candidate: Vec<Node> = vec![el("div").text("  ").child(el("b").text("b")).into()];

        let stats = reconcile(&mut live, candidate.clone()).stats().unwrap();

        assert_eq!(stats.text_writes, 1);
        assert_eq!(live, candidate);
    }
}
