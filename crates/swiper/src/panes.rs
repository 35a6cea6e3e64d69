#![forbid(unsafe_code)]

//! Pane counting and validation.
//!
//! Hosts hand the swiper an ordered child collection; only elements the
//! host marks as panes are counted. Anything else is excluded with a
//! usage warning rather than an error, and an empty result leaves the
//! widget inert. Misconfiguration never fails.

/// The seam between a host's element tree and the engine.
///
/// Implemented by whatever child type the host composes its scene from;
/// the engine only needs to know which children are panes.
pub trait PaneElement {
    /// Whether this child is a recognized swiper pane.
    fn is_pane(&self) -> bool;

    /// A short name for warnings about excluded children.
    fn kind(&self) -> &str {
        "element"
    }
}

/// Count the recognized panes in `children`.
///
/// Non-pane children are excluded with a warning; an empty pane set also
/// warns, since a swiper without panes renders nothing.
pub fn valid_pane_count<E: PaneElement>(children: &[E]) -> usize {
    let mut count = 0;
    for child in children {
        if child.is_pane() {
            count += 1;
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                kind = child.kind(),
                "swiper children must be panes; element excluded"
            );
        }
    }
    if count == 0 {
        #[cfg(feature = "tracing")]
        tracing::warn!("swiper needs at least one pane");
    }
    count
}
