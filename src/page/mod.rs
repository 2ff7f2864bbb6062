// SPDX-License-Identifier: MPL-2.0
//! Static page model for the showcase: section identities, page copy, and
//! the fixed design geometry that both layout and reveal evaluation share.

pub mod content;
pub mod layout;

/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Features,
    HowItWorks,
    Pricing,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::HowItWorks,
        SectionId::Pricing,
        SectionId::Contact,
    ];
}

/// Identity of an element observed for scroll reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetId {
    Feature(usize),
    Step(usize),
    Pricing(usize),
}

impl TargetId {
    /// Stagger rank within the element's own group. Feature cards animate
    /// with an index-proportional delay; the other groups enter together.
    #[must_use]
    pub fn stagger_index(self) -> usize {
        match self {
            TargetId::Feature(index) => index,
            TargetId::Step(_) | TargetId::Pricing(_) => 0,
        }
    }
}
