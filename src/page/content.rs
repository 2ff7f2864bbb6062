// SPDX-License-Identifier: MPL-2.0
//! Copy text for every section of the page. Kept as plain constants so the
//! views stay free of literals and the copy can be reviewed in one place.

use super::SectionId;

pub const BRAND: &str = "AgentCore";
pub const WINDOW_TITLE: &str = "AgentCore — Build agents that ship";

pub const HERO_TITLE: &str = "Build AI agents that actually ship";
pub const HERO_SUBTITLE: &str =
    "AgentCore turns prompts, tools, and policies into production-grade agents \
     with tracing, guardrails, and one-click deploys.";
pub const HERO_PRIMARY_CTA: &str = "Get Started";
pub const HERO_SECONDARY_CTA: &str = "Learn More";

/// Header navigation, in display order.
pub const NAV_LINKS: [(&str, SectionId); 4] = [
    ("Features", SectionId::Features),
    ("How It Works", SectionId::HowItWorks),
    ("Pricing", SectionId::Pricing),
    ("Contact", SectionId::Contact),
];

pub struct Feature {
    pub glyph: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const FEATURES_TITLE: &str = "Everything an agent team needs";
pub const FEATURES_SUBTITLE: &str = "Six building blocks, zero glue code.";

pub const FEATURES: [Feature; 6] = [
    Feature {
        glyph: "⚡",
        title: "Composable skills",
        blurb: "Chain tools, APIs, and prompts into reusable skills that every agent can share.",
    },
    Feature {
        glyph: "🧠",
        title: "Stateful memory",
        blurb: "Long-lived context with automatic summarization and recall across sessions.",
    },
    Feature {
        glyph: "🛡",
        title: "Guardrails built in",
        blurb: "Policy checks run before every action an agent takes, not after.",
    },
    Feature {
        glyph: "🚀",
        title: "One-click deploys",
        blurb: "Ship agents to production as versioned, reviewable releases.",
    },
    Feature {
        glyph: "📈",
        title: "Full observability",
        blurb: "Trace every step, token, and tool call in real time.",
    },
    Feature {
        glyph: "🤝",
        title: "Team workspaces",
        blurb: "Share agents, skills, and evals across your whole organization.",
    },
];

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const HOW_TITLE: &str = "How it works";
pub const HOW_SUBTITLE: &str = "From idea to running agent in three steps.";

pub const STEPS: [Step; 3] = [
    Step {
        number: "1",
        title: "Describe the job",
        blurb: "Write down what the agent should do and which outcomes count as success.",
    },
    Step {
        number: "2",
        title: "Wire up tools",
        blurb: "Connect APIs, data sources, and skills from the shared catalog.",
    },
    Step {
        number: "3",
        title: "Ship and iterate",
        blurb: "Deploy, watch the traces, and refine the agent with real usage.",
    },
];

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub highlights: [&'static str; 4],
    pub featured: bool,
}

pub const PRICING_TITLE: &str = "Simple pricing";
pub const PRICING_SUBTITLE: &str = "Start free, scale when your agents do.";

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "$0",
        period: "forever",
        highlights: [
            "2 agents",
            "1,000 runs / month",
            "Community skills",
            "Basic traces",
        ],
        featured: false,
    },
    Plan {
        name: "Pro",
        price: "$49",
        period: "per month",
        highlights: [
            "Unlimited agents",
            "50,000 runs / month",
            "Private skill catalog",
            "Full tracing & evals",
        ],
        featured: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "annual",
        highlights: [
            "Dedicated cluster",
            "SSO & audit logs",
            "Custom guardrails",
            "Priority support",
        ],
        featured: false,
    },
];

pub const CONTACT_TITLE: &str = "Stay in the loop";
pub const CONTACT_SUBTITLE: &str = "Leave your email and we'll send you the launch notes.";
pub const CONTACT_PLACEHOLDER: &str = "you@company.com";
pub const CONTACT_SUBMIT: &str = "Notify Me";
pub const CONTACT_SUBMITTING: &str = "Submitting...";

pub const TOAST_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const TOAST_SUBMITTED: &str = "Thanks! We'll be in touch soon.";

pub const FOOTER_NOTE: &str = "© AgentCore. All rights reserved.";
