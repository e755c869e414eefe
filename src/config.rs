/// Application configuration and canned page content.

pub struct Config {
    /// Main loop tick rate in milliseconds (target 60 FPS = ~16ms)
    pub tick_rate_ms: u64,

    /// How many ticks to show status messages (180 = ~3s at 60fps)
    pub status_timeout_ticks: u64,

    /// Modulo for animation frame counter
    pub animation_frame_mod: usize,

    /// Delay before input takes focus after the widget opens
    pub focus_delay_ms: u64,

    /// Delay before a category prompt lands in the input
    pub prefill_delay_ms: u64,

    /// Lower bound of the simulated reply delay
    pub reply_delay_min_ms: u64,

    /// Random jitter added on top of the lower bound
    pub reply_delay_jitter_ms: u64,

    /// Page rows scrolled before the header gets its shadow
    pub header_shadow_threshold: usize,

    /// Duration of the press ripple in ticks (~600ms at 60fps)
    pub ripple_ticks: u8,

    /// Duration of the card press-scale feedback in ticks (~150ms)
    pub card_press_ticks: u8,

    /// Duration of the reveal animation when a card scrolls into view
    pub reveal_ticks: u8,

    /// Page rows to scroll per key press / wheel notch
    pub scroll_step: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 16,
            status_timeout_ticks: 180,
            animation_frame_mod: 360,
            focus_delay_ms: 300,
            prefill_delay_ms: 500,
            reply_delay_min_ms: 1500,
            reply_delay_jitter_ms: 1000,
            header_shadow_threshold: 6,
            ripple_ticks: 38,
            card_press_ticks: 9,
            reveal_ticks: 36,
            scroll_step: 2,
        }
    }
}

/// Canned reply appended after every simulated typing delay.
pub const SUPPORT_RESPONSE: &str = "Thank you for contacting Total AV Support! For immediate assistance with your inquiry, please call our support team at +1(888) 289-1749. Our experts are available 24/7 to help you with any questions or technical issues.";

/// Appended instead of a simulated reply when something goes wrong.
pub const FALLBACK_RESPONSE: &str = "Sorry, there was an error. Please call our support line directly at +1 (888) 289-1749 for immediate assistance.";

pub const SUPPORT_PHONE: &str = "+1(888) 289-1749";

/// Prompt used when a category has no entry of its own.
pub const DEFAULT_CATEGORY_PROMPT: &str = "I need help with my Total AV software.";

pub struct Category {
    pub key: char,
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub prompt: &'static str,
}

/// Support category cards shown on the page, in display order.
pub const CATEGORIES: &[Category] = &[
    Category {
        key: '1',
        id: "installation",
        title: "Installation & Setup",
        blurb: "Get Total AV running on any device",
        prompt: "I need help with installation and setup.",
    },
    Category {
        key: '2',
        id: "billing",
        title: "Billing & Payments",
        blurb: "Invoices, renewals and payment methods",
        prompt: "I have a question about billing and payments.",
    },
    Category {
        key: '3',
        id: "account",
        title: "Account Management",
        blurb: "Sign-in, profile and license keys",
        prompt: "I need help with account management.",
    },
    Category {
        key: '4',
        id: "protection",
        title: "Virus Protection",
        blurb: "Scans, quarantine and threat alerts",
        prompt: "I have an issue with virus protection.",
    },
    Category {
        key: '5',
        id: "technical",
        title: "Technical Support",
        blurb: "Performance, errors and conflicts",
        prompt: "I need technical support.",
    },
    Category {
        key: '6',
        id: "refunds",
        title: "Refunds & Cancellation",
        blurb: "Money-back and subscription changes",
        prompt: "I want to request a refund or cancel my subscription.",
    },
];

/// Contact channel cards under the category grid.
pub const CHANNELS: &[(&str, &str)] = &[
    ("Live Chat", "Average wait under a minute"),
    ("Phone Support", "Call +1(888) 289-1749, available 24/7"),
];

/// Trust items near the page footer.
pub const TRUST_ITEMS: &[&str] = &[
    "30-day money-back guarantee",
    "Trusted by 25 million users",
    "Award-winning protection",
];
