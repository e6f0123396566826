use crate::config::{
    COUNTER_TARGETS, EMAIL_ADDRESS, LINKEDIN_URL, MAILTO_URL, WHATSAPP_URL,
};

pub struct StatItem {
    pub icon: &'static str,
    pub target: u64,
    pub label: &'static str,
    pub growth: &'static str,
    pub suffix: &'static str,
    pub gradient: (&'static str, &'static str),
}

pub const STATS: [StatItem; 4] = [
    StatItem {
        icon: "👁",
        target: COUNTER_TARGETS[0],
        label: "LinkedIn Impressions",
        growth: "+578% in 30 days",
        suffix: "+",
        gradient: ("#3b82f6", "#06b6d4"),
    },
    StatItem {
        icon: "👥",
        target: COUNTER_TARGETS[1],
        label: "Followers in One Day",
        growth: "+144% daily growth",
        suffix: "",
        gradient: ("#a855f7", "#ec4899"),
    },
    StatItem {
        icon: "📈",
        target: COUNTER_TARGETS[2],
        label: "Total Followers",
        growth: "+197% growth rate",
        suffix: "",
        gradient: ("#22c55e", "#10b981"),
    },
    StatItem {
        icon: "🎯",
        target: COUNTER_TARGETS[3],
        label: "Members Reached",
        growth: "+759% reach expansion",
        suffix: "+",
        gradient: ("#f97316", "#ef4444"),
    },
];

pub struct ServiceItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: (&'static str, &'static str),
    pub features: [&'static str; 4],
}

pub const SERVICES: [ServiceItem; 3] = [
    ServiceItem {
        icon: "👑",
        title: "Personal Branding",
        description: "Transform your expertise into digital authority that commands respect and positions you as the go-to expert in your field.",
        gradient: ("#3b82f6", "#9333ea"),
        features: [
            "LinkedIn Profile Optimization",
            "Brand Voice Development",
            "Content Strategy",
            "Visual Identity",
        ],
    },
    ServiceItem {
        icon: "💡",
        title: "Thought Leadership",
        description: "Share influential insights that attract clients and recognition. Establish yourself as a thought leader through strategic content.",
        gradient: ("#a855f7", "#db2777"),
        features: [
            "Content Creation",
            "Industry Insights",
            "Speaking Opportunities",
            "Media Relations",
        ],
    },
    ServiceItem {
        icon: "🛡",
        title: "Brand & Reputation Building",
        description: "Create a distinct, credible digital presence for your firm. Build trust and credibility that converts prospects into premium clients.",
        gradient: ("#ec4899", "#dc2626"),
        features: [
            "Reputation Management",
            "Crisis Communication",
            "Trust Building",
            "Client Testimonials",
        ],
    },
];

pub struct ProcessStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 5] = [
    ProcessStep {
        number: 1,
        title: "Discovery Call",
        description: "A comprehensive 30-minute discovery call to understand your goals, challenges, and unique value proposition.",
    },
    ProcessStep {
        number: 2,
        title: "LinkedIn Audit",
        description: "Deep-dive analysis of your current LinkedIn presence to identify opportunities and competitive advantages.",
    },
    ProcessStep {
        number: 3,
        title: "Strategy Development",
        description: "Custom strategy development tailored to your industry, audience, and specific business objectives.",
    },
    ProcessStep {
        number: 4,
        title: "Implementation",
        description: "Full implementation with ongoing optimization and regular performance reviews to ensure maximum impact.",
    },
    ProcessStep {
        number: 5,
        title: "Reporting & Refinement",
        description: "Monthly reporting with detailed analytics and continuous strategy refinement for sustained growth.",
    },
];

pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub gradient: (&'static str, &'static str),
}

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        icon: "✉",
        label: "Email",
        value: EMAIL_ADDRESS,
        href: MAILTO_URL,
        gradient: ("#3b82f6", "#2563eb"),
    },
    ContactChannel {
        icon: "💬",
        label: "WhatsApp",
        value: "+91 6207375459",
        href: WHATSAPP_URL,
        gradient: ("#22c55e", "#16a34a"),
    },
    ContactChannel {
        icon: "👥",
        label: "LinkedIn",
        value: "Connect with me",
        href: LINKEDIN_URL,
        gradient: ("#2563eb", "#1d4ed8"),
    },
    ContactChannel {
        icon: "📍",
        label: "Location",
        value: "Pune, Maharashtra, India",
        href: "#",
        gradient: ("#a855f7", "#9333ea"),
    },
];

pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        icon: "in",
        label: "LinkedIn",
        href: LINKEDIN_URL,
    },
    SocialLink {
        icon: "✉",
        label: "Email",
        href: MAILTO_URL,
    },
    SocialLink {
        icon: "💬",
        label: "WhatsApp",
        href: WHATSAPP_URL,
    },
    SocialLink {
        icon: "🌐",
        label: "Website",
        href: "#",
    },
];

/// `target` and `rel` attributes for an outbound link. Web links open in a
/// new tab; `mailto:` and in-page links stay in the current one.
pub fn link_target(href: &str) -> (&'static str, &'static str) {
    if href.starts_with("http") {
        ("_blank", "noopener noreferrer")
    } else {
        ("_self", "")
    }
}
