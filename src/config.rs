use crate::contact::SubmitTarget;

// Counter animation
pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_STEPS: u32 = 60;
pub const COUNTER_TARGETS: [u64; 4] = [50_000, 105, 846, 21_095];

/// Fraction of the stats section that must be on screen before counting starts.
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.3;
/// Reveals fire on the first visible pixel, so tall blocks on short viewports still appear.
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.0;

// Parallax range in pixels for scroll fraction 0.0 -> 1.0
pub const PARALLAX_START_PX: f64 = 0.0;
pub const PARALLAX_END_PX: f64 = -100.0;

// Notifications and the contact form
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5000;
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2000;
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Thank you for your message! Shivam will get back to you within 24 hours.";

// Outbound links
pub const SCHEDULING_URL: &str = "https://cal.com/royshivam/30min";
pub const WHATSAPP_URL: &str = "https://wa.me/+916207375459";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/shivam-roy-/";
pub const EMAIL_ADDRESS: &str = "royshivamvip101@gmail.com";
pub const MAILTO_URL: &str = "mailto:royshivamvip101@gmail.com";

/// Interval between two counter ticks. Browsers floor fractional delays.
pub fn counter_tick_ms() -> u32 {
    COUNTER_DURATION_MS / COUNTER_STEPS
}

/// Where contact form submissions go.
///
/// Builds that set `PORTFOLIO_CONTACT_ENDPOINT` post the form as JSON to that
/// URL; everything else waits out the simulated delay and reports success.
pub fn submit_target() -> SubmitTarget {
    match option_env!("PORTFOLIO_CONTACT_ENDPOINT") {
        Some(url) if !url.trim().is_empty() => SubmitTarget::Endpoint(url.trim().to_string()),
        _ => SubmitTarget::Simulated {
            delay_ms: SIMULATED_SUBMIT_DELAY_MS,
        },
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
