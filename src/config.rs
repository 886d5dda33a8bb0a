// Site-wide tuning knobs. Each slideshow instance picks its own cadence.

/// Landing splash background rotation.
pub const HERO_ROTATE_MS: u32 = 2_000;

/// Homepage feature carousel rotation.
pub const FEATURE_ROTATE_MS: u32 = 5_000;

/// Lawyer cards shown per directory page.
pub const LAWYERS_PER_PAGE: usize = 3;

/// Simulated latency of the contact form submission.
pub const SUBMIT_LATENCY_MS: u32 = 2_000;

/// How long the contact success notice stays up before dismissing itself.
pub const SUCCESS_NOTICE_MS: u32 = 5_000;
