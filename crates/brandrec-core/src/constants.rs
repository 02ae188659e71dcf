/// brandrec version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of values in a feature vector.
pub const FEATURE_COUNT: usize = 6;

/// Number of brands returned by a recommendation unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 5;

/// Accepted star rating range, inclusive.
pub const MIN_STARS: f64 = 0.0;
pub const MAX_STARS: f64 = 5.0;

/// Brand labels in classifier output order.
///
/// Position `i` names the class whose probability is at index `i` of the
/// classifier's output vector.
pub const BRAND_LABELS: [&str; 16] = [
    "Adsun", "Croma", "SAMSUNG", "LG", "SONY", "MOTOROLA", "Nokia", "TCL", "Vu", "KODAK", "Haier",
    "PHILIPS", "Thomson", "iFFALCON", "Hyundai", "Lloyd",
];

/// Feature vector slot names, in position order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "stars",
    "price",
    "operating_system",
    "speaker",
    "refresh_rate",
    "picture_quality",
];

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "BRANDREC_CONFIG";

/// Environment variable overriding the log filter.
pub const LOG_ENV_VAR: &str = "BRANDREC_LOG";
