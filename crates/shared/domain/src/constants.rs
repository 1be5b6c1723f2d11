//! Module-wide constants shared by the engine, the kernel and the CLI.

/// Key of the grievance module in the module-configuration store.
pub const MODULE_NAME: &str = "grievance_social_protection";

/// Separator between ancestor names in a full category path (`complaint|service_complaint`).
pub const PATH_SEPARATOR: char = '|';

/// Resolution time applied when neither the category, the legacy map, nor the
/// global setting provides one. Format: `{days},{hours}`.
pub const DEFAULT_RESOLUTION: &str = "5,0";

/// Exclusive upper bound for the days component of a resolution time.
pub const MAX_RESOLUTION_DAYS: u8 = 99;

/// Exclusive upper bound for the hours component of a resolution time.
pub const MAX_RESOLUTION_HOURS: u8 = 24;

// Payload keys.
pub const RESOLUTION_TIMES: &str = "resolution_times";
pub const DEFAULT_RESOLUTION_MAP: &str = "default_resolution";
pub const GRIEVANCE_TYPES: &str = "grievance_types";
pub const GRIEVANCE_FLAGS: &str = "grievance_flags";
