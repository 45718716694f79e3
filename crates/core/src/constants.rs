/// Constants used throughout the shopkeys codebase
// Secret names
pub const SLPY_API_KEY: &str = "SLPY_API_KEY";

// Launch-time bundle metadata key
pub const GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

// Fallback definitions file, relative to the resolving component
pub const DEFAULT_ENV_FILE: &str = "../../.env";

// Separator between a name and its value in the fallback file
pub const ASSIGNMENT_SEPARATOR: char = '=';

// Environment variables read by shopkeys itself
pub const SHOPKEYS_LOG_VAR: &str = "SHOPKEYS_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
