// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Homees

// Remote store configuration
pub const HOMEES_PROJECT_URL: &str = "HOMEES_PROJECT_URL";
pub const HOMEES_ANON_KEY: &str = "HOMEES_ANON_KEY";
pub const HOMEES_ACCESS_TOKEN: &str = "HOMEES_ACCESS_TOKEN";
pub const HOMEES_HTTP_TIMEOUT_SECS: &str = "HOMEES_HTTP_TIMEOUT_SECS";

// Chatbot configuration
pub const HOMEES_CHATBOT_URL: &str = "HOMEES_CHATBOT_URL";

// CLI session (identity is established elsewhere; the CLI just needs to know
// who it is acting as)
pub const HOMEES_UTILISATEUR_ID: &str = "HOMEES_UTILISATEUR_ID";
pub const HOMEES_ROLE: &str = "HOMEES_ROLE";

// Realtime bridge
pub const HOMEES_REALTIME_BUFFER: &str = "HOMEES_REALTIME_BUFFER";
