/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Projects endpoint
    pub const PROJECTS: &str = "projects";

    /// Teams endpoint
    pub const TEAMS: &str = "teams";

    /// Agent pools endpoint
    pub const AGENT_POOLS: &str = "agent-pools";

    /// Agent tokens endpoint (nested under agent pools for listing)
    pub const AUTHENTICATION_TOKENS: &str = "authentication-tokens";

    /// Policy sets endpoint
    pub const POLICY_SETS: &str = "policy-sets";

    /// Policies endpoint
    pub const POLICIES: &str = "policies";

    /// Variable sets endpoint
    pub const VARSETS: &str = "varsets";

    /// Workspace variables endpoint (nested under workspaces)
    pub const VARS: &str = "vars";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file on Unix (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["TFE_TOKEN", "TFC_TOKEN", "HCP_TOKEN"];
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variable names for host (checked in order)
    pub const ENV_VARS: &[&str] = &["TFE_HOSTNAME", "TFE_ADDRESS"];
}

/// Configuration constants for organization resolution
pub mod org {
    /// Environment variable for the default organization
    pub const ENV_VAR: &str = "TFE_ORGANIZATION";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Environment variable for the log level
    pub const LOG_LEVEL_ENV_VAR: &str = "TFECTL_LOG_LEVEL";
}

/// Display constants
pub mod display {
    /// Marker printed in place of a sensitive variable value
    pub const REDACTION_MARKER: &str = "[SENSITIVE - hidden]";
}

/// Process exit codes, one per error kind
///
/// 2 is left to clap for usage errors.
pub mod exit_codes {
    pub const TRANSPORT: i32 = 1;
    pub const INPUT_CONTRACT: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const EMPTY_SET: i32 = 5;
    pub const AMBIGUOUS: i32 = 6;
    pub const CONFIG: i32 = 7;
}
