//! Host resolution from multiple sources

use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{credentials, host as host_config};
use crate::error::{Result, TfeError};

/// Credentials file structure (only the host keys matter here)
#[derive(Deserialize, Debug)]
struct TfeCredentials {
    credentials: HashMap<String, serde_json::Value>,
}

/// Host resolution with fallback logic
pub struct HostResolver;

impl HostResolver {
    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (TFE_HOSTNAME, TFE_ADDRESS - in order)
    /// 3. Credentials file:
    ///    - If 1 host: use it
    ///    - If multiple hosts: interactive selection (or error in batch mode)
    ///    - If no hosts: error
    pub fn resolve(cli_host: Option<&str>, batch_mode: bool) -> Result<String> {
        if let Some(host) = cli_host.map(normalize_host).filter(|h| !h.is_empty()) {
            debug!("Using host from CLI argument: {}", host);
            return Ok(host);
        }

        for env_var in host_config::ENV_VARS {
            if let Ok(value) = std::env::var(env_var) {
                let host = normalize_host(&value);
                if !host.is_empty() {
                    debug!("Using host from {} environment variable: {}", env_var, host);
                    return Ok(host);
                }
            }
        }

        debug!(
            "No host in CLI or {:?}, trying credentials file",
            host_config::ENV_VARS
        );
        Self::resolve_from_credentials_file(batch_mode)
    }

    fn resolve_from_credentials_file(batch_mode: bool) -> Result<String> {
        let credentials_path = Self::get_credentials_path()
            .ok_or_else(|| TfeError::HostNotFound(Self::host_not_found_message(None, None)))?;

        let hosts = match Self::hosts_in_file(&credentials_path)? {
            Some(hosts) => hosts,
            None => {
                return Err(TfeError::HostNotFound(Self::host_not_found_message(
                    Some(&credentials_path),
                    None,
                )))
            }
        };

        match hosts.as_slice() {
            [] => Err(TfeError::HostNotFound(Self::host_not_found_message(
                Some(&credentials_path),
                None,
            ))),
            [host] => {
                debug!(
                    "Using single host from credentials file {}: {}",
                    credentials_path.display(),
                    host
                );
                Ok(host.clone())
            }
            _ if batch_mode => Err(TfeError::HostNotFound(Self::host_not_found_message(
                Some(&credentials_path),
                Some(&hosts),
            ))),
            _ => Self::interactive_host_selection(&hosts, &credentials_path),
        }
    }

    /// Sorted host names from a credentials file; `None` if the file is missing
    fn hosts_in_file(path: &Path) -> Result<Option<Vec<String>>> {
        debug!("Looking for credentials file at: {}", path.display());

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Ok(None),
        };

        let creds: TfeCredentials = serde_json::from_str(&content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut hosts: Vec<String> = creds.credentials.into_keys().collect();
        hosts.sort();
        Ok(Some(hosts))
    }

    fn interactive_host_selection(hosts: &[String], credentials_path: &Path) -> Result<String> {
        eprintln!("\nMultiple hosts found in {}:", credentials_path.display());

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a host")
            .items(hosts)
            .default(0)
            .interact()
            .map_err(|e| TfeError::HostNotFound(format!("Failed to select host: {}", e)))?;

        let host = hosts[selection].clone();
        debug!("User selected host: {}", host);
        Ok(host)
    }

    fn host_not_found_message(
        credentials_path: Option<&Path>,
        available_hosts: Option<&[String]>,
    ) -> String {
        let creds_info = match (credentials_path, available_hosts) {
            (Some(p), Some(hosts)) => format!(
                "\n   Credentials file: {} ({} hosts found)\n   Available hosts: {}",
                p.display(),
                hosts.len(),
                hosts.join(", ")
            ),
            (Some(p), None) => {
                format!("\n   Credentials file: {} (no hosts found)", p.display())
            }
            (None, _) => "\n   Credentials file: not found".to_string(),
        };

        format!(
            "No HCP Terraform host specified. Please provide a host using one of:\n\
             \n\
             1. CLI argument:      tfectl --host <HOST>\n\
             2. Environment var:   export {}=<HOST>  (also: {})\n\
             3. Terraform login:   terraform login <HOST>\n\
             \n\
             Checked:{}\n",
            host_config::ENV_VARS[0],
            host_config::ENV_VARS[1..].join(", "),
            creds_info
        )
    }

    /// Path to the Terraform credentials file (platform-specific)
    fn get_credentials_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join(credentials::FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(credentials::FILE_PATH_UNIX))
        }
    }
}

/// Strip a URL scheme and trailing slashes, leaving a bare host name
fn normalize_host(value: &str) -> String {
    let value = value.trim();
    let value = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value);
    value.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_cli_host_takes_precedence() {
        let result = HostResolver::resolve(Some("tfe.example.com"), false);
        assert_eq!(result.unwrap(), "tfe.example.com");
    }

    #[test]
    fn test_cli_host_scheme_is_stripped() {
        let result = HostResolver::resolve(Some("https://tfe.example.com/"), true);
        assert_eq!(result.unwrap(), "tfe.example.com");
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("app.terraform.io"), "app.terraform.io");
        assert_eq!(normalize_host("http://localhost:8080"), "localhost:8080");
        assert_eq!(normalize_host(" https://tfe.local// "), "tfe.local");
    }

    #[test]
    fn test_hosts_in_file_sorted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"credentials": {{"b.example.com": {{"token": "x"}}, "a.example.com": {{"token": "y"}}}}}}"#
        )
        .unwrap();

        let hosts = HostResolver::hosts_in_file(file.path()).unwrap().unwrap();
        assert_eq!(hosts, vec!["a.example.com", "b.example.com"]);
    }

    #[test]
    fn test_hosts_in_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("credentials.tfrc.json");
        assert!(HostResolver::hosts_in_file(&missing).unwrap().is_none());
    }

    #[test]
    fn test_hosts_in_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = HostResolver::hosts_in_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }

    #[test]
    fn test_host_not_found_message_format() {
        let msg = HostResolver::host_not_found_message(None, None);
        assert!(msg.contains("tfectl --host"));
        assert!(msg.contains("TFE_HOSTNAME"));
        assert!(msg.contains("TFE_ADDRESS"));
        assert!(msg.contains("terraform login"));
    }

    #[test]
    fn test_host_not_found_message_with_available_hosts() {
        let hosts = vec![
            "host1.example.com".to_string(),
            "host2.example.com".to_string(),
        ];
        let path = Path::new("/test/path");
        let msg = HostResolver::host_not_found_message(Some(path), Some(&hosts));
        assert!(msg.contains("host1.example.com"));
        assert!(msg.contains("host2.example.com"));
        assert!(msg.contains("2 hosts found"));
    }
}
