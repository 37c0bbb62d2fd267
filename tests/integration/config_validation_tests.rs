//! Configuration validation integration tests
//!
//! Tests for configuration loading and validation across all config
//! components.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::NamedTempFile;
    use yap_access::AccessError;
    use yap_access::config::models::{AccessConfig, ClaimsConfig, LogFormat, LoggingConfig};
    use yap_access::config::{Config, ENV_LOG_LEVEL, ENV_ROLE_CLAIM, Validate};

    // ==================== ClaimsConfig Validation ====================

    /// Test that the default claim names pass validation
    #[test]
    fn test_default_claims_valid() {
        assert!(ClaimsConfig::default().validate().is_ok());
        assert!(AccessConfig::default().validate().is_ok());
    }

    /// Test that an empty claim name fails validation
    #[test]
    fn test_empty_claim_name() {
        let mut config = ClaimsConfig::default();
        config.account_claim = "  ".to_string();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Account claim"));
    }

    /// Test that identical claim names fail validation
    #[test]
    fn test_identical_claim_names() {
        let mut config = ClaimsConfig::default();
        config.role_claim = config.account_claim.clone();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must differ"));
    }

    // ==================== LoggingConfig Validation ====================

    /// Test log level validation
    #[test]
    fn test_log_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "WARN"] {
            let config = LoggingConfig {
                level: level.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "{}", level);
        }

        let config = LoggingConfig {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("verbose"));
    }

    /// Test log format parsing
    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    // ==================== Config Loading ====================

    /// Test loading a complete file
    #[tokio::test]
    async fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "access:\n  claims:\n    account_claim: sub\n  rbac:\n    audit_decisions: false\nlogging:\n  level: debug\n"
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.access.claims.account_claim, "sub");
        assert_eq!(config.access.claims.role_claim, "role");
        assert!(!config.access.rbac.audit_decisions);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    /// Test that an invalid file is rejected as a configuration error
    #[tokio::test]
    async fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  level: chatty\n").unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, AccessError::Config(_)));
        assert_eq!(err.status_code(), 500);
    }

    /// Test lookup-based loading without touching the process environment
    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(|key| match key {
            k if k == ENV_ROLE_CLAIM => Some("yap_role".to_string()),
            k if k == ENV_LOG_LEVEL => Some("error".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.access.claims.role_claim, "yap_role");
        assert_eq!(config.logging.level, "error");

        let defaults = Config::from_lookup(|_| None).unwrap();
        assert_eq!(defaults, Config::default());
    }
}
