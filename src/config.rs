//! 配置系统
//! 从环境变量加载所有配置，使用 Secret 包装敏感信息

use config::{Config, ConfigError, Environment};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别: trace, debug, info, warn, error
    pub level: String,
    /// 日志格式: json, pretty
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// JWT 密钥（使用 Secret 包装，防止日志泄露）
    pub jwt_secret: Secret<String>,
    /// 令牌过期时间（秒），默认 24 小时
    pub token_exp_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
}

impl AppConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Config::builder();

        // 添加默认配置
        settings = settings
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?
            .set_default("security.jwt_secret", "change-this-secret-in-production-min-32-chars!")?
            .set_default("security.token_exp_secs", 86400)?;

        // 从环境变量加载配置（前缀为 MCS_）
        settings = settings.add_source(
            Environment::with_prefix("MCS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = settings.build()?.try_deserialize()?;

        // 验证配置
        config.validate()?;

        Ok(config)
    }

    /// 验证配置合法性
    fn validate(&self) -> Result<(), ConfigError> {
        // 验证日志级别
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )))
            }
        }

        // 验证日志格式
        match self.logging.format.to_lowercase().as_str() {
            "json" | "pretty" => {}
            _ => {
                return Err(ConfigError::Message(format!(
                    "Invalid log format: {}. Must be one of: json, pretty",
                    self.logging.format
                )))
            }
        }

        // 验证 JWT 密钥长度（至少 32 字符）
        if self.security.jwt_secret.expose_secret().len() < 32 {
            return Err(ConfigError::Message(
                "JWT secret must be at least 32 characters long".to_string(),
            ));
        }

        // 验证令牌过期时间
        if self.security.token_exp_secs < 60 || self.security.token_exp_secs > 86400 {
            return Err(ConfigError::Message(
                "token_exp_secs must be between 60 and 86400 (1 minute to 24 hours)".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_defaults() {
        // 清理所有可能的环境变量
        std::env::remove_var("MCS_LOGGING__LEVEL");
        std::env::remove_var("MCS_LOGGING__FORMAT");
        std::env::remove_var("MCS_SECURITY__JWT_SECRET");
        std::env::remove_var("MCS_SECURITY__TOKEN_EXP_SECS");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.security.token_exp_secs, 86400);
    }

    #[test]
    #[serial]
    fn test_config_validation_short_secret() {
        std::env::remove_var("MCS_SECURITY__TOKEN_EXP_SECS");
        std::env::set_var("MCS_SECURITY__JWT_SECRET", "too-short");

        let result = AppConfig::from_env();
        assert!(result.is_err());

        std::env::remove_var("MCS_SECURITY__JWT_SECRET");
    }

    #[test]
    #[serial]
    fn test_config_validation_invalid_log_level() {
        std::env::remove_var("MCS_SECURITY__JWT_SECRET");
        std::env::set_var("MCS_LOGGING__LEVEL", "invalid");

        let result = AppConfig::from_env();
        assert!(result.is_err());

        std::env::remove_var("MCS_LOGGING__LEVEL");
    }

    #[test]
    #[serial]
    fn test_config_validation_token_exp_out_of_range() {
        std::env::remove_var("MCS_SECURITY__JWT_SECRET");
        std::env::set_var("MCS_SECURITY__TOKEN_EXP_SECS", "30");

        let result = AppConfig::from_env();
        assert!(result.is_err());

        std::env::remove_var("MCS_SECURITY__TOKEN_EXP_SECS");
    }
}
