use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub storage: StorageConfig,
    pub session_ttl_hours: i64,
    pub enforce_note_categories: bool,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub public_prefix: String,
    pub soffice_bin: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    /// Optional variable that must parse when set.
    fn get_env_parsed<T: FromStr>(key: &str, default: &str) -> T {
        parse_value(key, &Self::get_env_or(key, default))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("DATABASE_URL");

        EnvConfig {
            port: Self::get_env_parsed("PORT", "8080"),
            db_url,
            storage: StorageConfig {
                upload_dir: PathBuf::from(Self::get_env_or("UPLOAD_DIR", "public/uploads")),
                public_prefix: Self::get_env_or("UPLOAD_PUBLIC_PREFIX", "/uploads"),
                soffice_bin: Self::get_env_or("SOFFICE_BIN", "soffice"),
            },
            session_ttl_hours: Self::get_env_parsed("SESSION_TTL_HOURS", "168"),
            enforce_note_categories: parse_flag(&Self::get_env_or("ENFORCE_NOTE_CATEGORIES", "false")),
        }
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> T {
    raw.trim()
        .parse()
        .unwrap_or_else(|_| panic!("Environment variable {} has invalid value {:?}", key, raw))
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}

#[cfg(test)]
mod tests {
    use super::{parse_flag, parse_value};

    #[test]
    fn flags_accept_common_truthy_spellings() {
        for raw in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(parse_flag(raw), "{raw:?} should be truthy");
        }
        for raw in ["", "0", "false", "off", "nope"] {
            assert!(!parse_flag(raw), "{raw:?} should be falsy");
        }
    }

    #[test]
    fn numeric_settings_parse_when_well_formed() {
        assert_eq!(parse_value::<u16>("PORT", " 9090 "), 9090);
        assert_eq!(parse_value::<i64>("SESSION_TTL_HOURS", "24"), 24);
    }

    #[test]
    #[should_panic(expected = "Environment variable PORT has invalid value")]
    fn malformed_port_refuses_to_start() {
        parse_value::<u16>("PORT", "80800");
    }

    #[test]
    #[should_panic(expected = "Environment variable SESSION_TTL_HOURS has invalid value")]
    fn malformed_session_ttl_refuses_to_start() {
        parse_value::<i64>("SESSION_TTL_HOURS", "a week");
    }
}
