use std::env;

use secrecy::SecretString;

pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub model_name: String,
    pub secrets_file: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            model_name: env::var("QUIZ_MODEL_NAME")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            secrets_file: env::var("SECRETS_FILE")
                .unwrap_or_else(|_| "secrets.env".to_string()),
        }
    }

    /// Resolve the OpenAI API credential once at startup.
    ///
    /// Priority: secrets file, then environment variable. A key entered
    /// interactively later is held only in memory by the app state and never
    /// written back through this chain.
    pub fn resolve_api_key(&self) -> Option<SecretString> {
        secret_from_file(&self.secrets_file, OPENAI_API_KEY_VAR)
            .or_else(|| non_empty(env::var(OPENAI_API_KEY_VAR).ok()))
            .map(SecretString::from)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            model_name: "gpt-4o-mini".to_string(),
            secrets_file: "does-not-exist.env".to_string(),
        }
    }
}

/// Read a single key from a dotenv-format secrets file without touching the
/// process environment. A missing file is the common local case and yields
/// `None` rather than an error.
fn secret_from_file(path: &str, key: &str) -> Option<String> {
    let iter = dotenvy::from_filename_iter(path).ok()?;
    for item in iter {
        if let Ok((name, value)) = item {
            if name == key {
                return non_empty(Some(value));
            }
        }
    }
    None
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.web_server_host.is_empty());
        assert!(!config.model_name.is_empty());
        assert!(config.web_server_port > 0);
    }

    #[test]
    fn test_secret_from_missing_file_is_none() {
        assert_eq!(secret_from_file("no-such-secrets.env", OPENAI_API_KEY_VAR), None);
    }

    #[test]
    fn test_non_empty_filters_blank_values() {
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(Some("sk-test".to_string())), Some("sk-test".to_string()));
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_secret_from_file_reads_key() {
        use std::io::Write;

        let dir = std::env::temp_dir();
        let path = dir.join("dokhae-secrets-test.env");
        let mut file = std::fs::File::create(&path).expect("temp secrets file");
        writeln!(file, "OPENAI_API_KEY=sk-from-file").unwrap();
        writeln!(file, "OTHER=ignored").unwrap();

        let value = secret_from_file(path.to_str().unwrap(), OPENAI_API_KEY_VAR);
        assert_eq!(value, Some("sk-from-file".to_string()));

        let _ = std::fs::remove_file(&path);
    }
}
