use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the bot API lives. `Local` matches the default deployment of the
/// backend; `Custom` carries a base URL supplied by flag or environment.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development backend.
    #[default]
    Local,
    /// Any other deployment, addressed by base URL.
    Custom { api_base_url: String },
}

impl Environment {
    /// Returns the bot API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8000".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "local" => Ok(Environment::Local),
            _ if s.starts_with("http://") || s.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_base_url: s.trim_end_matches('/').to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_is_the_default() {
        assert_eq!(Environment::default(), Environment::Local);
        assert_eq!(Environment::Local.api_base_url(), "http://localhost:8000");
    }

    #[test]
    fn parses_urls_into_custom() {
        let env: Environment = "https://bot.example.com/".parse().unwrap();
        assert_eq!(env.api_base_url(), "https://bot.example.com");
        assert!("not-a-url".parse::<Environment>().is_err());
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
    }
}
