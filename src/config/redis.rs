use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
    pub password: SecretString,
    #[serde(default)]
    pub url: Option<SecretString>,
}

impl RedisSettings {
    pub fn connection_url(&self) -> SecretString {
        match &self.url {
            Some(url) => url.clone(),
            None => {
                let password = self.password.expose_secret();
                let url = if password.is_empty() {
                    format!("redis://{}:{}", self.host, self.port)
                } else {
                    format!("redis://:{}@{}:{}", password, self.host, self.port)
                };
                SecretString::new(url.into_boxed_str())
            }
        }
    }
}
