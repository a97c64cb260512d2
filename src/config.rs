use dotenvy::dotenv;
use serde::Deserialize;

use crate::error::{NotifyError, Result};

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub fcm_server_key: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Self>().map_err(|_| {
            NotifyError::Config("Invalid or missing environmental variable".to_string())
        })?;
        Ok(config)
    }
}
