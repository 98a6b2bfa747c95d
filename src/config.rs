use std::net::IpAddr;

use figment::{providers::Env, Figment};
use redact::Secret;
use serde::Deserialize;

use crate::gemini::DEFAULT_GEMINI_MODEL;

#[derive(Deserialize)]
pub struct Config {
    /// When absent, the generation endpoints stay unconfigured for the
    /// life of the process.
    pub gemini_api_key: Option<Secret<String>>,

    #[serde(default = "default_model")]
    pub gemini_model: String,

    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

const fn default_port() -> u16 {
    5050
}

pub fn load_config() -> Result<Config, figment::Error> {
    let figment = Figment::new().merge(Env::raw());

    figment.extract()
}
