use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    /// Shown as "created by" on listings created through the page.
    pub default_author: String,
    pub seed_sample: bool,
    // pagination is rendered, not applied
    pub page_count: u32,
    pub current_page: u32,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "jobboard")?
            .set_default("listen_port", "3000")?
            .set_default("default_author", "Marie S.")?
            .set_default("seed_sample", true)?
            .set_default("page_count", 6)?
            .set_default("current_page", 3)?
            .add_source(Environment::default().try_parsing(true))
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        if s.page_count == 0 {
            s.page_count = 1;
        }
        s.current_page = s.current_page.clamp(1, s.page_count);
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
