use crate::config::Config;
use crate::core::dates::MAX_DELIVERY_DAYS;
use crate::core::slots::SlotPolicy;
use crate::errors::AppResult;
use crate::models::store_settings::StoreSettings;
use crate::ui::messages::warning;
use crate::utils::path::resolve_in;
use std::path::PathBuf;
use tracing::debug;

/// Store settings plus the slot policy resolved from them.
pub struct StoreContext {
    pub settings_path: PathBuf,
    pub settings: StoreSettings,
    pub policy: SlotPolicy,
}

impl StoreContext {
    /// Load the settings file named by the config. A missing file is not
    /// fatal: the store is treated as having no working hours configured.
    pub fn load(cfg: &Config, tz_override: Option<&str>) -> AppResult<Self> {
        let settings_path = resolve_in(&cfg.settings_file, &Config::config_dir());

        let settings = if settings_path.exists() {
            StoreSettings::load(&settings_path)?
        } else {
            warning(format!(
                "Store settings not found at {}, using default hours",
                settings_path.display()
            ));
            StoreSettings::default()
        };

        let policy = SlotPolicy::resolve(cfg, &settings, tz_override)?;
        debug!(?policy, "slot policy resolved");

        Ok(Self {
            settings_path,
            settings,
            policy,
        })
    }

    /// Days ahead to offer, capped at [`MAX_DELIVERY_DAYS`].
    pub fn max_delivery_days(&self, cfg: &Config) -> u32 {
        let days = self
            .settings
            .max_delivery_time_days
            .unwrap_or(cfg.max_delivery_time_days);
        if days > MAX_DELIVERY_DAYS {
            warning(format!(
                "maxDeliveryTimeDays {days} is too large, using {MAX_DELIVERY_DAYS}"
            ));
            return MAX_DELIVERY_DAYS;
        }
        days
    }
}
