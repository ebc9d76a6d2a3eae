use crate::errors::{AppError, AppResult};
use crate::models::slot::LeadTimePrecision;
use crate::models::working_hours::default_closed_markers;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store settings JSON (the `/api/settings` payload)
    #[serde(default = "default_settings_file")]
    pub settings_file: String,
    /// Store timezone used when the settings carry none
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_min_lead")]
    pub min_delivery_time_hours: u32,
    #[serde(default = "default_max_days")]
    pub max_delivery_time_days: u32,
    #[serde(default = "default_slot_minutes")]
    pub slot_duration_minutes: u32,
    #[serde(default)]
    pub lead_time_precision: LeadTimePrecision,
    #[serde(default)]
    pub offer_asap: bool,
    #[serde(default = "default_true")]
    pub fallback_to_default_hours: bool,
    #[serde(default = "default_closed_markers")]
    pub closed_markers: Vec<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_settings_file() -> String {
    Config::config_dir()
        .join("settings.json")
        .to_string_lossy()
        .to_string()
}
fn default_timezone() -> String {
    "UTC".to_string()
}
fn default_min_lead() -> u32 {
    2
}
fn default_max_days() -> u32 {
    4
}
fn default_slot_minutes() -> u32 {
    120
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_file: default_settings_file(),
            timezone: default_timezone(),
            min_delivery_time_hours: default_min_lead(),
            max_delivery_time_days: default_max_days(),
            slot_duration_minutes: default_slot_minutes(),
            lead_time_precision: LeadTimePrecision::default(),
            offer_asap: false,
            fallback_to_default_hours: true,
            closed_markers: default_closed_markers(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rdelivery")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rdelivery")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdelivery.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize the configuration file and a sample store settings file.
    ///
    /// With `is_test` the config file is left untouched, only the settings
    /// file (if `custom_settings` is given) is created.
    pub fn init_all(custom_settings: Option<String>, is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let settings_path = match custom_settings {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join("settings.json"),
        };

        let config = Config {
            settings_file: settings_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
            success(format!("Config file: {:?}", Self::config_file()));
        }

        if !settings_path.exists() {
            if let Some(parent) = settings_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&settings_path, sample_settings_json()?)?;
        }

        success(format!("Settings:    {:?}", settings_path));

        Ok(())
    }
}

fn sample_settings_json() -> AppResult<String> {
    let sample = serde_json::json!({
        "storeName": "My Store",
        "weekStartDay": "monday",
        "minDeliveryTimeHours": 2,
        "maxDeliveryTimeDays": 4,
        "timezone": "UTC",
        "deliveryFee": "15.00",
        "freeDeliveryFrom": "50.00",
        "workingHours": {
            "monday": "10:00-22:00",
            "tuesday": "10:00-22:00",
            "wednesday": "10:00-22:00",
            "thursday": "10:00-22:00",
            "friday": "10:00-14:00,16:00-20:00",
            "saturday": "closed",
            "sunday": ""
        }
    });
    Ok(serde_json::to_string_pretty(&sample)?)
}
