use contracts::shared::config::{builtin_defaults, load_config, AlertSettings, AppConfig, IntegrationsConfig, ThresholdsConfig};
use contracts::shared::error::ValidationError;
use leptos::prelude::*;

/// Settings edited on the admin page, seeded from the embedded configuration.
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub config: RwSignal<AppConfig>,
}

impl SettingsContext {
    pub fn load() -> Self {
        Self {
            config: RwSignal::new(initial_config()),
        }
    }

    /// Validate and apply edited thresholds and alert settings.
    pub fn save(
        &self,
        thresholds: ThresholdsConfig,
        alerts: AlertSettings,
        integrations: IntegrationsConfig,
    ) -> Result<(), ValidationError> {
        thresholds.validate()?;
        alerts.validate()?;
        self.config.update(|c| {
            c.thresholds = thresholds;
            c.alerts = alerts;
            c.integrations = integrations;
        });
        log::info!("settings saved");
        Ok(())
    }

    /// Restore the embedded defaults.
    pub fn reset(&self) {
        self.config.set(initial_config());
        log::info!("settings reset to defaults");
    }
}

fn initial_config() -> AppConfig {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("embedded configuration rejected, using built-in defaults: {}", e);
            builtin_defaults()
        }
    }
}

pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>().expect("SettingsContext not found in component tree")
}
