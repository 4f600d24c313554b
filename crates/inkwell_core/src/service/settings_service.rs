//! Settings use-case service.

use crate::model::settings::AppSettings;
use crate::repo::settings_repo::SettingsRepository;
use crate::repo::RepoResult;

/// Settings facade over repository implementations.
pub struct SettingsService<R: SettingsRepository> {
    repo: R,
}

impl<R: SettingsRepository> SettingsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Current settings; defaults when nothing readable is stored.
    pub fn load(&self) -> AppSettings {
        self.repo.load_settings()
    }

    /// Saves a display name; blank input stores the default name.
    pub fn save_display_name(&mut self, name: &str) -> RepoResult<AppSettings> {
        let settings = AppSettings::with_display_name(name);
        self.repo.save_settings(&settings)?;
        Ok(settings)
    }
}
