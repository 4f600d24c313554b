//! Settings repository over the key-value store.
//!
//! # Invariants
//! - Missing or unreadable settings load as [`AppSettings::default`].
//! - Stored fields are merged over defaults, so absent fields keep defaults.

use crate::model::settings::AppSettings;
use crate::repo::{RepoResult, SETTINGS_KEY};
use crate::store::KeyValueStore;
use log::{error, info};

/// Repository interface for the global settings record.
pub trait SettingsRepository {
    fn load_settings(&self) -> AppSettings;
    fn save_settings(&mut self, settings: &AppSettings) -> RepoResult<()>;
}

/// Settings repository storing one JSON record under [`SETTINGS_KEY`].
pub struct KvSettingsRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvSettingsRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn read(&self) -> RepoResult<AppSettings> {
        match self.store.get_item(SETTINGS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(AppSettings::default()),
        }
    }
}

impl<S: KeyValueStore> SettingsRepository for KvSettingsRepository<S> {
    fn load_settings(&self) -> AppSettings {
        self.read().unwrap_or_else(|err| {
            error!(
                "event=settings_load module=repo status=error error_code=settings_read_failed error={err}"
            );
            AppSettings::default()
        })
    }

    fn save_settings(&mut self, settings: &AppSettings) -> RepoResult<()> {
        let encoded = serde_json::to_string(settings)?;
        if let Err(err) = self.store.set_item(SETTINGS_KEY, &encoded) {
            error!(
                "event=settings_save module=repo status=error error_code=settings_write_failed error={err}"
            );
            return Err(err.into());
        }
        info!("event=settings_save module=repo status=ok");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KvSettingsRepository, SettingsRepository};
    use crate::model::settings::AppSettings;
    use crate::repo::SETTINGS_KEY;
    use crate::store::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn missing_record_loads_defaults() {
        let repo = KvSettingsRepository::new(MemoryKeyValueStore::new());
        assert_eq!(repo.load_settings(), AppSettings::default());
    }

    #[test]
    fn corrupt_record_loads_defaults() {
        let mut store = MemoryKeyValueStore::new();
        store.set_item(SETTINGS_KEY, "{\"displayName\": 42").unwrap();
        let repo = KvSettingsRepository::new(store);
        assert_eq!(repo.load_settings().display_name, "Writer");
    }

    #[test]
    fn save_then_load_returns_saved_name() {
        let mut repo = KvSettingsRepository::new(MemoryKeyValueStore::new());
        repo.save_settings(&AppSettings::with_display_name("Ada"))
            .unwrap();
        assert_eq!(repo.load_settings().display_name, "Ada");
    }
}
