//! Settings document persistence
//!
//! One JSON document per device instance at a fixed path. Writes are handed
//! to a background thread so a save never blocks a tick or an operator
//! mutation; a corrupt document on load is discarded wholesale for the
//! factory default snapshot, never partially repaired.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread;
use tracing::{error, info, warn};

use crate::constants::storage;
use crate::settings::CameraSettings;

/// Load/save boundary for the settings document.
pub trait SettingsGateway: Send {
    /// Read the persisted record; `Ok(None)` when no document exists yet.
    fn load(&self) -> Result<Option<CameraSettings>>;

    /// Write the given snapshot as the new document.
    fn save(&self, settings: &CameraSettings) -> Result<()>;
}

/// Restore the persisted record, falling back to the factory default when
/// there is no document or the document cannot be trusted.
pub fn load_or_default(gateway: &dyn SettingsGateway) -> CameraSettings {
    match gateway.load() {
        Ok(Some(settings)) => {
            info!(camera = %settings.camera_name, "restored persisted settings");
            settings
        }
        Ok(None) => {
            info!("no settings document found, using factory defaults");
            CameraSettings::default()
        }
        Err(e) => {
            warn!(error = %e, "settings document unreadable, discarding for factory defaults");
            CameraSettings::default()
        }
    }
}

/// File-backed gateway storing the document as pretty-printed JSON.
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Gateway at the fixed per-user location under the platform data dir.
    pub fn at_default_path() -> Self {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(storage::APP_DIR);
        path.push(storage::SETTINGS_FILE);
        Self::new(path)
    }
}

impl SettingsGateway for JsonFileGateway {
    fn load(&self) -> Result<Option<CameraSettings>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {:?}", self.path))?;
        let settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings document {:?}", self.path))?;
        Ok(Some(settings))
    }

    fn save(&self, settings: &CameraSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }
        let contents = serde_json::to_string_pretty(settings)
            .context("Failed to serialize settings to JSON")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write settings document {:?}", self.path))?;
        Ok(())
    }
}

/// Fire-and-forget wrapper: `save` enqueues the snapshot for a writer
/// thread and returns immediately. Loads go straight to the inner gateway.
///
/// Dropping the writer disconnects the queue; the thread drains whatever is
/// in flight and exits on its own. Shutdown does not wait for it.
pub struct BackgroundWriter {
    inner: Arc<dyn SettingsGateway + Sync>,
    queue: Sender<CameraSettings>,
}

impl BackgroundWriter {
    pub fn spawn(gateway: impl SettingsGateway + Sync + 'static) -> Self {
        let inner: Arc<dyn SettingsGateway + Sync> = Arc::new(gateway);
        let (queue, snapshots) = mpsc::channel::<CameraSettings>();

        let sink = inner.clone();
        thread::spawn(move || {
            for snapshot in snapshots {
                if let Err(e) = sink.save(&snapshot) {
                    error!(error = %e, "failed to persist settings snapshot");
                }
            }
        });

        Self { inner, queue }
    }
}

impl SettingsGateway for BackgroundWriter {
    fn load(&self) -> Result<Option<CameraSettings>> {
        self.inner.load()
    }

    fn save(&self, settings: &CameraSettings) -> Result<()> {
        // Disconnection only happens during teardown; the snapshot is moot then
        let _ = self.queue.send(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FieldValue;
    use crate::settings::domains::{CameraMode, VideoLength};
    use std::time::Duration;

    fn gateway_in(dir: &tempfile::TempDir) -> JsonFileGateway {
        JsonFileGateway::new(dir.path().join(storage::SETTINGS_FILE))
    }

    #[test]
    fn test_missing_document_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(gateway_in(&dir).load().unwrap().is_none());
    }

    #[test]
    fn test_roundtrip_preserves_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = gateway_in(&dir);

        let original = CameraSettings::default()
            .with_value(FieldValue::Mode(CameraMode::Video))
            .with_value(FieldValue::VideoLength(VideoLength::Min1))
            .with_value(FieldValue::TimeLapseEnabled(true))
            .with_value(FieldValue::CaptureTimerEnabled(true));

        gateway.save(&original).unwrap();
        let restored = gateway.load().unwrap().unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_corrupt_documents_are_discarded_for_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(storage::SETTINGS_FILE);
        let gateway = JsonFileGateway::new(path.clone());

        // Truncated JSON
        fs::write(&path, "{\"mode\": \"TRAIL CAM\"").unwrap();
        assert!(gateway.load().is_err());
        assert_eq!(load_or_default(&gateway), CameraSettings::default());

        // Out-of-domain enum member
        let mut doc = serde_json::to_value(CameraSettings::default()).unwrap();
        doc["mode"] = serde_json::Value::String("NIGHT VISION".to_string());
        fs::write(&path, doc.to_string()).unwrap();
        assert!(gateway.load().is_err());

        // Missing required field
        let mut doc = serde_json::to_value(CameraSettings::default()).unwrap();
        doc.as_object_mut().unwrap().remove("battery_type");
        fs::write(&path, doc.to_string()).unwrap();
        assert!(gateway.load().is_err());

        // Timestamp that is not a real instant
        let mut doc = serde_json::to_value(CameraSettings::default()).unwrap();
        doc["current_device_time"] = serde_json::Value::String("1970-02-31T00:00:00".to_string());
        fs::write(&path, doc.to_string()).unwrap();
        assert!(gateway.load().is_err());
        assert_eq!(load_or_default(&gateway), CameraSettings::default());
    }

    #[test]
    fn test_load_or_default_without_document() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_or_default(&gateway_in(&dir)), CameraSettings::default());
    }

    #[test]
    fn test_background_writer_persists_the_latest_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(storage::SETTINGS_FILE);
        let writer = BackgroundWriter::spawn(JsonFileGateway::new(path.clone()));

        let first = CameraSettings::default();
        let second = first.with_value(FieldValue::Hdr(true));
        writer.save(&first).unwrap();
        writer.save(&second).unwrap();

        // Disconnect the queue; the writer drains what is in flight
        drop(writer);

        let reader = JsonFileGateway::new(path);
        for _ in 0..100 {
            if let Ok(Some(persisted)) = reader.load()
                && persisted == second
            {
                return;
            }
            thread::sleep(Duration::from_millis(10));
        }
        panic!("background writer never persisted the latest snapshot");
    }
}
