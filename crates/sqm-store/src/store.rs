//! The marker store.

use serde_json::Value;
use sqm_core::coerce::{self, Rejection};
use sqm_core::export::{self, ExportFormat};
use sqm_core::{ImportError, Marker, ParsedCoordinates, StructureType, now_millis};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records now held by the store.
    pub imported: usize,
    /// Records dropped for unusable coordinates.
    pub rejected: Vec<Rejection>,
}

/// Ordered marker sequence persisted under a single storage key.
///
/// Every mutation (`add`, `import_*`, `clear`) writes the full sequence back
/// to storage before returning. Write failures are logged and otherwise
/// ignored; the in-memory sequence stays authoritative for the session.
#[derive(Debug)]
pub struct MarkerStore<S> {
    storage: S,
    key: String,
    markers: Vec<Marker>,
}

impl<S: KeyValueStore> MarkerStore<S> {
    /// Open the store, loading whatever is saved under `key`.
    ///
    /// Saved records keep their fields as written, `ts: 0` included. Data in
    /// another shape is coerced like an import. Unreadable or unparseable
    /// saved data is treated as an empty store.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let markers = load(&storage, &key);
        tracing::debug!(key = %key, count = markers.len(), "opened marker store");
        Self {
            storage,
            key,
            markers,
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a marker stamped with the current time.
    pub fn add(&mut self, kind: StructureType, label: &str, coords: &ParsedCoordinates) -> Marker {
        self.add_at(kind, label, coords, now_millis())
    }

    /// Append a marker with an explicit creation time.
    pub fn add_at(
        &mut self,
        kind: StructureType,
        label: &str,
        coords: &ParsedCoordinates,
        created_at: i64,
    ) -> Marker {
        let marker = Marker::from_coordinates(kind, label, coords, created_at);
        self.markers.push(marker.clone());
        self.persist();
        marker
    }

    /// Replace the whole sequence with the records of a pasted payload.
    ///
    /// # Errors
    ///
    /// Returns `ImportError` if `text` is not a JSON array of objects. The
    /// current sequence is left untouched.
    pub fn import_json(&mut self, text: &str) -> Result<ImportSummary, ImportError> {
        let value: Value = serde_json::from_str(text)?;
        self.import_all(&value)
    }

    /// Replace the whole sequence with the coerced records of `payload`.
    ///
    /// # Errors
    ///
    /// Returns `ImportError` if `payload` is not an array of objects. The
    /// current sequence is left untouched.
    pub fn import_all(&mut self, payload: &Value) -> Result<ImportSummary, ImportError> {
        let batch = coerce::coerce_payload(payload, now_millis())?;
        self.markers = batch.markers;
        self.persist();
        Ok(ImportSummary {
            imported: self.markers.len(),
            rejected: batch.rejected,
        })
    }

    /// Drop every marker. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.markers.len();
        self.markers.clear();
        self.persist();
        removed
    }

    /// Render the sequence in one of the copy formats.
    #[must_use]
    pub fn export_text(&self, format: ExportFormat) -> String {
        export::render(&self.markers, format)
    }

    /// Full records as pretty JSON, in the storage layout.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialize` if a record cannot be serialized.
    pub fn dump_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.markers)?)
    }

    /// Write the sequence to storage, reporting failure.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the storage write fails.
    pub fn save(&mut self) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&self.markers)?;
        self.storage.set(&self.key, &encoded)
    }

    fn persist(&mut self) {
        if let Err(error) = self.save() {
            tracing::warn!(%error, key = %self.key, "failed to persist markers");
        }
    }
}

fn load<S: KeyValueStore>(storage: &S, key: &str) -> Vec<Marker> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!(%error, key, "failed to read saved markers; starting empty");
            return Vec::new();
        }
    };

    // Records this store wrote load verbatim; anything looser goes through
    // import coercion.
    if let Ok(markers) = serde_json::from_str::<Vec<Marker>>(&raw) {
        return markers;
    }

    match coerce::parse_payload(&raw, now_millis()) {
        Ok(batch) => batch.markers,
        Err(error) => {
            tracing::warn!(%error, key, "saved markers are unreadable; starting empty");
            Vec::new()
        }
    }
}
