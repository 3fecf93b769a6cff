// SPDX-License-Identifier: MIT

//! Write-through document store.
//!
//! The single source of truth for all mutable records: an in-memory mirror
//! of the whole schema, serialized in full to one JSON file on every
//! mutation before the mutator returns. There are no transactions and no
//! migrations; concurrent writers are unsupported (last writer wins).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::db::seed;
use crate::error::AppError;
use crate::models::{ClientProfile, FoodLog, MeasurementLog, User, UserRole, WeightLog, Workout};

/// The full durable document. One JSON object, no version field; schema
/// changes require manual migration or reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSchema {
    pub users: Vec<User>,
    pub clients: Vec<ClientProfile>,
    pub food_logs: Vec<FoodLog>,
    pub weight_logs: Vec<WeightLog>,
    pub workouts: Vec<Workout>,
    pub measurements: Vec<MeasurementLog>,
    /// username -> hex SHA-256 digest of the password
    pub credentials: HashMap<String, String>,
}

struct Inner {
    /// None for in-memory stores (tests); mutations then skip the file write.
    path: Option<PathBuf>,
    data: DatabaseSchema,
}

/// Handle to the document store. Cheap to clone; all clones share state.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<Inner>>,
}

impl Store {
    /// Open a store backed by the given file, loading the document if it
    /// already exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let data = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .map_err(|e| AppError::Database(format!("Failed to read {}: {}", path.display(), e)))?;
            serde_json::from_str(&raw)
                .map_err(|e| AppError::Database(format!("Failed to parse {}: {}", path.display(), e)))?
        } else {
            DatabaseSchema::default()
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(Inner {
                path: Some(path),
                data,
            })),
        })
    }

    /// Create a store with no backing file. Used in tests.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                path: None,
                data: DatabaseSchema::default(),
            })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Serialize the whole schema to the backing file.
    ///
    /// Called while holding the write lock so the file always reflects the
    /// mirror. A failed write propagates to the caller; the in-memory state
    /// keeps the mutation (fatal to the action, not to the process).
    fn persist(inner: &Inner) -> Result<(), AppError> {
        let Some(path) = &inner.path else {
            return Ok(());
        };
        let raw = serde_json::to_string(&inner.data)
            .map_err(|e| AppError::Database(format!("Serialization failed: {}", e)))?;
        std::fs::write(path, raw)
            .map_err(|e| AppError::Database(format!("Failed to write {}: {}", path.display(), e)))
    }

    /// Seed the store on first run.
    ///
    /// Idempotent: seeds only if no credentials exist yet. Returns true if
    /// seeding happened. Must run before serving requests.
    pub fn initialize(&self) -> Result<bool, AppError> {
        let mut inner = self.write();
        if !inner.data.credentials.is_empty() {
            return Ok(false);
        }

        tracing::info!("Seeding database");
        inner.data.credentials.insert(
            seed::COACH_USERNAME.to_string(),
            hash_secret(seed::COACH_PASSWORD),
        );
        inner.data.users = vec![seed::coach()];
        inner.data.clients = seed::clients();
        inner.data.food_logs = seed::food_logs();
        inner.data.weight_logs = seed::weight_logs();
        inner.data.workouts = seed::workouts();
        inner.data.measurements = seed::measurements();

        Self::persist(&inner)?;
        Ok(true)
    }

    // ─── Authentication ──────────────────────────────────────────

    /// Look up a user by credential.
    ///
    /// Coaches authenticate with username + password against a stored
    /// SHA-256 hex digest (unsalted). Clients authenticate with username +
    /// passport code compared verbatim, and get a reduced user view back.
    /// Returns None for any mismatch without distinguishing the cause.
    pub fn authenticate(&self, identifier: &str, secret: &str, role: UserRole) -> Option<User> {
        let inner = self.read();
        match role {
            UserRole::Coach => {
                let stored_hash = inner.data.credentials.get(identifier)?;
                if hash_secret(secret) != *stored_hash {
                    return None;
                }
                inner
                    .data
                    .users
                    .iter()
                    .find(|u| u.username.as_deref() == Some(identifier) && u.role == UserRole::Coach)
                    .cloned()
            }
            UserRole::Client => inner
                .data
                .clients
                .iter()
                .find(|c| c.username == identifier && c.passport_code == secret)
                .map(ClientProfile::reduced_user),
        }
    }

    // ─── Getters (defensive copies) ──────────────────────────────

    pub fn users(&self) -> Vec<User> {
        self.read().data.users.clone()
    }

    pub fn clients(&self) -> Vec<ClientProfile> {
        self.read().data.clients.clone()
    }

    pub fn client(&self, id: &str) -> Option<ClientProfile> {
        self.read().data.clients.iter().find(|c| c.id == id).cloned()
    }

    pub fn food_logs(&self) -> Vec<FoodLog> {
        self.read().data.food_logs.clone()
    }

    pub fn weight_logs(&self) -> Vec<WeightLog> {
        self.read().data.weight_logs.clone()
    }

    pub fn workouts(&self) -> Vec<Workout> {
        self.read().data.workouts.clone()
    }

    pub fn workout(&self, id: &str) -> Option<Workout> {
        self.read().data.workouts.iter().find(|w| w.id == id).cloned()
    }

    pub fn measurements(&self) -> Vec<MeasurementLog> {
        self.read().data.measurements.clone()
    }

    // ─── Mutators (write-through) ────────────────────────────────

    pub fn add_client(&self, client: ClientProfile) -> Result<(), AppError> {
        let mut inner = self.write();
        inner.data.clients.push(client);
        Self::persist(&inner)
    }

    /// Replace the client record with a matching id.
    pub fn update_client(&self, client: ClientProfile) -> Result<(), AppError> {
        let mut inner = self.write();
        let Some(existing) = inner.data.clients.iter_mut().find(|c| c.id == client.id) else {
            return Err(AppError::NotFound(format!("Client {} not found", client.id)));
        };
        *existing = client;
        Self::persist(&inner)
    }

    /// Insert a food log at the head of the collection (newest first).
    pub fn add_food_log(&self, log: FoodLog) -> Result<(), AppError> {
        let mut inner = self.write();
        inner.data.food_logs.insert(0, log);
        Self::persist(&inner)
    }

    pub fn delete_food_log(&self, id: &str) -> Result<(), AppError> {
        let mut inner = self.write();
        inner.data.food_logs.retain(|l| l.id != id);
        Self::persist(&inner)
    }

    /// Append a weight log and update the owning client's current weight.
    ///
    /// The profile always takes the weight of the log added last, even if
    /// that log is backdated relative to existing entries.
    pub fn add_weight_log(&self, log: WeightLog) -> Result<(), AppError> {
        let mut inner = self.write();
        let client_id = log.client_id.clone();
        let weight_kg = log.weight_kg;
        inner.data.weight_logs.push(log);
        if let Some(client) = inner.data.clients.iter_mut().find(|c| c.id == client_id) {
            client.current_weight_kg = weight_kg;
        }
        Self::persist(&inner)
    }

    pub fn add_measurement(&self, log: MeasurementLog) -> Result<(), AppError> {
        let mut inner = self.write();
        inner.data.measurements.push(log);
        Self::persist(&inner)
    }

    pub fn add_workout(&self, workout: Workout) -> Result<(), AppError> {
        let mut inner = self.write();
        inner.data.workouts.push(workout);
        Self::persist(&inner)
    }

    /// Replace the workout record with a matching id.
    pub fn update_workout(&self, workout: Workout) -> Result<(), AppError> {
        let mut inner = self.write();
        let Some(existing) = inner.data.workouts.iter_mut().find(|w| w.id == workout.id) else {
            return Err(AppError::NotFound(format!("Workout {} not found", workout.id)));
        };
        *existing = workout;
        Self::persist(&inner)
    }

    /// Toggle one exercise and recompute the workout's completed flag, as a
    /// single store write.
    pub fn toggle_exercise(&self, workout_id: &str, exercise_id: &str) -> Result<Workout, AppError> {
        let mut inner = self.write();
        let Some(workout) = inner.data.workouts.iter_mut().find(|w| w.id == workout_id) else {
            return Err(AppError::NotFound(format!("Workout {} not found", workout_id)));
        };
        if !workout.toggle_exercise(exercise_id) {
            return Err(AppError::NotFound(format!(
                "Exercise {} not found in workout {}",
                exercise_id, workout_id
            )));
        }
        let updated = workout.clone();
        Self::persist(&inner)?;
        Ok(updated)
    }
}

/// Hex-encoded SHA-256 digest of a secret.
///
/// Unsalted; coach credentials are demo-grade, not production password
/// storage.
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
