//! Application state for HaulCheck API

use std::collections::HashMap;

use shared_types::EventLog;
use tokio::sync::Mutex;
use verification_engine::geo::DEFAULT_GEOFENCE_RADIUS_FEET;
use verification_engine::{FaceMatchGate, MockFaceBackend};

pub struct AppState {
    /// Radius applied by every geofence check. Configurable because the
    /// product has shipped with both 500 ft and 2640 ft thresholds and
    /// which is canonical is still an open product decision.
    pub geofence_radius_feet: f64,
    pub face_gate: FaceMatchGate<MockFaceBackend>,
    /// Per-subject event chains. Persistence lives in the external
    /// record store; this is the in-process seam.
    pub events: Mutex<HashMap<String, EventLog>>,
}

impl AppState {
    pub fn from_env() -> Self {
        let geofence_radius_feet = std::env::var("GEOFENCE_RADIUS_FEET")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_GEOFENCE_RADIUS_FEET);

        Self {
            geofence_radius_feet,
            face_gate: FaceMatchGate::new(MockFaceBackend),
            events: Mutex::new(HashMap::new()),
        }
    }
}
