//! Tamper-evident log of verification events
//!
//! The surrounding product persists these into the external record
//! store's `verification_events` collection; the chain keeps them
//! verifiable while they live in process.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Types of recordable verification events
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationAction {
    GeofenceCheck {
        is_inside: bool,
        distance_feet: f64,
    },
    CdlSubmitted {
        state_code: String,
    },
    FaceComparison {
        confidence: f64,
        verified: bool,
    },
    LoadUnlocked,
}

/// A single verification event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationEvent {
    pub event_id: String,
    pub timestamp: String,
    pub action: VerificationAction,
    pub load_id: Option<String>,
    pub previous_hash: Option<String>,
}

impl VerificationEvent {
    pub fn new(
        action: VerificationAction,
        load_id: Option<String>,
        previous_hash: Option<String>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            action,
            load_id,
            previous_hash,
        }
    }

    /// Compute the hash of this event (for chain linking)
    pub fn compute_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.event_id.as_bytes());
        hasher.update(self.timestamp.as_bytes());
        hasher.update(format!("{:?}", self.action).as_bytes());
        if let Some(ref load_id) = self.load_id {
            hasher.update(load_id.as_bytes());
        }
        if let Some(ref prev) = self.previous_hash {
            hasher.update(prev.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

/// Chain of verification events for one subject (driver), with hash
/// linking
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct EventLog {
    pub events: Vec<VerificationEvent>,
    pub subject: String,
    pub created_at: String,
}

impl EventLog {
    /// Create a new event log for a subject
    pub fn new(subject: &str) -> Self {
        Self {
            events: Vec::new(),
            subject: subject.to_string(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Get the hash of the last event (for linking)
    pub fn last_hash(&self) -> Option<String> {
        self.events.last().map(|e| e.compute_hash())
    }

    /// Append an event, automatically linking to previous hash
    pub fn append(
        &mut self,
        action: VerificationAction,
        load_id: Option<String>,
    ) -> &VerificationEvent {
        let previous_hash = self.last_hash();
        let event = VerificationEvent::new(action, load_id, previous_hash);
        self.events.push(event);
        self.events.last().unwrap()
    }

    /// Verify the integrity of the chain
    pub fn verify(&self) -> Result<(), String> {
        let mut expected_prev: Option<String> = None;

        for (i, event) in self.events.iter().enumerate() {
            if event.previous_hash != expected_prev {
                return Err(format!(
                    "Chain broken at event {}: expected prev {:?}, got {:?}",
                    i, expected_prev, event.previous_hash
                ));
            }
            expected_prev = Some(event.compute_hash());
        }

        Ok(())
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize event log: {}", e))
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to deserialize event log: {}", e))
    }
}
