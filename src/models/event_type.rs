use serde::{Deserialize, Serialize};

/// Category of a timeline event. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Lab,
    Prescription,
    Visit,
    Diagnosis,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Lab,
        EventType::Prescription,
        EventType::Visit,
        EventType::Diagnosis,
    ];

    /// Wire form, used in records files and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Lab => "lab",
            EventType::Prescription => "prescription",
            EventType::Visit => "visit",
            EventType::Diagnosis => "diagnosis",
        }
    }

    /// Exact, case-sensitive match on the wire form.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "lab" => Some(EventType::Lab),
            "prescription" => Some(EventType::Prescription),
            "visit" => Some(EventType::Visit),
            "diagnosis" => Some(EventType::Diagnosis),
            _ => None,
        }
    }

    /// Label shown in the type selector.
    pub fn group_label(&self) -> &'static str {
        match self {
            EventType::Lab => "Lab Results",
            EventType::Prescription => "Medications",
            EventType::Visit => "Visits",
            EventType::Diagnosis => "Diagnoses",
        }
    }

    /// Capitalized badge ("Lab", "Prescription", ...).
    pub fn badge(&self) -> &'static str {
        match self {
            EventType::Lab => "Lab",
            EventType::Prescription => "Prescription",
            EventType::Visit => "Visit",
            EventType::Diagnosis => "Diagnosis",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
