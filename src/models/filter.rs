use super::date_range::DateRange;
use super::event_type::EventType;

/// Type selector: every category, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EventType),
}

impl TypeFilter {
    pub const ALL: [TypeFilter; 5] = [
        TypeFilter::All,
        TypeFilter::Only(EventType::Lab),
        TypeFilter::Only(EventType::Prescription),
        TypeFilter::Only(EventType::Visit),
        TypeFilter::Only(EventType::Diagnosis),
    ];

    pub fn matches(&self, kind: EventType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => *t == kind,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(t) => t.as_str(),
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(TypeFilter::All);
        }
        EventType::from_wire(s).map(TypeFilter::Only)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "All Events",
            TypeFilter::Only(t) => t.group_label(),
        }
    }
}

impl From<EventType> for TypeFilter {
    fn from(t: EventType) -> Self {
        TypeFilter::Only(t)
    }
}

impl std::fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl clap::ValueEnum for TypeFilter {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()).help(self.label()))
    }
}

/// The current view query: type selector, date window and search text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FilterState {
    pub type_filter: TypeFilter,
    pub date_range: DateRange,
    pub search: String,
}

impl FilterState {
    pub fn new(type_filter: TypeFilter, date_range: DateRange, search: impl Into<String>) -> Self {
        Self {
            type_filter,
            date_range,
            search: search.into(),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    /// One-line description used in headers and empty-state messages.
    pub fn describe(&self) -> String {
        let mut parts = vec![self.type_filter.label().to_string(), self.date_range.label().to_string()];
        if !self.search.is_empty() {
            parts.push(format!("matching \"{}\"", self.search));
        }
        parts.join(" · ")
    }
}
