pub mod date_range;
pub mod event_type;
pub mod filter;
pub mod record;
pub mod trend;

pub use date_range::DateRange;
pub use event_type::EventType;
pub use filter::{FilterState, TypeFilter};
pub use record::{Detail, EventRecord};
pub use trend::{LabTrend, TrendPoint, TrendStatus};
