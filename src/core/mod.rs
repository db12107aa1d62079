pub mod banner;
pub mod filter;
pub mod log;
pub mod query;
pub mod store;
pub mod trend;
pub mod view;

pub use filter::apply_filters;
pub use store::RecordStore;
pub use trend::{TrendScale, build_lab_trend};
pub use view::{FilterChange, TimelineView, ViewState};
