pub mod dto;

pub use dto::{OrdersByMonth, OverviewSummary};
