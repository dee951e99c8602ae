pub mod options;
pub mod results;
pub mod selector;
pub mod series;
pub mod tooltip;
pub mod units;
