mod files;

pub use files::{discover_candidates, DiscoverOptions};
