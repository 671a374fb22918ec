pub mod discovery;
pub mod reporter;

pub use discovery::{discover_candidates, DiscoverOptions};
pub use reporter::{DiscoveryReport, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
