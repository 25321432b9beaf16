//! Weather domain module.
//!
//! Shared pieces used by the weather tools:
//!
//! - `document` - defensive views over upstream JSON
//! - `fetcher` - HTTP access that degrades to "no data"
//! - `resolver` - the preferred-name / fallback search over JMA feeds

pub mod document;
pub mod fetcher;
pub mod resolver;

pub use document::Node;
pub use fetcher::{ACCEPT_GEO_JSON, ACCEPT_JSON, Fetch, FetchError, HttpFetcher, fetch_json};
pub use resolver::{Strategy, TOKYO_STRATEGIES, resolve, resolve_tokyo_weather};
