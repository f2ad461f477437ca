pub mod sanity_store_http;

pub use sanity_store_http::{SanityConfig, SanityStoreHttp};
