//! Hugging Face Hub adapter for the model hub port.
//!
//! Wraps the blocking `hf-hub` client. Artifacts resolve through its
//! content-addressed cache, so repeated fetches of the same file cost no
//! network round trip and return a stable local path.

pub mod fetcher;

pub use fetcher::{HubClientConfig, HubFetcher};
