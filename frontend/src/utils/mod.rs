pub mod download;
pub mod filter;
pub mod format;
pub mod navigation;
#[cfg(target_arch = "wasm32")]
pub mod storage;
pub mod time;

pub use download::trigger_csv_download;
