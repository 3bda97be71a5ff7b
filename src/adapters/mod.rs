pub mod clipboard_arboard;
pub mod gemini_client_http;
pub mod key_value_filesystem;
pub mod memory_key_value_store;
pub mod result_export;

pub use clipboard_arboard::ArboardClipboard;
pub use gemini_client_http::HttpGeminiClient;
pub use key_value_filesystem::FilesystemKeyValueStore;
pub use memory_key_value_store::MemoryKeyValueStore;
