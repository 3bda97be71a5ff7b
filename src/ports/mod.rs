mod clipboard_writer;
mod completion_client;
mod key_value_store;

pub use clipboard_writer::ClipboardWriter;
pub use completion_client::CompletionClient;
pub use key_value_store::KeyValueStore;
