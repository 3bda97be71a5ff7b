mod fake_completion_client;
mod mock_clipboard;

pub use fake_completion_client::FakeCompletionClient;
pub use mock_clipboard::MockClipboard;
