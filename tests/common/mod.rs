// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in unit tests but are used in integration tests
#[allow(unused_imports)]
pub use fixtures::{event_faq_lines, five_sentence_text, TestFiles, EVENT_FAQ};
#[allow(unused_imports)]
pub use helpers::{assert_valid_stats, create_test_services, create_test_services_with_corpus};
