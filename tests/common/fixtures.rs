// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Event FAQ used across matcher scenarios
#[allow(dead_code)] // Used in integration tests
pub const EVENT_FAQ: &[(&str, &str)] = &[
    (
        "How do I register for the event?",
        "Visit our website and fill in the registration form.",
    ),
    ("Is there a registration fee?", "Free to attend."),
    ("Where is the venue located?", "Tech Hub, Downtown."),
    ("When does the workshop start?", "At 9 AM sharp."),
];

/// The event FAQ as `question|answer` lines
#[allow(dead_code)] // Used in integration tests
pub fn event_faq_lines() -> String {
    EVENT_FAQ
        .iter()
        .map(|(q, a)| format!("{q}|{a}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Five sentences of 44 words each (220 words)
#[allow(dead_code)] // Used in integration tests
pub fn five_sentence_text() -> String {
    (0..5)
        .map(|s| {
            let mut words: Vec<String> = (0..43).map(|w| format!("s{s}w{w}")).collect();
            words.push(format!("end{s}."));
            words.join(" ")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Temporary directory of test files
#[allow(dead_code)] // Used in integration tests
pub struct TestFiles {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestFiles {
    /// Create with custom files
    #[allow(dead_code)] // Used in integration tests
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Path of a file inside the directory (may not exist)
    #[allow(dead_code)] // Used in integration tests
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    #[allow(dead_code)] // Used in integration tests
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}
