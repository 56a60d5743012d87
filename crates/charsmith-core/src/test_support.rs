//! In-memory port implementations shared by the unit tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use charsmith_types::error::WizardError;

use crate::service::fs::FileSystem;
use crate::wizard::source::LineSource;

/// Everything a [`ScriptedSource`] saw during a run.
#[derive(Debug, Default)]
pub struct Transcript {
    pub prompts: Vec<String>,
    pub said: Vec<String>,
    pub close_calls: usize,
}

/// A `LineSource` that answers prompts from a fixed list of lines.
///
/// Running out of lines behaves like a closed input stream.
pub struct ScriptedSource {
    lines: VecDeque<String>,
    transcript: Arc<Mutex<Transcript>>,
    fail_say: bool,
}

impl ScriptedSource {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            transcript: Arc::new(Mutex::new(Transcript::default())),
            fail_say: false,
        }
    }

    /// Make every `say` call fail with an output error.
    pub fn failing_output(mut self) -> Self {
        self.fail_say = true;
        self
    }

    /// Shared handle to the transcript, usable after the source is moved.
    pub fn transcript(&self) -> Arc<Mutex<Transcript>> {
        Arc::clone(&self.transcript)
    }
}

impl LineSource for ScriptedSource {
    async fn ask(&mut self, prompt: &str) -> Result<String, WizardError> {
        self.transcript.lock().unwrap().prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(WizardError::InputClosed)
    }

    async fn say(&mut self, text: &str) -> Result<(), WizardError> {
        if self.fail_say {
            return Err(WizardError::Output("output unavailable".to_string()));
        }
        self.transcript.lock().unwrap().said.push(text.to_string());
        Ok(())
    }

    async fn close(&mut self) {
        self.transcript.lock().unwrap().close_calls += 1;
    }
}

/// A `FileSystem` backed by a map of path -> content.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    dirs: Mutex<HashSet<PathBuf>>,
    fail_writes: bool,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// A filesystem whose writes always fail with `PermissionDenied`.
    pub fn read_only() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn insert(&self, path: &Path, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }
}

impl FileSystem for MemoryFileSystem {
    async fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        if self.fail_writes {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.insert(path, content);
        Ok(())
    }

    async fn read_file(&self, path: &Path) -> Result<String, std::io::Error> {
        self.get(path).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file")
        })
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        self.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.has_dir(path)
    }
}
