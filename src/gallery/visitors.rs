//! Visitor statistics
//!
//! Counts total page views and distinct visitor addresses. The record lives
//! behind a [`StatsStore`] handle and every update is a complete
//! load-modify-save cycle, so nothing is cached between requests.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use super::Result;
use crate::logger;

const LAST_RESET_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Persisted visit counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorStats {
    pub total_visits: u64,
    pub unique_visitors: u64,
    /// Distinct visitor addresses in first-seen order
    #[serde(rename = "visitor_ips")]
    pub visitor_addresses: Vec<String>,
    /// Local time the record was (re)initialized
    pub last_reset: String,
}

impl VisitorStats {
    /// Fresh record with zero counts, stamped with the current local time
    pub fn new() -> Self {
        Self {
            total_visits: 0,
            unique_visitors: 0,
            visitor_addresses: Vec::new(),
            last_reset: Local::now().format(LAST_RESET_FORMAT).to_string(),
        }
    }

    /// Count one visit from `address`. Returns true for a first-time visitor.
    pub fn record(&mut self, address: &str) -> bool {
        self.total_visits += 1;

        let is_new = !self.visitor_addresses.iter().any(|a| a == address);
        if is_new {
            self.visitor_addresses.push(address.to_string());
        }
        self.unique_visitors = u64::try_from(self.visitor_addresses.len()).unwrap_or(u64::MAX);

        is_new
    }
}

impl Default for VisitorStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Storage backend for the stats record
pub trait StatsStore {
    /// Read the record. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<VisitorStats>>;

    /// Replace the stored record
    fn save(&self, stats: &VisitorStats) -> Result<()>;

    /// Human readable location, used in log messages
    fn location(&self) -> String;
}

/// Stats record kept as an indented JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> Result<Option<VisitorStats>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, stats: &VisitorStats) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, to_indented_json(stats)?)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serialize with a four-space indent
fn to_indented_json(stats: &VisitorStats) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    stats.serialize(&mut serializer)?;
    Ok(buf)
}

/// In-memory store holding the raw serialized record
#[derive(Debug, Default)]
pub struct MemoryStore {
    content: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with raw content, which need not be valid JSON
    pub fn with_contents(content: &str) -> Self {
        Self {
            content: Mutex::new(Some(content.to_string())),
        }
    }

    /// Raw content currently stored
    pub fn contents(&self) -> Option<String> {
        self.content
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Result<Option<VisitorStats>> {
        let content = self.content.lock().unwrap_or_else(PoisonError::into_inner);
        match content.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, stats: &VisitorStats) -> Result<()> {
        let raw = String::from_utf8_lossy(&to_indented_json(stats)?).into_owned();
        *self.content.lock().unwrap_or_else(PoisonError::into_inner) = Some(raw);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

/// Visit counter bound to an explicit store handle
#[derive(Debug)]
pub struct VisitorCounter<S: StatsStore> {
    store: S,
}

impl<S: StatsStore> VisitorCounter<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Make sure a record exists, creating an empty one if needed
    pub fn init(&self) -> Result<VisitorStats> {
        self.load_or_init()
    }

    /// Count a page view from `address` and persist the result
    pub fn record_visit(&self, address: &str) -> Result<VisitorStats> {
        let mut stats = self.load_or_init()?;
        stats.record(address);
        self.store.save(&stats)?;
        Ok(stats)
    }

    /// Current counters. Counts are never modified here, though a missing
    /// or unreadable record is replaced with an empty one.
    pub fn get_stats(&self) -> Result<VisitorStats> {
        self.load_or_init()
    }

    fn load_or_init(&self) -> Result<VisitorStats> {
        let load_error = match self.store.load() {
            Ok(Some(stats)) => return Ok(stats),
            Ok(None) => None,
            Err(e) => Some(e),
        };

        let stats = VisitorStats::new();
        self.store.save(&stats)?;

        match load_error {
            Some(e) => logger::log_stats_reset(&self.store.location(), &e),
            None => logger::log_info(&format!(
                "Initialized visitor stats at {}",
                self.store.location()
            )),
        }
        Ok(stats)
    }
}
