use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

/// Which entries the panel lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFilter {
    #[default]
    All,
    /// Warnings and errors only, e.g. a failed initial load.
    Problems,
}

impl LogFilter {
    pub fn label(self) -> &'static str {
        match self {
            LogFilter::All => "All",
            LogFilter::Problems => "Problems",
        }
    }

    pub fn accepts(self, level: LogLevel) -> bool {
        match self {
            LogFilter::All => true,
            LogFilter::Problems => matches!(level, LogLevel::Warning | LogLevel::Error),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Diagnostic log shown in the collapsible panel. Hidden until toggled.
///
/// Records the initial load outcome and each commit the operator makes.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
    pub filter: LogFilter,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: &str) {
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
    }

    /// Entries the current filter accepts, newest first.
    pub fn shown(&self) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| self.filter.accepts(e.level))
            .cloned()
            .collect()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(level, message);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends_entry() {
        let mut log = ActivityLog::default();
        assert!(!log.visible);

        log.push(LogLevel::Error, "Error fetching users: boom");
        log.push(LogLevel::Success, "Added user 1");

        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[0].level, LogLevel::Error);
        assert_eq!(log.entries[1].message, "Added user 1");
        assert_eq!(log.entries[0].timestamp.len(), "00:00:00".len());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_timestamp_is_local_time() {
        let mut log = ActivityLog::default();
        let before = chrono::Local::now().format("%H:%M").to_string();
        log.push(LogLevel::Info, "Loaded 10 users");
        let after = chrono::Local::now().format("%H:%M").to_string();

        let stamped = &log.entries[0].timestamp[..5];
        assert!(stamped == before || stamped == after);
    }

    #[test]
    fn test_problems_filter() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Info, "Loaded 10 users");
        log.push(LogLevel::Error, "Error fetching users: timed out");
        log.push(LogLevel::Success, "Added user 1");

        assert_eq!(log.shown().len(), 3);
        assert_eq!(log.shown()[0].message, "Added user 1");

        log.filter = LogFilter::Problems;
        let shown = log.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].level, LogLevel::Error);
        assert_eq!(log.entries.len(), 3);
    }
}
