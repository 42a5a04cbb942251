//! Queue-name sanitization and default queue-name generation.

use chrono::{DateTime, Utc};
use mockable::Clock;
use std::{env, fs};
use uuid::{NoContext, Timestamp, Uuid};

/// Prefix of every generated default queue name.
pub const DEFAULT_QUEUE_PREFIX: &str = "bus";

const UNKNOWN_PROCESS: &str = "process";
const UNKNOWN_MACHINE: &str = "localhost";

/// Strips every character that is not an ASCII letter, an ASCII digit, or
/// one of `.`, `_`, `-` and `:`.
///
/// Retained characters keep their relative order; nothing is replaced or
/// escaped.
///
/// # Examples
///
/// ```
/// use warren::bus_factory::domain::sanitize_queue_name_part;
///
/// assert_eq!(sanitize_queue_name_part("my host (01)/a:b"), "myhost01a:b");
/// ```
#[must_use]
pub fn sanitize_queue_name_part(input: &str) -> String {
    input
        .chars()
        .filter(|character| {
            character.is_ascii_alphanumeric() || matches!(character, '.' | '_' | '-' | ':')
        })
        .collect()
}

/// Process and machine names used to label generated queue names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostMetadata {
    process_name: String,
    machine_name: String,
}

impl HostMetadata {
    /// Creates metadata from explicit names.
    #[must_use]
    pub fn new(process_name: impl Into<String>, machine_name: impl Into<String>) -> Self {
        Self {
            process_name: process_name.into(),
            machine_name: machine_name.into(),
        }
    }

    /// Captures metadata for the current process.
    ///
    /// The process name is the executable's file stem. The machine name
    /// comes from `HOSTNAME`, then `COMPUTERNAME`, then `/etc/hostname`.
    /// Placeholders are used when none of these are available.
    #[must_use]
    pub fn current() -> Self {
        let process_name = env::current_exe()
            .ok()
            .and_then(|path| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| UNKNOWN_PROCESS.to_owned());

        let machine_name = ["HOSTNAME", "COMPUTERNAME"]
            .into_iter()
            .find_map(|key| env::var(key).ok().filter(|value| !value.trim().is_empty()))
            .or_else(|| {
                fs::read_to_string("/etc/hostname")
                    .ok()
                    .map(|contents| contents.trim().to_owned())
                    .filter(|value| !value.is_empty())
            })
            .unwrap_or_else(|| UNKNOWN_MACHINE.to_owned());

        Self::new(process_name, machine_name)
    }

    /// Returns the raw process name.
    #[must_use]
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// Returns the raw machine name.
    #[must_use]
    pub fn machine_name(&self) -> &str {
        &self.machine_name
    }
}

/// Generates a unique, time-ordered identifier for `timestamp`.
///
/// The identifier is the 32-digit lowercase hexadecimal form of a UUIDv7, so
/// identifiers generated at later milliseconds sort after earlier ones.
/// Timestamps before the Unix epoch are clamped to it.
#[must_use]
pub fn unique_id_at(timestamp: DateTime<Utc>) -> String {
    let seconds = u64::try_from(timestamp.timestamp()).unwrap_or(0);
    let uuid = Uuid::new_v7(Timestamp::from_unix(
        NoContext,
        seconds,
        timestamp.timestamp_subsec_nanos(),
    ));
    uuid.simple().to_string()
}

/// Composes the default receive-endpoint queue name
/// `bus-{process}-{machine}-{uniqueId}`.
#[must_use]
pub fn default_queue_name(metadata: &HostMetadata, clock: &impl Clock) -> String {
    format!(
        "{DEFAULT_QUEUE_PREFIX}-{}-{}-{}",
        sanitize_queue_name_part(metadata.process_name()),
        sanitize_queue_name_part(metadata.machine_name()),
        unique_id_at(clock.utc())
    )
}
