use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub sessions: SessionConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow cross-origin requests from any origin (UI host served elsewhere).
    #[serde(default = "default_true")]
    pub permissive_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            permissive_cors: true,
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

/// Log output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Synthetic seed data configuration.
///
/// Each session starts from the table produced by these parameters; the same
/// values always produce the same table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SeedConfig {
    /// Seed for the sample generator's RNG.
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,
    /// Number of tickets generated per session.
    #[serde(default = "default_ticket_count")]
    pub ticket_count: u32,
    /// Lowest seeded ticket number, also the first number handed out
    /// when a table is empty.
    #[serde(default = "default_first_id")]
    pub first_id: u32,
    /// First day of the submission date window.
    #[serde(default = "default_window_start")]
    pub window_start: NaiveDate,
    /// Length of the submission date window in days.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rng_seed: default_rng_seed(),
            ticket_count: default_ticket_count(),
            first_id: default_first_id(),
            window_start: default_window_start(),
            window_days: default_window_days(),
        }
    }
}

fn default_rng_seed() -> u64 {
    42
}

fn default_ticket_count() -> u32 {
    100
}

fn default_first_id() -> u32 {
    1001
}

fn default_window_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid calendar date")
}

fn default_window_days() -> u32 {
    183
}

/// Session store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Maximum number of live sessions; the least recently used one is
    /// discarded when a new session would exceed it.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_max_sessions() -> usize {
    1024
}

/// Ticket submission policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmissionConfig {
    /// Reject submissions whose issue text is empty or whitespace.
    #[serde(default = "default_true")]
    pub reject_empty_issue: bool,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            reject_empty_issue: true,
        }
    }
}
