pub use std::io::Write;
pub use std::sync::Arc;

pub use tokio::time::{sleep, Duration};

pub use log::{debug, error, info, warn};

pub use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record};

pub use serde::Serialize;
pub use serde_json::Value;

pub use chrono::{DateTime, Local, Utc};

pub use reqwest::{Client, StatusCode};

pub use anyhow::{anyhow, Context, Result};

pub use getset::Getters;
pub use derive_new::new;

pub use async_trait::async_trait;
