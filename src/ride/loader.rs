//! 事件文件加载
//!
//! 支持两种格式：
//! - 文本：每行一个事件，`#` 开头为注释
//!   - `<t> RiderRequest <id> <row,col> <row,col> <patience>`
//!   - `<t> DriverRequest <id> <row,col> <speed>`
//! - JSON：`{ "kind": "rider_request" | "driver_request", ... }` 数组

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::driver::Driver;
use super::events::{DriverRequest, RiderRequest};
use super::location::Location;
use super::rider::Rider;
use crate::sim::{Event, Result, SimError, SimTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EventFormat {
    Text,
    Json,
}

impl EventFormat {
    /// 由扩展名推断格式，`.json` 以外一律按文本处理
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => EventFormat::Json,
            _ => EventFormat::Text,
        }
    }
}

/// JSON 事件描述
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventSpec {
    RiderRequest {
        at: u64,
        id: String,
        origin: Location,
        destination: Location,
        patience: u64,
    },
    DriverRequest {
        at: u64,
        id: String,
        location: Location,
        speed: u32,
    },
}

impl EventSpec {
    pub fn into_event(self) -> Result<Box<dyn Event>> {
        Ok(match self {
            EventSpec::RiderRequest {
                at,
                id,
                origin,
                destination,
                patience,
            } => Box::new(RiderRequest {
                at: SimTime(at),
                rider: Rider::new(id, origin, destination, patience),
            }),
            EventSpec::DriverRequest {
                at,
                id,
                location,
                speed,
            } => Box::new(DriverRequest {
                at: SimTime(at),
                driver: Driver::new(id, location, speed)?,
            }),
        })
    }
}

pub fn load_events(path: &Path, format: EventFormat) -> Result<Vec<Box<dyn Event>>> {
    let raw = fs::read_to_string(path)?;
    match format {
        EventFormat::Text => parse_text(&raw),
        EventFormat::Json => parse_json(&raw),
    }
}

pub fn parse_json(raw: &str) -> Result<Vec<Box<dyn Event>>> {
    let specs: Vec<EventSpec> = serde_json::from_str(raw)?;
    specs.into_iter().map(EventSpec::into_event).collect()
}

pub fn parse_text(raw: &str) -> Result<Vec<Box<dyn Event>>> {
    let mut events = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let spec = parse_line(line).map_err(|message| SimError::Parse {
            line: idx + 1,
            message,
        })?;
        events.push(spec.into_event()?);
    }
    Ok(events)
}

fn parse_line(line: &str) -> std::result::Result<EventSpec, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let number = |s: &str, what: &str| {
        s.parse::<u64>()
            .map_err(|e| format!("bad {what} `{s}`: {e}"))
    };
    match tokens.as_slice() {
        [at, "RiderRequest", id, origin, destination, patience] => Ok(EventSpec::RiderRequest {
            at: number(*at, "timestamp")?,
            id: id.to_string(),
            origin: origin.parse()?,
            destination: destination.parse()?,
            patience: number(*patience, "patience")?,
        }),
        [at, "DriverRequest", id, location, speed] => Ok(EventSpec::DriverRequest {
            at: number(*at, "timestamp")?,
            id: id.to_string(),
            location: location.parse()?,
            speed: speed
                .parse::<u32>()
                .map_err(|e| format!("bad speed `{speed}`: {e}"))?,
        }),
        [_, kind, ..] => Err(format!("unknown event `{kind}` or wrong field count")),
        _ => Err(format!("malformed line `{line}`")),
    }
}
