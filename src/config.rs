// src/config.rs

use anyhow::{Context, Result};
use std::{env, time::Duration};

pub const DEFAULT_SHEET_ID: &str = "1dK1m0gelNX2CV7PgvrB0XmV_e8x72AORgn-eeI_ZWwc";
pub const DEFAULT_SHEET_NAME: &str = "결과";

/// Runtime settings. Everything has a working default; the environment can
/// override individual values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sheet_id: String,
    pub sheet_name: String,
    pub refresh_period: Duration,
    pub fetch_timeout: Duration,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            refresh_period: Duration::from_secs(5 * 60),
            fetch_timeout: Duration::from_secs(30),
            port: 8080,
        }
    }
}

impl Config {
    /// Defaults, overridden by `SHEET_ID`, `SHEET_NAME`, `REFRESH_SECS`,
    /// `FETCH_TIMEOUT_SECS` and `PORT` when set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(id) = lookup("SHEET_ID") {
            cfg.sheet_id = id;
        }
        if let Some(name) = lookup("SHEET_NAME") {
            cfg.sheet_name = name;
        }
        if let Some(raw) = lookup("REFRESH_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("parsing REFRESH_SECS={raw:?}"))?;
            if secs == 0 {
                anyhow::bail!("REFRESH_SECS must be greater than zero");
            }
            cfg.refresh_period = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup("FETCH_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("parsing FETCH_TIMEOUT_SECS={raw:?}"))?;
            cfg.fetch_timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup("PORT") {
            cfg.port = raw
                .trim()
                .parse()
                .with_context(|| format!("parsing PORT={raw:?}"))?;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let cfg = Config::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.refresh_period, Duration::from_secs(300));
        assert_eq!(cfg.sheet_name, "결과");
    }

    #[test]
    fn overrides_apply() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("SHEET_ID", "abc"),
            ("REFRESH_SECS", "60"),
            ("PORT", " 9000 "),
        ]))
        .unwrap();
        assert_eq!(cfg.sheet_id, "abc");
        assert_eq!(cfg.refresh_period, Duration::from_secs(60));
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.sheet_name, DEFAULT_SHEET_NAME);
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("REFRESH_SECS", "0")])).is_err());
    }
}
