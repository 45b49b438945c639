use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use subtrack_core::DEFAULT_CURRENCY;
use subtrack_finance::{
    Analyzer, CategoryRule, CategoryRules, DEFAULT_SUBSCRIPTION_VENDORS, SignPolicy,
    SubscriptionDetector,
};
use subtrack_ingest::LineParserConfig;

use crate::state::{ensure_subtrack_home, subtrack_home};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display label only; amounts are never converted
    pub currency: String,
    pub monthly_budget: Decimal,
    pub sign_policy: SignPolicy,
    pub parser: ParserSection,
    /// Checked in order, first match wins
    pub categories: Vec<CategoryRule>,
    pub subscriptions: SubscriptionsSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSection {
    pub allow_plus_sign: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionsSection {
    pub keywords: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            monthly_budget: Decimal::new(5000, 0),
            sign_policy: SignPolicy::default(),
            parser: ParserSection::default(),
            categories: CategoryRules::default().rules().to_vec(),
            subscriptions: SubscriptionsSection::default(),
        }
    }
}

impl Default for ParserSection {
    fn default() -> Self {
        Self {
            allow_plus_sign: LineParserConfig::default().allow_plus_sign,
        }
    }
}

impl Default for SubscriptionsSection {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_SUBSCRIPTION_VENDORS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn line_parser(&self) -> LineParserConfig {
        LineParserConfig {
            allow_plus_sign: self.parser.allow_plus_sign,
        }
    }

    pub fn analyzer(&self) -> Analyzer {
        Analyzer::new(
            CategoryRules::new(self.categories.clone()),
            SubscriptionDetector::new(self.subscriptions.keywords.as_slice()),
            self.sign_policy,
        )
        .with_currency(self.currency.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(subtrack_home()?.join("config.toml"))
}

/// Load `explicit` (which must exist) or the default config file (defaults
/// when absent).
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(explicit: Option<&Path>) -> Result<()> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => ensure_subtrack_home()?.join("config.toml"),
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
