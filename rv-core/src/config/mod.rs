use std::collections::BTreeMap;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize,
};
use serde_json as json;
use tracing::*;

use crate::errors::*;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config option not set: {0}")]
    MissingOption(String),
}

impl ConfigError {
    pub fn missing_option(key: &str) -> anyhow::Error {
        anyhow!(ConfigError::MissingOption(key.into()))
    }
}

/// Types that can be stored in a `Config`; covers every shape the option
/// tables declare (ints, floats, strings, string-to-string maps).
pub trait ConfigValue: Clone {
    fn into_value(self) -> json::Value;
    fn from_value(v: &json::Value) -> Option<Self>;
}

impl ConfigValue for i32 {
    fn into_value(self) -> json::Value {
        self.into()
    }

    fn from_value(v: &json::Value) -> Option<i32> {
        v.as_i64().and_then(|i| i32::try_from(i).ok())
    }
}

impl ConfigValue for i64 {
    fn into_value(self) -> json::Value {
        self.into()
    }

    fn from_value(v: &json::Value) -> Option<i64> {
        v.as_i64()
    }
}

impl ConfigValue for f64 {
    fn into_value(self) -> json::Value {
        self.into()
    }

    fn from_value(v: &json::Value) -> Option<f64> {
        v.as_f64()
    }
}

impl ConfigValue for bool {
    fn into_value(self) -> json::Value {
        self.into()
    }

    fn from_value(v: &json::Value) -> Option<bool> {
        v.as_bool()
    }
}

impl ConfigValue for String {
    fn into_value(self) -> json::Value {
        self.into()
    }

    fn from_value(v: &json::Value) -> Option<String> {
        v.as_str().map(Into::into)
    }
}

impl ConfigValue for BTreeMap<String, String> {
    fn into_value(self) -> json::Value {
        json::Value::Object(self.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    fn from_value(v: &json::Value) -> Option<BTreeMap<String, String>> {
        v.as_object()?
            .iter()
            .map(|(k, v)| Some((k.clone(), v.as_str()?.to_string())))
            .collect()
    }
}

/// A typed key into a `Config`; the type parameter ties `set` and `get` calls
/// for the same option to the same value shape.
#[derive(Clone, Copy, Debug)]
pub struct ConfigOption<T: ConfigValue> {
    key: &'static str,
    _marker: PhantomData<T>,
}

/// A `ConfigOption` that also carries a fallback, so lookups always resolve.
/// The default is a fn pointer rather than a value so option tables can live
/// in consts even when the value type has no const constructor.
#[derive(Clone, Copy, Debug)]
pub struct DefaultedConfigOption<T: ConfigValue> {
    key: &'static str,
    default: fn() -> T,
}

impl<T: ConfigValue> ConfigOption<T> {
    pub const fn new(key: &'static str) -> ConfigOption<T> {
        ConfigOption { key, _marker: PhantomData }
    }

    pub const fn with_default(self, default: fn() -> T) -> DefaultedConfigOption<T> {
        DefaultedConfigOption { key: self.key, default }
    }
}

impl<T: ConfigValue> DefaultedConfigOption<T> {
    pub fn default_value(&self) -> T {
        (self.default)()
    }
}

pub trait ConfigKey<T: ConfigValue> {
    fn key(&self) -> &'static str;
}

impl<T: ConfigValue> ConfigKey<T> for ConfigOption<T> {
    fn key(&self) -> &'static str {
        self.key
    }
}

impl<T: ConfigValue> ConfigKey<T> for DefaultedConfigOption<T> {
    fn key(&self) -> &'static str {
        self.key
    }
}

/// Mutable store of deployment configuration, keyed by option name.  Values
/// keep their JSON shape internally; the typed accessors go through the
/// `ConfigValue` conversions at the edges.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Config {
    values: BTreeMap<String, json::Value>,
}

impl Config {
    pub fn new() -> Config {
        Default::default()
    }

    /// Load a flat option-name-to-value document; nested maps are allowed as
    /// values (labels, node selectors).
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)?;
        let values: BTreeMap<String, json::Value> = serde_yaml::from_str(&contents)?;
        debug!("loaded {} config entries", values.len());
        Ok(Config { values })
    }

    pub fn set<T: ConfigValue>(&mut self, opt: &impl ConfigKey<T>, value: T) -> &mut Config {
        self.values.insert(opt.key().into(), value.into_value());
        self
    }

    /// Stored value for `opt`, if any; a stored value of the wrong shape
    /// reads as unset.
    pub fn get<T: ConfigValue>(&self, opt: &ConfigOption<T>) -> Option<T> {
        self.values.get(opt.key).and_then(T::from_value)
    }

    pub fn get_required<T: ConfigValue>(&self, opt: &ConfigOption<T>) -> anyhow::Result<T> {
        self.get(opt).ok_or_else(|| ConfigError::missing_option(opt.key))
    }

    /// Stored value for `opt`, falling back to its declared default.
    pub fn get_or_default<T: ConfigValue>(&self, opt: &DefaultedConfigOption<T>) -> T {
        self.values.get(opt.key).and_then(T::from_value).unwrap_or_else(opt.default)
    }

    /// Set a string value under a computed key; the escape hatch for entries
    /// stored under a prefix rather than a declared option (e.g. forwarded
    /// environment variables).
    pub fn set_raw(&mut self, key: &str, value: &str) -> &mut Config {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(json::Value::as_str)
    }

    /// All string entries whose key starts with `prefix`, as (suffix, value)
    /// pairs in key order.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (String, String)> + 'a {
        self.values.iter().filter_map(move |(k, v)| {
            let suffix = k.strip_prefix(prefix)?;
            Some((suffix.to_string(), v.as_str()?.to_string()))
        })
    }
}
