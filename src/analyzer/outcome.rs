use crate::error::{ConfigError, ScanWarning};
use std::fmt;

/// A condition the core recovered from instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    Config(ConfigError),
    Scan(ScanWarning),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Config(e) => write!(f, "{}", e),
            Warning::Scan(e) => write!(f, "{}", e),
        }
    }
}

impl From<ConfigError> for Warning {
    fn from(err: ConfigError) -> Self {
        Warning::Config(err)
    }
}

impl From<ScanWarning> for Warning {
    fn from(err: ScanWarning) -> Self {
        Warning::Scan(err)
    }
}

/// Result of a fail-soft operation: always carries a usable value, plus
/// whatever was recovered from while producing it.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    value: T,
    warnings: Vec<Warning>,
}

impl<T> Outcome<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(value: T, warnings: Vec<Warning>) -> Self {
        Self { value, warnings }
    }

    pub fn degraded(value: T, warning: impl Into<Warning>) -> Self {
        Self {
            value,
            warnings: vec![warning.into()],
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<Warning>) {
        self.warnings.push(warning.into());
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, Vec<Warning>) {
        (self.value, self.warnings)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}
