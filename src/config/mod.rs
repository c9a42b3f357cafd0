//! Column configuration shared by the tree formatter and the regex fallback
//!
//! Every option is an independent column number or padding width with a
//! hard-coded default. Options arrive as a flat name to number mapping;
//! unknown or absent names always resolve to their default, never to an
//! error. Both rendering modes consume this one table so their column
//! contracts cannot drift apart.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::language::LoadingError;

/// Target columns for the aligned fields of each construct family, plus the
/// bit-range padding widths. All columns are zero-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Port declarations: direction keyword column.
    pub port_num1: usize,
    /// Port declarations: signed/unsigned keyword column.
    pub port_num2: usize,
    /// Port declarations: bit-range column.
    pub port_num3: usize,
    /// Port declarations: identifier column.
    pub port_num4: usize,
    /// Non-ANSI port declarations: terminator column.
    pub port_num5: usize,

    /// Net/reg/integer declarations: keyword column.
    pub signal_num1: usize,
    /// Net/reg/integer declarations: signed/unsigned keyword column.
    pub signal_num2: usize,
    /// Net/reg/integer declarations: bit-range column.
    pub signal_num3: usize,
    /// Net/reg/integer declarations: identifier column.
    pub signal_num4: usize,
    /// Net/reg/integer declarations: terminator column.
    pub signal_num5: usize,

    /// Parameter declarations: keyword column.
    pub param_num1: usize,
    /// Parameter declarations: identifier column.
    pub param_num2: usize,
    /// Parameter declarations: `=` column.
    pub param_num3: usize,
    /// Parameter declarations: terminator column.
    pub param_num4: usize,

    /// Continuous assigns: `assign` keyword column.
    pub assign_num1: usize,
    /// Continuous assigns: lvalue column.
    pub assign_num2: usize,

    /// Instantiations: parameter value opening paren column.
    pub inst_param_value_col: usize,
    /// Instantiations: port connection value opening paren column.
    pub inst_port_value_col: usize,

    /// Bit ranges: minimum width of the right-justified MSB field.
    pub upbound: usize,
    /// Bit ranges: minimum width of the left-justified LSB field.
    pub lowbound: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port_num1: 4,
            port_num2: 16,
            port_num3: 25,
            port_num4: 50,
            port_num5: 80,
            signal_num1: 4,
            signal_num2: 16,
            signal_num3: 25,
            signal_num4: 50,
            signal_num5: 80,
            param_num1: 4,
            param_num2: 25,
            param_num3: 50,
            param_num4: 80,
            assign_num1: 4,
            assign_num2: 12,
            inst_param_value_col: 60,
            inst_port_value_col: 60,
            upbound: 2,
            lowbound: 2,
        }
    }
}

impl Config {
    /// Build a Config from a flat option map. Absent names keep their
    /// defaults; negative values are clamped to zero.
    pub fn from_map(options: &HashMap<String, i64>) -> Config {
        let mut config = Config::default();

        let mut set = |name: &str, field: &mut usize| {
            if let Some(&value) = options.get(name) {
                *field = value.max(0) as usize;
            }
        };

        set("port_num1", &mut config.port_num1);
        set("port_num2", &mut config.port_num2);
        set("port_num3", &mut config.port_num3);
        set("port_num4", &mut config.port_num4);
        set("port_num5", &mut config.port_num5);
        set("signal_num1", &mut config.signal_num1);
        set("signal_num2", &mut config.signal_num2);
        set("signal_num3", &mut config.signal_num3);
        set("signal_num4", &mut config.signal_num4);
        set("signal_num5", &mut config.signal_num5);
        set("param_num1", &mut config.param_num1);
        set("param_num2", &mut config.param_num2);
        set("param_num3", &mut config.param_num3);
        set("param_num4", &mut config.param_num4);
        set("assign_num1", &mut config.assign_num1);
        set("assign_num2", &mut config.assign_num2);
        set("inst_param_value_col", &mut config.inst_param_value_col);
        set("inst_port_value_col", &mut config.inst_port_value_col);
        set("upbound", &mut config.upbound);
        set("lowbound", &mut config.lowbound);

        config
    }
}

/// Read a configuration file: a single flat JSON object of name to number.
/// Entries that are not numbers are ignored, as are unknown names.
pub fn load(filename: &Path) -> Result<Config, LoadingError<'_>> {
    let content = match std::fs::read_to_string(filename) {
        Ok(content) => content,
        Err(error) => {
            debug!(?error);
            return Err(LoadingError {
                problem: "Failed reading configuration".to_string(),
                details: error
                    .kind()
                    .to_string(),
                filename,
            });
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(error) => {
            debug!(?error);
            return Err(LoadingError {
                problem: "Failed parsing configuration".to_string(),
                details: error.to_string(),
                filename,
            });
        }
    };

    let mut options = HashMap::new();
    if let serde_json::Value::Object(object) = value {
        for (name, entry) in object {
            if let Some(number) = entry.as_i64() {
                options.insert(name, number);
            }
        }
    }

    Ok(Config::from_map(&options))
}
