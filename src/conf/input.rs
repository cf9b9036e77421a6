use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Skip blank lines between data rows. When false, a blank line is a parse error.
    #[serde(default = "InputConfig::default_skip_blank_lines")]
    pub skip_blank_lines: bool,
}

impl InputConfig {
    fn default_skip_blank_lines() -> bool {
        true
    }

    pub fn strict() -> Self {
        Self {
            skip_blank_lines: false,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            skip_blank_lines: Self::default_skip_blank_lines(),
        }
    }
}
