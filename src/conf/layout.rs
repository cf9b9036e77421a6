use serde::{Deserialize, Serialize};

/// Column widths of the rendered table. Values longer than their width are never truncated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    #[serde(default = "LayoutConfig::default_city")]
    pub city: usize,
    #[serde(default = "LayoutConfig::default_population")]
    pub population: usize,
    #[serde(default = "LayoutConfig::default_area")]
    pub area: usize,
    #[serde(default = "LayoutConfig::default_density")]
    pub density: usize,
    #[serde(default = "LayoutConfig::default_country")]
    pub country: usize,
    #[serde(default = "LayoutConfig::default_percentage")]
    pub percentage: usize,
}

impl LayoutConfig {
    fn default_city() -> usize {
        18
    }

    fn default_population() -> usize {
        10
    }

    fn default_area() -> usize {
        8
    }

    fn default_density() -> usize {
        8
    }

    fn default_country() -> usize {
        18
    }

    fn default_percentage() -> usize {
        6
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            city: Self::default_city(),
            population: Self::default_population(),
            area: Self::default_area(),
            density: Self::default_density(),
            country: Self::default_country(),
            percentage: Self::default_percentage(),
        }
    }
}
