use serde::{Deserialize, Serialize};

/// One selectable city: `label` is what the user sees, `value` is the query
/// string sent to the provider. Supplied by the caller (config or the
/// built-in list) and immutable for the session; duplicates are the caller's
/// responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityOption {
    pub label: String,
    pub value: String,
}

impl CityOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into() }
    }

    /// Case-insensitive substring match against the label.
    pub fn matches(&self, input: &str) -> bool {
        self.label.to_lowercase().contains(&input.to_lowercase())
    }
}

impl std::fmt::Display for CityOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// All options whose label contains `input` (case-insensitive), in input
/// order. Empty `input` keeps the full list.
pub fn filter_cities(options: &[CityOption], input: &str) -> Vec<CityOption> {
    options.iter().filter(|c| c.matches(input)).cloned().collect()
}

/// Fallback list used when the config does not carry one.
pub fn default_cities() -> Vec<CityOption> {
    vec![
        CityOption::new("London", "London,GB"),
        CityOption::new("Kyiv", "Kyiv,UA"),
        CityOption::new("New York", "New York,US"),
        CityOption::new("Tokyo", "Tokyo,JP"),
        CityOption::new("Paris", "Paris,FR"),
        CityOption::new("Berlin", "Berlin,DE"),
        CityOption::new("Sydney", "Sydney,AU"),
        CityOption::new("Cape Town", "Cape Town,ZA"),
    ]
}
