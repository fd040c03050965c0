use serde::{Deserialize, Serialize};

/// Temperature display policy. The provider delivers raw Kelvin; the caller
/// picks the scale applied at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TempScale {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempScale {
    pub fn as_str(&self) -> &'static str {
        match self {
            TempScale::Celsius => "celsius",
            TempScale::Fahrenheit => "fahrenheit",
            TempScale::Kelvin => "kelvin",
        }
    }

    /// Convert a raw provider temperature (Kelvin) into this scale.
    pub fn from_kelvin(&self, raw: f64) -> f64 {
        match self {
            TempScale::Celsius => raw - 273.15,
            TempScale::Fahrenheit => (raw - 273.15) * 9.0 / 5.0 + 32.0,
            TempScale::Kelvin => raw,
        }
    }
}

impl std::fmt::Display for TempScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TempScale {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "celsius" | "c" => Ok(TempScale::Celsius),
            "fahrenheit" | "f" => Ok(TempScale::Fahrenheit),
            "kelvin" | "k" => Ok(TempScale::Kelvin),
            _ => Err(anyhow::anyhow!(
                "Unknown temperature scale '{value}'. Supported scales: celsius, fahrenheit, kelvin."
            )),
        }
    }
}

/// Current weather for one city, in the provider's response shape.
///
/// `name` is defaulted because unexpected 2xx payloads may omit it; the
/// renderer treats an empty name as "nothing to show". Extra provider fields
/// (coordinates, visibility, ...) are ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub name: String,
    pub main: Thermals,
    #[serde(default)]
    pub weather: Vec<ConditionTag>,
    pub wind: Wind,
    pub sys: SunTimes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thermals {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub pressure: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionTag {
    pub main: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Sunrise and sunset as unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: i64,
    pub sunset: i64,
}

impl CurrentConditions {
    /// Leading condition entry, if the provider sent one.
    pub fn condition(&self) -> Option<&ConditionTag> {
        self.weather.first()
    }

    /// Provider-hosted icon image for the leading condition, composed
    /// directly from the icon code.
    pub fn icon_url(&self, icon_base: &str) -> Option<String> {
        self.condition().map(|c| {
            format!("{}/img/wn/{}@2x.png", icon_base.trim_end_matches('/'), c.icon)
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_conditions(name: &str) -> CurrentConditions {
    CurrentConditions {
        name: name.to_string(),
        main: Thermals {
            temp: 290.15,
            temp_min: 288.15,
            temp_max: 292.15,
            feels_like: 289.65,
            humidity: 72,
            pressure: 1012,
        },
        weather: vec![ConditionTag { main: "Clouds".to_string(), icon: "04d".to_string() }],
        wind: Wind { speed: 3.6 },
        sys: SunTimes { sunrise: 1_700_000_000, sunset: 1_700_036_400 },
    }
}
