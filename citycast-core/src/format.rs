use chrono::{DateTime, FixedOffset, Timelike};

use crate::{
    model::{CurrentConditions, TempScale},
    view::ViewState,
};

/// Line shown while a fetch is in flight.
pub const FETCHING_LINE: &str = "◌ fetching current weather";

/// Clock time for a unix timestamp in the given UTC offset: hours unpadded
/// (0-23), minutes zero-padded to two digits.
pub fn clock_time(unix: i64, offset: FixedOffset) -> String {
    let utc = DateTime::from_timestamp(unix, 0).unwrap_or(DateTime::UNIX_EPOCH);
    let local = utc.with_timezone(&offset);

    format!("{}:{:02}", local.hour(), local.minute())
}

/// Terminal glyph for an OpenWeather icon code ("01d", "10n", ...). Day and
/// night variants share a glyph; unknown codes fall back to a neutral dot.
pub fn condition_glyph(icon: &str) -> &'static str {
    match icon.get(..2).unwrap_or("") {
        "01" => "☀",
        "02" => "⛅",
        "03" | "04" => "☁",
        "09" => "🌧",
        "10" => "🌦",
        "11" => "⛈",
        "13" => "❄",
        "50" => "🌫",
        _ => "●",
    }
}

/// Produce the visual output for a view state. Pure function of its
/// arguments: `Loading` yields the in-flight line, a decoded body with a
/// city name yields the weather card, everything else yields nothing
/// (failures are logged where they happen, never rendered).
pub fn render(state: &ViewState, scale: TempScale, offset: FixedOffset) -> String {
    match state {
        ViewState::Loading => format!("{FETCHING_LINE}\n"),
        ViewState::Failed(_) => String::new(),
        ViewState::Ready(conditions) if conditions.name.is_empty() => String::new(),
        ViewState::Ready(conditions) => render_card(conditions, scale, offset),
    }
}

fn render_card(conditions: &CurrentConditions, scale: TempScale, offset: FixedOffset) -> String {
    let (label, icon) = conditions
        .condition()
        .map(|c| (c.main.as_str(), c.icon.as_str()))
        .unwrap_or(("Unknown", ""));

    let thermals = &conditions.main;
    let mut card = String::new();

    card.push_str(&format!("{}\n", conditions.name));
    card.push_str(&format!(
        "  {} {}  {:.0}°\n",
        condition_glyph(icon),
        label,
        scale.from_kelvin(thermals.temp),
    ));
    card.push_str(&format!(
        "  ↑ {:.0}°  ↓ {:.0}°  ≈ {:.0}°\n",
        scale.from_kelvin(thermals.temp_max),
        scale.from_kelvin(thermals.temp_min),
        scale.from_kelvin(thermals.feels_like),
    ));
    card.push_str(&format!(
        "  💨 {} m/s  💧 {}%  ⇩ {} hPa\n",
        conditions.wind.speed, thermals.humidity, thermals.pressure,
    ));
    card.push_str(&format!(
        "  🌅 {}  🌇 {}\n",
        clock_time(conditions.sys.sunrise, offset),
        clock_time(conditions.sys.sunset, offset),
    ));

    card
}
