//! Terminal rendering of a weather record: the icon glyph, the floored
//! temperature, the resolved location, then humidity and wind.

use skycast_core::WeatherRecord;

pub fn render(record: &WeatherRecord) -> String {
    format!(
        "\n  {}  {}\u{b0}C\n  {}\n\n  humidity {}%   wind {} m/s",
        record.icon.glyph(),
        record.temperature_c,
        record.location,
        record.humidity_pct,
        record.wind_speed_mps,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skycast_core::Icon;

    #[test]
    fn panel_shows_every_field() {
        let record = WeatherRecord {
            temperature_c: 21,
            location: "Paris".into(),
            humidity_pct: 64,
            wind_speed_mps: 3.6,
            icon: Icon::Clouds,
        };

        let panel = render(&record);
        assert!(panel.contains("21\u{b0}C"));
        assert!(panel.contains("Paris"));
        assert!(panel.contains("humidity 64%"));
        assert!(panel.contains("wind 3.6 m/s"));
        assert!(panel.contains(Icon::Clouds.glyph()));
    }

    #[test]
    fn negative_temperature_renders_with_sign() {
        let record = WeatherRecord {
            temperature_c: -1,
            location: "Oslo".into(),
            humidity_pct: 80,
            wind_speed_mps: 1.2,
            icon: Icon::Snow,
        };

        assert!(render(&record).contains("-1\u{b0}C"));
    }
}
