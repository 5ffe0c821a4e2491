use web_sys::Element;
use wof_shared::constants::DEFAULT_PRIZE_URL;
use wof_shared::shared_wheel_game::SpinTimings;

pub const MOUNT_ELEMENT_ID: &str = "wheel-of-fortune";

const PRIZE_URL_ATTR: &str = "data-prize-url";
const RESOLVE_DELAY_ATTR: &str = "data-resolve-delay-ms";
const REVEAL_DELAY_ATTR: &str = "data-reveal-delay-ms";

/// Per-widget settings, read from `data-*` attributes on the host element.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub prize_url: String,
    pub timings: SpinTimings,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            prize_url: DEFAULT_PRIZE_URL.to_string(),
            timings: SpinTimings::default(),
        }
    }
}

impl WidgetConfig {
    pub fn from_element(element: &Element) -> Self {
        Self::from_attributes(|name| element.get_attribute(name))
    }

    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = SpinTimings::default();
        let resolve = parse_delay(RESOLVE_DELAY_ATTR, attr(RESOLVE_DELAY_ATTR), defaults.resolve_delay_ms);
        let reveal = parse_delay(REVEAL_DELAY_ATTR, attr(REVEAL_DELAY_ATTR), defaults.reveal_delay_ms);
        if resolve > reveal {
            log::warn!(
                "{} ({}) is later than {} ({}), resolving at reveal time",
                RESOLVE_DELAY_ATTR, resolve, REVEAL_DELAY_ATTR, reveal
            );
        }

        let prize_url = attr(PRIZE_URL_ATTR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_PRIZE_URL.to_string());

        Self {
            prize_url,
            timings: SpinTimings::new(resolve, reveal),
        }
    }
}

fn parse_delay(name: &str, raw: Option<String>, default: u32) -> u32 {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<u32>() {
        Ok(ms) => ms,
        Err(_) => {
            log::warn!("ignoring {}=\"{}\", using {}ms", name, raw, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> WidgetConfig {
        let attrs: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WidgetConfig::from_attributes(|name| attrs.get(name).cloned())
    }

    #[test]
    fn test_defaults_without_attributes() {
        assert_eq!(config_from(&[]), WidgetConfig::default());
    }

    #[test]
    fn test_reads_attributes() {
        let config = config_from(&[
            ("data-prize-url", "/api/prize.json"),
            ("data-resolve-delay-ms", "500"),
            ("data-reveal-delay-ms", " 1500 "),
        ]);
        assert_eq!(config.prize_url, "/api/prize.json");
        assert_eq!(config.timings, SpinTimings::new(500, 1500));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = config_from(&[
            ("data-prize-url", "   "),
            ("data-resolve-delay-ms", "soon"),
            ("data-reveal-delay-ms", "-1"),
        ]);
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_resolve_never_after_reveal() {
        let config = config_from(&[("data-resolve-delay-ms", "5000")]);
        assert_eq!(config.timings.resolve_delay_ms, config.timings.reveal_delay_ms);
    }
}
