//! Config overrides from a page URL.
//!
//! Supports `?history=5&deactivate=1&zoom_step=1.5` in either the query
//! string or the hash fragment. Unknown keys are ignored.

use colorstudio_core::{Rgb, StudioConfig, StudioResult};

/// Split `?a=1&b=2` (or `#a=1&b=2`) into key/value pairs. Empty values are
/// dropped.
pub fn parse_params(s: &str) -> Vec<(&str, &str)> {
    let s = s.trim_start_matches(['?', '#']);

    s.split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if !value.is_empty() => Some((key, value)),
                _ => None,
            }
        })
        .collect()
}

/// Apply URL overrides to `base`. Later occurrences win; malformed values are
/// logged and skipped. The result is validated.
pub fn apply_params(mut base: StudioConfig, s: &str) -> StudioResult<StudioConfig> {
    for (key, value) in parse_params(s) {
        let applied = match key {
            "history" => value.parse::<usize>().map(|n| base.history_len = n).is_ok(),
            "deactivate" => parse_flag(value).map(|b| base.deactivate_after_pick = b).is_some(),
            "zoom_step" => value.parse::<f64>().map(|z| base.zoom_step = z).is_ok(),
            "min_zoom" => value.parse::<f64>().map(|z| base.min_zoom = z).is_ok(),
            "max_zoom" => value.parse::<f64>().map(|z| base.max_zoom = z).is_ok(),
            // `#` would start the fragment, so the color comes without it.
            "color" => Rgb::from_hex(&format!("#{value}"))
                .map(|c| base.initial_color = c)
                .is_ok(),
            _ => true,
        };
        if !applied {
            log::warn!("Ignoring URL parameter {}={}", key, value);
        }
    }

    base.validate()?;
    Ok(base)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
