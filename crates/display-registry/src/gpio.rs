use crate::{GpioBinding, LoadError, Result};

/// Maximum number of pin overrides accepted in one request.
pub const MAX_GPIOS: usize = 32;

/// Symbolic pin names longer than this are truncated.
pub const MAX_GPIO_NAME_LEN: usize = 32;

/// Parse a list of `"<name>:<number>"` pin specs into bindings, preserving
/// order. All-or-nothing: any malformed entry fails the whole list.
pub fn parse_gpio_specs(specs: &[String]) -> Result<Vec<GpioBinding>> {
    if specs.len() > MAX_GPIOS {
        return Err(LoadError::InvalidParameter(format!(
            "gpios: exceeded max list size: {MAX_GPIOS}"
        )));
    }
    let mut bindings = Vec::with_capacity(specs.len());
    for raw in specs {
        let (name, number) = raw.split_once(':').ok_or_else(|| {
            LoadError::InvalidParameter(format!("gpios: missing ':' in entry: {raw}"))
        })?;
        if name.is_empty() || number.is_empty() {
            return Err(LoadError::InvalidParameter(format!(
                "gpios: empty name or number in entry: {raw}"
            )));
        }
        let pin: i32 = number.parse().map_err(|_| {
            LoadError::InvalidParameter(format!("gpios: could not parse number in entry: {raw}"))
        })?;
        bindings.push(GpioBinding {
            name: name.chars().take(MAX_GPIO_NAME_LEN).collect(),
            pin,
        });
    }
    Ok(bindings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_preserves_order() {
        let bindings = parse_gpio_specs(&specs(&["reset:25", "dc:24", "led:23"])).unwrap();
        let names: Vec<&str> = bindings.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["reset", "dc", "led"]);
        assert_eq!(bindings[0].pin, 25);
        assert_eq!(bindings[2].pin, 23);
    }

    #[test]
    fn test_roundtrip_via_display() {
        let raw = specs(&["reset:25", "dc:24", "led:23", "cs:-1"]);
        let bindings = parse_gpio_specs(&raw).unwrap();
        let back: Vec<String> = bindings.iter().map(|b| b.to_string()).collect();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_missing_separator_aborts_whole_parse() {
        let err = parse_gpio_specs(&specs(&["reset:25", "dc:24", "oops"])).unwrap_err();
        assert!(matches!(err, LoadError::InvalidParameter(_)));
    }

    #[test]
    fn test_empty_halves_rejected() {
        assert!(parse_gpio_specs(&specs(&[":25"])).is_err());
        assert!(parse_gpio_specs(&specs(&["reset:"])).is_err());
    }

    #[test]
    fn test_non_numeric_pin_rejected() {
        let err = parse_gpio_specs(&specs(&["reset:abc"])).unwrap_err();
        assert!(matches!(err, LoadError::InvalidParameter(_)));
    }

    #[test]
    fn test_over_limit_rejected() {
        let raw: Vec<String> = (0..=MAX_GPIOS).map(|i| format!("pin{i}:{i}")).collect();
        assert!(parse_gpio_specs(&raw).is_err());
    }

    #[test]
    fn test_long_name_truncated() {
        let long = "x".repeat(MAX_GPIO_NAME_LEN + 10);
        let bindings = parse_gpio_specs(&[format!("{long}:1")]).unwrap();
        assert_eq!(bindings[0].name.len(), MAX_GPIO_NAME_LEN);
    }
}
