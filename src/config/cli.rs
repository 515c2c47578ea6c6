//! Positional command line of the `edge_detect` binary.
//!
//! ```text
//! edge_detect <input> <output>                                   Canny(1.0, 50, 20)
//! edge_detect <input> <output> --sobel|--log|--scharr|--cross [threshold]
//! edge_detect <input> <output> --blur [weight]
//! edge_detect <input> <output> --canny [sigma t1 t2]
//! edge_detect --config <run.json>
//! ```
use super::run::{load_config, RunConfig};
use crate::detector::{Operation, DEFAULT_BLUR_WEIGHT, DEFAULT_LOG_SIGMA};
use log::warn;
use std::path::Path;

const MAX_BLUR_WEIGHT: f32 = 100.0;

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <input> <output> [--sobel|--log|--scharr|--cross [threshold:0-255]] \
         [--blur [weight:0.0-100.0]] [--canny [sigma t1 t2]]\n       \
         {program} --config <run.json>"
    )
}

/// Turn the arguments following the program name into a [`RunConfig`].
pub fn parse_args(program: &str, args: &[String]) -> Result<RunConfig, String> {
    if args.first().map(String::as_str) == Some("--config") {
        let path = args.get(1).ok_or_else(|| usage(program))?;
        return load_config(Path::new(path));
    }
    let [input, output, rest @ ..] = args else {
        return Err(usage(program));
    };
    let operation = match rest {
        [] => Operation::default(),
        [flag, values @ ..] => parse_operation(flag, values)?,
    };
    Ok(RunConfig::new(input, output, operation))
}

fn parse_operation(flag: &str, values: &[String]) -> Result<Operation, String> {
    let operation = match flag {
        "--sobel" => Operation::Sobel {
            threshold: parse_threshold(values.first())?,
        },
        "--scharr" => Operation::Scharr {
            threshold: parse_threshold(values.first())?,
        },
        "--cross" => Operation::Cross {
            threshold: parse_threshold(values.first())?,
        },
        "--log" => Operation::Log {
            sigma: DEFAULT_LOG_SIGMA,
            threshold: parse_threshold(values.first())?,
        },
        "--blur" => Operation::Blur {
            weight: parse_blur_weight(values.first())?,
        },
        "--canny" => return parse_canny(values),
        other => return Err(format!("Unknown operation '{other}'")),
    };
    if values.len() > 1 {
        warn!("Ignoring extra arguments after {flag}: {:?}", &values[1..]);
    }
    Ok(operation)
}

/// Integer threshold clamped to 0..=255; absent or 0 means no threshold.
fn parse_threshold(arg: Option<&String>) -> Result<Option<u8>, String> {
    let Some(arg) = arg else {
        return Ok(None);
    };
    let value: i64 = arg
        .trim()
        .parse()
        .map_err(|_| format!("Failed to parse 'threshold' argument: '{arg}'"))?;
    let value = value.clamp(0, 255) as u8;
    Ok((value > 0).then_some(value))
}

fn parse_blur_weight(arg: Option<&String>) -> Result<f32, String> {
    let Some(arg) = arg else {
        return Ok(DEFAULT_BLUR_WEIGHT);
    };
    let weight: f32 = arg
        .trim()
        .parse()
        .map_err(|_| format!("Failed to parse 'weight' argument: '{arg}'"))?;
    if !(0.0..=MAX_BLUR_WEIGHT).contains(&weight) {
        return Err(format!(
            "Blur weight {weight} outside 0.0-{MAX_BLUR_WEIGHT:.1}"
        ));
    }
    Ok(weight)
}

fn parse_canny(values: &[String]) -> Result<Operation, String> {
    match values {
        [] => Ok(Operation::default()),
        [sigma, t1, t2] => Ok(Operation::Canny {
            sigma: sigma
                .trim()
                .parse()
                .map_err(|_| format!("Failed to parse 'sigma' argument: '{sigma}'"))?,
            t1: parse_byte("t1", t1)?,
            t2: parse_byte("t2", t2)?,
        }),
        _ => Err(format!(
            "--canny takes either no arguments or exactly 3 (sigma t1 t2), got {}",
            values.len()
        )),
    }
}

fn parse_byte(name: &str, arg: &str) -> Result<u8, String> {
    arg.trim()
        .parse()
        .map_err(|_| format!("Failed to parse '{name}' argument: '{arg}' (expected 0-255)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn op(list: &[&str]) -> Result<Operation, String> {
        parse_args("edge_detect", &args(list)).map(|cfg| cfg.operation)
    }

    #[test]
    fn two_positionals_default_to_canny() {
        let cfg = parse_args("edge_detect", &args(&["in.png", "out.png"])).unwrap();
        assert_eq!(cfg.input, Path::new("in.png"));
        assert_eq!(cfg.output, Path::new("out.png"));
        assert_eq!(cfg.operation, Operation::default());
        assert!(cfg.report_json.is_none());
    }

    #[test]
    fn too_few_arguments_print_usage() {
        let err = parse_args("edge_detect", &args(&["in.png"])).unwrap_err();
        assert!(err.starts_with("Usage: edge_detect"), "{err}");
        assert!(parse_args("edge_detect", &[]).is_err());
        assert!(parse_args("edge_detect", &args(&["--config"])).is_err());
    }

    #[test]
    fn threshold_is_clamped_and_zero_disables_it() {
        assert_eq!(
            op(&["a", "b", "--sobel", "300"]),
            Ok(Operation::Sobel {
                threshold: Some(255)
            })
        );
        assert_eq!(
            op(&["a", "b", "--scharr", "-4"]),
            Ok(Operation::Scharr { threshold: None })
        );
        assert_eq!(
            op(&["a", "b", "--cross"]),
            Ok(Operation::Cross { threshold: None })
        );
        assert_eq!(
            op(&["a", "b", "--log", "12"]),
            Ok(Operation::Log {
                sigma: 1.0,
                threshold: Some(12)
            })
        );
        assert!(op(&["a", "b", "--sobel", "abc"]).is_err());
    }

    #[test]
    fn blur_weight_defaults_and_range() {
        assert_eq!(op(&["a", "b", "--blur"]), Ok(Operation::Blur { weight: 1.0 }));
        assert_eq!(
            op(&["a", "b", "--blur", "2.5"]),
            Ok(Operation::Blur { weight: 2.5 })
        );
        assert!(op(&["a", "b", "--blur", "100.5"]).is_err());
        assert!(op(&["a", "b", "--blur", "-1"]).is_err());
        assert!(op(&["a", "b", "--blur", "soft"]).is_err());
    }

    #[test]
    fn canny_takes_all_three_or_none() {
        assert_eq!(op(&["a", "b", "--canny"]), Ok(Operation::default()));
        assert_eq!(
            op(&["a", "b", "--canny", "1.4", "80", "30"]),
            Ok(Operation::Canny {
                sigma: 1.4,
                t1: 80,
                t2: 30
            })
        );
        assert!(op(&["a", "b", "--canny", "1.4"]).is_err());
        assert!(op(&["a", "b", "--canny", "1.4", "80"]).is_err());
        assert!(op(&["a", "b", "--canny", "1.4", "80", "30", "9"]).is_err());
        assert!(op(&["a", "b", "--canny", "1.4", "300", "30"]).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = op(&["a", "b", "--prewitt"]).unwrap_err();
        assert!(err.contains("--prewitt"));
    }
}
