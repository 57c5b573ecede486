//! Command-line argument parsing for SleepTotals

/// Parse command line arguments
#[derive(Debug, Default)]
pub struct Args {
    pub input: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
    pub validate: bool,
    pub help: bool,
    /// Flags that expected a value but reached the end of the arguments
    pub missing_values: Vec<String>,
}

pub fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    parse_args_from(&args)
}

/// Parse from an explicit argument list; the first element is the program name
pub fn parse_args_from(args: &[String]) -> Args {
    let mut result = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" | "-i" => {
                if i + 1 < args.len() {
                    i += 1;
                    result.input = Some(args[i].clone());
                } else {
                    result.missing_values.push(args[i].clone());
                }
            }
            "--timezone" => {
                if i + 1 < args.len() {
                    i += 1;
                    result.timezone = Some(args[i].clone());
                } else {
                    result.missing_values.push(args[i].clone());
                }
            }
            "--date-format" => {
                if i + 1 < args.len() {
                    i += 1;
                    result.date_format = Some(args[i].clone());
                } else {
                    result.missing_values.push(args[i].clone());
                }
            }
            "--validate" => result.validate = true,
            "--help" | "-h" => result.help = true,
            _ => {}
        }
        i += 1;
    }

    result
}

pub fn print_help() {
    println!("SleepTotals - Daily Sleep Time Report\n");
    println!("USAGE:");
    println!("    sleeptotals [OPTIONS]\n");
    println!("OPTIONS:");
    println!("    --input, -i FILE        Read interval records from FILE (default: stdin, or '-')");
    println!("    --timezone TZ           Timezone for day bucketing ('local' or IANA name)");
    println!("    --date-format FMT       strftime pattern for report dates (default: %d %b %Y)");
    println!("    --validate              Validate configuration and exit");
    println!("    --help, -h              Show this help message\n");
    println!("INPUT:");
    println!("    JSON array of {{\"start\": RFC3339, \"end\": RFC3339, \"state\": \"InBed\"|\"Asleep\"|\"Awake\"}}\n");
    println!("ENVIRONMENT:");
    println!("    SLEEP_TIMEZONE, SLEEP_DATE_FORMAT, SLEEP_MAX_RECORDS (a .env file is also read)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("sleeptotals")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args_default() {
        let result = parse_args_from(&args(&[]));
        assert!(result.input.is_none());
        assert!(result.timezone.is_none());
        assert!(result.date_format.is_none());
        assert!(!result.validate);
        assert!(!result.help);
        assert!(result.missing_values.is_empty());
    }

    #[test]
    fn test_parse_args_input() {
        let result = parse_args_from(&args(&["--input", "sleep.json"]));
        assert_eq!(result.input, Some("sleep.json".to_string()));

        let result = parse_args_from(&args(&["-i", "-"]));
        assert_eq!(result.input, Some("-".to_string()));
    }

    #[test]
    fn test_parse_args_input_missing_value() {
        let result = parse_args_from(&args(&["--input"]));
        assert!(result.input.is_none());
        assert_eq!(result.missing_values, vec!["--input".to_string()]);
    }

    #[test]
    fn test_parse_args_trailing_flags_without_values() {
        let result = parse_args_from(&args(&["--timezone", "UTC", "--date-format"]));
        assert_eq!(result.timezone, Some("UTC".to_string()));
        assert!(result.date_format.is_none());
        assert_eq!(result.missing_values, vec!["--date-format".to_string()]);

        let result = parse_args_from(&args(&["--validate", "--timezone"]));
        assert_eq!(result.missing_values, vec!["--timezone".to_string()]);
    }

    #[test]
    fn test_parse_args_complete_flags_report_nothing_missing() {
        let result = parse_args_from(&args(&["--input", "night.json", "--timezone", "UTC"]));
        assert!(result.missing_values.is_empty());
    }

    #[test]
    fn test_parse_args_validate() {
        let result = parse_args_from(&args(&["--validate"]));
        assert!(result.validate);
    }

    #[test]
    fn test_parse_args_help() {
        assert!(parse_args_from(&args(&["--help"])).help);
        assert!(parse_args_from(&args(&["-h"])).help);
    }

    #[test]
    fn test_parse_args_multiple_flags() {
        let result = parse_args_from(&args(&[
            "--timezone",
            "Europe/Paris",
            "--date-format",
            "%Y-%m-%d",
            "--input",
            "night.json",
        ]));
        assert_eq!(result.timezone, Some("Europe/Paris".to_string()));
        assert_eq!(result.date_format, Some("%Y-%m-%d".to_string()));
        assert_eq!(result.input, Some("night.json".to_string()));
    }

    #[test]
    fn test_parse_args_ignores_unknown() {
        let result = parse_args_from(&args(&["--verbose", "--validate"]));
        assert!(result.validate);
    }
}
