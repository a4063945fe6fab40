//! Command-line argument parsing for dogdeck.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Browse breeds with the given options (default)
    Browse(BrowseOptions),
}

/// Options for a browse run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseOptions {
    /// Category to activate after the first resolve
    pub category: Option<String>,
    /// Breeds to toggle into the selection, in order
    pub toggles: Vec<String>,
    /// Also print each selected breed's sticky random image
    pub random: bool,
    /// Download resolved images through the image store and report sizes
    pub fetch: bool,
}

/// Parse command-line arguments and return the command to execute.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
pub fn parse_args<I>(args: I) -> Result<CliCommand, String>
where
    I: Iterator<Item = String>,
{
    let mut options = BrowseOptions::default();
    let mut args = args.skip(1); // Skip the program name
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--category" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--category requires a value".to_string())?;
                options.category = Some(value);
            }
            "--toggle" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--toggle requires a breed name".to_string())?;
                options.toggles.push(value);
            }
            "--random" => options.random = true,
            "--fetch" => options.fetch = true,
            other => return Err(format!("unrecognized argument: {other}")),
        }
    }
    Ok(CliCommand::Browse(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        std::iter::once("dogdeck".to_string())
            .chain(list.iter().map(|s| s.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_parse_no_args_is_default_browse() {
        let command = parse_args(args(&[])).unwrap();
        assert_eq!(command, CliCommand::Browse(BrowseOptions::default()));
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse_args(args(&["--version"])).unwrap(), CliCommand::Version);
        assert_eq!(parse_args(args(&["-V"])).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_category_and_toggles() {
        let command = parse_args(args(&[
            "--category", "s-z", "--toggle", "terrier toy", "--toggle", "shiba",
        ]))
        .unwrap();
        let CliCommand::Browse(options) = command else {
            panic!("expected browse command");
        };
        assert_eq!(options.category.as_deref(), Some("s-z"));
        assert_eq!(options.toggles, vec!["terrier toy", "shiba"]);
    }

    #[test]
    fn test_parse_flags() {
        let command = parse_args(args(&["--random", "--fetch"])).unwrap();
        let CliCommand::Browse(options) = command else {
            panic!("expected browse command");
        };
        assert!(options.random);
        assert!(options.fetch);
    }

    #[test]
    fn test_parse_category_without_value_fails() {
        assert!(parse_args(args(&["--category"])).is_err());
    }

    #[test]
    fn test_parse_unknown_argument_fails() {
        assert!(parse_args(args(&["--bogus"])).is_err());
    }
}
