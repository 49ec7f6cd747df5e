use crate::{Arguments, Error, DEFAULT_QUALITY};
use clap::{
    arg, builder::BoolishValueParser, crate_authors, crate_description, crate_name,
    crate_version, error::ErrorKind, value_parser, Arg, ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

const LONG_FLAGS: [&str; 5] = ["input", "output", "quality", "info", "help"];

const AFTER_HELP: &str = "\
Supported formats: JPEG, PNG

Examples:
  gray-image -input photo.jpg -output gray.jpg
  gray-image -input image.png -output result.png -info
  gray-image -input photo.jpg -output low_quality.jpg -quality 50";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    /// Help and version requests exit the process with status 0; every other parse failure
    /// is returned. Help goes to stderr like the rest of the usage text.
    pub fn parse<I, T>(&mut self, itr: I) -> crate::Result<Arguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let itr = normalize_single_dash_flags(itr);
        match self.command.try_get_matches_from_mut(itr) {
            Ok(matches) => Ok(Self::extract_arguments(&matches)),
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                eprint!("{}", self.render_help());
                std::process::exit(0)
            }
            Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
            Err(e) => {
                let message = e.to_string();
                let message = message.trim_start_matches("error: ").to_owned();
                Err(Error::InvalidArguments(message))
            }
        }
    }

    pub fn render_help(&mut self) -> String {
        self.command.render_help().to_string()
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_quality_argument(command);
        Self::register_info_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_quality_argument(command: Command) -> Command {
        command.arg(Self::create_quality_argument())
    }

    fn register_info_argument(command: Command) -> Command {
        command.arg(Self::create_info_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .after_help(AFTER_HELP)
    }

    // Presence is checked during validation so that a missing path exits with status 1.
    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .long("input")
            .value_name("PATH")
            .help("Input image file (required)")
            .allow_hyphen_values(true)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .long("output")
            .value_name("PATH")
            .help("Output image file, .jpg, .jpeg or .png (required)")
            .allow_hyphen_values(true)
            .value_parser(value_parser!(PathBuf))
    }

    fn create_quality_argument() -> Arg {
        arg!(quality: --quality <QUALITY> "JPEG quality (1-100)")
            .default_value(DEFAULT_QUALITY.to_string())
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
    }

    // A bare `--info` means true; an explicit value must be attached with `=`.
    fn create_info_argument() -> Arg {
        arg!(info: --info "Show image information instead of converting")
            .action(ArgAction::Set)
            .num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
            .default_value("false")
            .value_parser(BoolishValueParser::new())
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments::new(
            Self::extract_input_file_argument(matches),
            Self::extract_output_file_argument(matches),
            Self::extract_quality_argument(matches),
            Self::extract_info_argument(matches),
        )
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("input_file").cloned()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("output_file").cloned()
    }

    fn extract_quality_argument(matches: &ArgMatches) -> i64 {
        matches
            .get_one::<i64>("quality")
            .copied()
            .unwrap_or(DEFAULT_QUALITY)
    }

    fn extract_info_argument(matches: &ArgMatches) -> bool {
        matches.get_one::<bool>("info").copied().unwrap_or(false)
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrites `-input x` and `-quality=50` style flags into their `--` form.
fn normalize_single_dash_flags<I, T>(itr: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    itr.into_iter()
        .map(Into::into)
        .map(|argument: OsString| {
            let normalized = argument
                .to_str()
                .filter(|text| is_single_dash_long_flag(text))
                .map(|text| OsString::from(format!("-{}", text)));
            normalized.unwrap_or(argument)
        })
        .collect()
}

fn is_single_dash_long_flag(text: &str) -> bool {
    let Some(flag) = text.strip_prefix('-') else {
        return false;
    };
    if flag.starts_with('-') {
        return false;
    }
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
