use std::{env::args_os, process::ExitCode};

use gray_image::{convert_to_grayscale, CLIParser, Outcome};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let result = cli_parser
        .parse(args_os())
        .and_then(|arguments| convert_to_grayscale(&arguments));
    match result {
        Ok(Outcome::InfoReported(info)) => {
            println!("{}", info);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Saved(output_file)) => {
            println!("Grayscale image saved to: {}", output_file.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_missing_path() {
                eprintln!();
                eprintln!("{}", cli_parser.render_help());
            }
            ExitCode::FAILURE
        }
    }
}
