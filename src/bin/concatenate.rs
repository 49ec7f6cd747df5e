use std::{
    env::args_os,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{crate_version, error::ErrorKind, value_parser, Arg, ArgAction, Command};

fn create_command() -> Command {
    Command::new("concatenate")
        .version(crate_version!())
        .about("Copies files to standard output, one after another")
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("Files to print, in order")
                .required(true)
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf)),
        )
}

fn concatenate(file_path: &Path, output: &mut impl io::Write) -> Result<(), String> {
    let file = File::open(file_path)
        .map_err(|e| format!("Error opening {}: {}", file_path.display(), e))?;
    io::copy(&mut BufReader::new(file), output)
        .map_err(|e| format!("Error reading {}: {}", file_path.display(), e))?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = match create_command().try_get_matches_from(args_os()) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };
    let stdout = io::stdout();
    let mut output = stdout.lock();
    for file_path in matches.get_many::<PathBuf>("files").into_iter().flatten() {
        // A file that cannot be read is reported and skipped.
        if let Err(message) = concatenate(file_path, &mut output) {
            eprintln!("{}", message);
        }
    }
    ExitCode::SUCCESS
}
