use std::{env::args, fmt::Display, process::ExitCode};

use rand::{rngs::OsRng, TryRngCore};

const NUMBER_OF_BYTES: usize = 8;

fn bracketed<T: Display>(values: &[T]) -> String {
    let values: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", values.join(" "))
}

fn main() -> ExitCode {
    let mut buffer = [0_u8; NUMBER_OF_BYTES];
    if let Err(e) = OsRng.try_fill_bytes(&mut buffer) {
        println!("Error reading random: {}", e);
        return ExitCode::FAILURE;
    }
    let arguments: Vec<String> = args().collect();
    println!("Args: {}", bracketed(&arguments));
    println!("Random bytes ({}): {}", buffer.len(), bracketed(&buffer[..]));
    ExitCode::SUCCESS
}
