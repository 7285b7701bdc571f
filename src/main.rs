//! pmsprite - Command-line tool for turning ASCII-art sprites into assembler data

use std::process::ExitCode;

use pmsprite::cli;

fn main() -> ExitCode {
    cli::run()
}
