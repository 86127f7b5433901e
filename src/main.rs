//! CLI entry point for the profile picture generator

use clap::Parser;
use pfpgen::io::cli::{Cli, Generator};

fn main() -> pfpgen::Result<()> {
    let cli = Cli::parse();
    let generator = Generator::new(cli);
    generator.run()
}
