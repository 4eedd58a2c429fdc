use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "indentc", about = "Front end for an indentation-sensitive scripting language")]
pub struct Cli {
    /// Source file to compile
    pub input: PathBuf,
    /// Print the token stream
    #[arg(long)]
    pub tokens: bool,
    /// Print the folded syntax tree
    #[arg(long)]
    pub ast: bool,
    /// Print how long each phase took
    #[arg(long)]
    pub timings: bool,
}
