mod expand;
mod match_lines;

/// Subcommands for grokpile
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Match input lines against a pile of patterns, writing JSON lines.
    Match(match_lines::MatchArgs),

    /// Print the expanded regex of a pattern.
    Expand(expand::ExpandArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Match(cmd) => cmd.run(),
            Commands::Expand(cmd) => cmd.run(),
        }
    }
}
