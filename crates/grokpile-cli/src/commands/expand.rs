use std::io::Write;

use crate::{
    input_output::OutputArgs,
    logging::LogArgs,
    macro_args::{MacroArgs, MatcherArgs},
};

/// Args for the expand command.
#[derive(clap::Args, Debug)]
pub struct ExpandArgs {
    /// The pattern to expand.
    #[arg(long)]
    pattern: String,

    /// Also list the capture names, one per line, in group order.
    #[arg(long)]
    names: bool,

    #[command(flatten)]
    macros: MacroArgs,

    #[command(flatten)]
    matcher: MatcherArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    pub logging: LogArgs,
}

impl ExpandArgs {
    /// Run the expand command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.init()?;

        let registry = self.macros.build_registry()?;
        let matcher = self.matcher.options().compile(&self.pattern, &registry)?;

        let mut writer = self.output.open_writer()?;
        writeln!(writer, "{}", matcher.expanded_pattern())?;

        if self.names {
            for name in matcher.capture_names() {
                writeln!(writer, "{:?}\t{}", name.kind(), name.key())?;
            }
        }
        writer.flush()?;

        Ok(())
    }
}
