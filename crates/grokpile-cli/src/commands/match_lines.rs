use std::io::{BufRead, Write};

use grokpile::{MatchResult, MatcherPile};
use serde_json::{Map, Value};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    macro_args::{MacroArgs, MatcherArgs},
};

/// Args for the match command.
#[derive(clap::Args, Debug)]
pub struct MatchArgs {
    /// Patterns to try, in order; the first match wins.
    #[arg(long = "pattern", required = true)]
    patterns: Vec<String>,

    /// Emit every capture as a list (including bare macro references),
    /// instead of one value per explicitly named capture.
    #[arg(long)]
    all: bool,

    #[command(flatten)]
    macros: MacroArgs,

    #[command(flatten)]
    matcher: MatcherArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    pub logging: LogArgs,
}

impl MatchArgs {
    /// Run the match command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.init()?;

        let mut pile =
            MatcherPile::from(self.macros.build_registry()?).with_options(self.matcher.options());
        for pattern in &self.patterns {
            let matcher = pile.add_pattern(pattern)?;
            log::info!(
                "pattern {:?}: {} captures{}",
                matcher.pattern(),
                matcher.capture_count(),
                if matcher.is_fancy() { " (fancy)" } else { "" }
            );
        }

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let (total, matched) = match_lines(&pile, self.all, &mut reader, &mut writer)?;
        log::info!("matched {matched} of {total} lines");

        Ok(())
    }
}

/// Match each line, writing one JSON value per line.
///
/// ## Returns
/// `(total, matched)` line counts.
fn match_lines(
    pile: &MatcherPile,
    all: bool,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(usize, usize), Box<dyn std::error::Error>> {
    let mut total = 0;
    let mut matched = 0;

    for line in reader.lines() {
        let line = line?;
        total += 1;

        let value = match pile.match_first(&line)? {
            Some((_, result)) => {
                matched += 1;
                render_captures(&result, all)
            }
            None => Value::Null,
        };

        serde_json::to_writer(&mut *writer, &value)?;
        writeln!(writer)?;
    }
    writer.flush()?;

    Ok((total, matched))
}

/// Render the captures of a match as a JSON object.
fn render_captures(
    result: &MatchResult<'_, '_>,
    all: bool,
) -> Value {
    let mut object = Map::new();
    if all {
        for (key, values) in result.all_captures() {
            object.insert(key.to_string(), values.into_iter().collect());
        }
    } else {
        for (key, value) in result.collapsed_captures() {
            object.insert(key.to_string(), value.into());
        }
    }
    Value::Object(object)
}
