use grokpile::{EngineSelection, MacroRegistry, MatcherOptions};

/// Regex engine choice.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum EngineArg {
    /// Only the `regex` engine; look-around is rejected.
    Basic,

    /// Only the `fancy_regex` engine.
    Fancy,

    /// `regex` where possible, `fancy_regex` where needed.
    Adaptive,
}

impl From<EngineArg> for EngineSelection {
    fn from(engine: EngineArg) -> Self {
        match engine {
            EngineArg::Basic => EngineSelection::Basic,
            EngineArg::Fancy => EngineSelection::Fancy,
            EngineArg::Adaptive => EngineSelection::Adaptive,
        }
    }
}

/// Macro source arg group.
#[derive(clap::Args, Debug)]
pub struct MacroArgs {
    /// Macro files to import, in order; later definitions replace earlier ones.
    #[arg(long = "patterns-file")]
    patterns_files: Vec<String>,

    /// Do not load the builtin base patterns.
    #[arg(long)]
    no_base: bool,
}

impl MacroArgs {
    /// Build the macro registry.
    pub fn build_registry(&self) -> Result<MacroRegistry, Box<dyn std::error::Error>> {
        let mut registry = if self.no_base {
            MacroRegistry::new()
        } else {
            MacroRegistry::with_base_patterns()?
        };

        for path in &self.patterns_files {
            registry.import_macros_from_path(path)?;
        }
        log::debug!("{} macros defined", registry.len());

        Ok(registry)
    }
}

/// Matcher compile option arg group.
#[derive(clap::Args, Debug)]
pub struct MatcherArgs {
    /// Hide bare macro references (`%{DAY}`) from extraction.
    #[arg(long)]
    aliased_only: bool,

    /// Regex engine selection.
    #[arg(long, value_enum, default_value = "adaptive")]
    engine: EngineArg,
}

impl MatcherArgs {
    /// The matcher options.
    pub fn options(&self) -> MatcherOptions {
        MatcherOptions::default()
            .with_aliased_only(self.aliased_only)
            .with_engine(self.engine.into())
    }
}
