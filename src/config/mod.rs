pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "poem2anki")]
#[command(about = "Convert a text file into Anki flash cards")]
pub struct CliConfig {
    /// No. of lines in question
    #[arg(short, long, default_value_t = 3)]
    pub qlines: usize,

    /// No. of lines in answer
    #[arg(short, long, default_value_t = 1)]
    pub alines: usize,

    /// No. of source lines on the first card's question side. With qlines=1
    /// the default of 1 is the only sensible value; with qlines>1 raise this
    /// to start the first card with more context.
    #[arg(short, long, default_value_t = 1)]
    pub flines: usize,

    /// Read the poem from a file instead of stdin
    #[arg(long)]
    pub input: Option<String>,

    /// Write the cards to a file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn qlines(&self) -> usize {
        self.qlines
    }

    fn alines(&self) -> usize {
        self.alines
    }

    fn flines(&self) -> usize {
        self.flines
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("qlines", self.qlines, 1)?;
        validate_positive_number("alines", self.alines, 1)?;
        validate_positive_number("flines", self.flines, 1)?;

        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }

        Ok(())
    }
}
