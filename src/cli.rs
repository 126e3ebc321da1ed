//! Command-line argument parsing for the template tools
//!
//! The binary is a developer/support tool over the pure template
//! operations: inspect the catalog, validate templates, render previews,
//! and check SMS segment budgets.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Template variable tools
#[derive(Parser, Debug)]
#[command(name = "stencil", version, about = "Template variable tools")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog variables, grouped by category
    Vars {
        /// Only show one category
        #[arg(long, value_name = "NAME")]
        category: Option<String>,
    },

    /// Check a template's variables against the catalog
    Check {
        /// Template file
        template: PathBuf,
    },

    /// Render a template with concrete values
    Render {
        /// Template file
        template: PathBuf,
        /// YAML or JSON mapping of variable keys to values
        #[arg(long, value_name = "FILE")]
        values: PathBuf,
    },

    /// Compute SMS length and segment info for a message template
    Sms {
        /// Template file
        template: PathBuf,
        /// Optional values to render before measuring
        #[arg(long, value_name = "FILE")]
        values: Option<PathBuf>,
    },
}
