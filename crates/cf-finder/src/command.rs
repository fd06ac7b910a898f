//! Command-line front-end over [`SearchController`].

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{Value, json};

use cf_catalog::RawFormCriteria;
use cf_interpreter::EXAMPLE_PROMPTS;

use crate::controller::{SearchController, Submission};

/// Search a vehicle catalog by form fields or plain language.
#[derive(Debug, Parser)]
#[command(name = "cf-finder", version, about)]
pub struct Cli {
    /// TOML config file; built-in defaults when omitted
    #[arg(short, long, env = "CARFINDER_CONFIG", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The chosen command, `all` when none was given.
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::All)
    }
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the whole catalog
    All,
    /// List makes in catalog order
    Makes,
    /// Show one vehicle
    Show {
        /// Vehicle id
        id: u32,
    },
    /// Structured search (make, model, minPrice, maxPrice, minYear)
    Filter {
        #[arg(value_name = "KEY=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Describe what you want in plain language
    Ask {
        #[arg(required = true, num_args = 1.., value_name = "TEXT")]
        words: Vec<String>,
    },
    /// Sample requests for `ask`
    Examples,
}

/// Parse one `key=value` filter field, rejecting unknown keys.
fn parse_field(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{arg}'"))?;
    let (_, unknown) = RawFormCriteria::from_pairs([(key, value)]);
    if !unknown.is_empty() {
        return Err(format!("unknown filter field '{key}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Command {
    /// Execute against `controller`, returning JSON for display.
    pub async fn run(self, controller: &SearchController) -> anyhow::Result<Value> {
        let output = match self {
            Self::All => serde_json::to_value(controller.reset().await)?,
            Self::Makes => json!(controller.makes()),
            Self::Show { id } => {
                let vehicle = controller
                    .vehicle(id)
                    .with_context(|| format!("no vehicle with id {id}"))?;
                serde_json::to_value(vehicle)?
            }
            Self::Filter { fields } => {
                let pairs = fields.iter().map(|(k, v)| (k.as_str(), v.as_str()));
                let (raw, _) = RawFormCriteria::from_pairs(pairs);
                serde_json::to_value(controller.submit_structured_search(&raw).await)?
            }
            Self::Ask { words } => {
                let text = words.join(" ");
                match controller.submit_free_text_search(&text).await? {
                    Submission::Applied(result) => serde_json::to_value(result)?,
                    Submission::Superseded => serde_json::to_value(controller.current().await)?,
                }
            }
            Self::Examples => json!(EXAMPLE_PROMPTS),
        };
        Ok(output)
    }
}
