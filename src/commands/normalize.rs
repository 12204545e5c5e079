//! `mathrec normalize` - show how text is tokenized

use std::io::{self, Read};

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::load_config;
use mathrec_core::error::Result;

/// Execute the normalize command
pub fn execute(cli: &Cli, text: &str, trace: bool) -> Result<()> {
    let input = if text == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        text.to_string()
    };

    let normalizer = load_config(cli)?.normalizer()?;

    if trace {
        let trace = normalizer.trace(&input);
        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&trace)?);
            }
            OutputFormat::Human => {
                println!("original:   {}", trace.original);
                println!("cleaned:    {}", trace.cleaned);
                println!("normalized: {}", trace.normalized);
                println!("tokens:     {}", trace.tokens.join(" "));
                println!("final:      {}", trace.final_tokens.join(" "));
                if !trace.entities.is_empty() {
                    let entities: Vec<String> = trace
                        .entities
                        .iter()
                        .map(|e| format!("{}:{}", e.kind, e.value))
                        .collect();
                    println!("entities:   {}", entities.join(" "));
                }
            }
        }
        return Ok(());
    }

    let tokens = normalizer.normalize(&input);
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "tokens": tokens });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", tokens.join(" "));
        }
    }

    Ok(())
}
