use super::load_registry;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use variantkit::{StyleFn, Tv};

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Components file (JSON object of name -> style config)
    pub file: PathBuf,

    /// Only inspect this component
    pub name: Option<String>,
}

pub fn inspect(args: InspectArgs, config: &Config, cwd: &Path) -> Result<()> {
    let registry = load_registry(cwd, &args.file)?;
    let tv = Tv::new(config.tv.clone());

    let names: Vec<String> = match &args.name {
        Some(name) => vec![name.clone()],
        None => registry.names().map(str::to_string).collect(),
    };

    println!("🔍 {} {} component(s)", "Inspecting".green().bold(), names.len());

    for name in &names {
        let style = registry.build(&tv, name)?;
        println!();
        print_component(name, &style);
    }

    Ok(())
}

fn print_component(name: &str, style: &StyleFn) {
    println!("{}", name.bold());

    if style.has_slots() {
        println!("   slots:    {}", style.slot_keys().join(", "));
    }

    let flat = style.flattened();
    if flat.variants.is_empty() {
        println!("   variants: {}", "none".dimmed());
    }
    for (variant, values) in flat.variants.iter() {
        let default = style.default_variants().get(variant);
        let values: Vec<String> = values
            .keys()
            .map(|value| {
                if default.is_some_and(|d| d == value) {
                    format!("{}*", value).green().to_string()
                } else {
                    value.to_string()
                }
            })
            .collect();
        println!("   {} {}", format!("{}:", variant).cyan(), values.join(" | "));
    }

    if !flat.compound_variants.is_empty() || !flat.compound_slots.is_empty() {
        println!(
            "   compounds: {} variant rule(s), {} slot rule(s)",
            flat.compound_variants.len(),
            flat.compound_slots.len()
        );
    }
}
