use super::load_registry;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use variantkit::{Props, Resolved, Tv};

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Components file (JSON object of name -> style config)
    pub file: PathBuf,

    /// Component to resolve
    pub name: String,

    /// Props as a JSON object, e.g. '{"size":"lg","class":"mt-2"}'
    #[arg(short, long, default_value = "{}")]
    pub props: String,

    /// Print only this slot
    #[arg(short, long)]
    pub slot: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn resolve(args: ResolveArgs, config: &Config, cwd: &Path) -> Result<()> {
    let registry = load_registry(cwd, &args.file)?;
    let tv = Tv::new(config.tv.clone());
    let style = registry.build(&tv, &args.name)?;

    let props = Props::from_json(&args.props).map_err(|e| anyhow!("Invalid --props: {}", e))?;
    if config.tv.strict {
        style.check_props(&props)?;
    }

    if let Some(slot) = &args.slot {
        let class = style
            .slots(&props)
            .get(slot)
            .ok_or_else(|| anyhow!("Component '{}' has no slot '{}'", args.name, slot))?;
        println!("{}", class);
        return Ok(());
    }

    let resolved = style.resolve(&props);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    match resolved {
        Resolved::Class(class) => println!("{}", class),
        Resolved::Slots(slots) => {
            for (slot, class) in slots.iter() {
                println!("{} {}", format!("{}:", slot).cyan().bold(), class);
            }
        }
    }

    Ok(())
}
