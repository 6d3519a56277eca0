use crate::config::Config;
use anyhow::Result;
use clap::Args;
use variantkit::Tv;

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Classes to merge; later classes win conflicts
    #[arg(required = true)]
    pub classes: Vec<String>,
}

pub fn merge(args: MergeArgs, config: &Config) -> Result<()> {
    let tv = Tv::new(config.tv.clone());
    println!("{}", tv.cn(args.classes));
    Ok(())
}
