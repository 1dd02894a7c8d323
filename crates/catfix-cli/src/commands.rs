//! Command handlers wiring CLI arguments into pipeline requests.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use catfix_cli::config::load_config;
use catfix_cli::pipeline::{
    GenerateOutcome, GenerateRequest, SplitOutcome, SplitRequest, run_generate, run_split,
};
use catfix_model::GeneratorConfig;
use catfix_render::LevelStyle;

use crate::cli::{GenerateArgs, SplitArgs};

const DEFAULT_OUTPUT: &str = "generated_models.kt";

pub fn run_generate_command(args: &GenerateArgs) -> Result<GenerateOutcome> {
    let mut config = match (&args.config, &args.csv) {
        (Some(path), _) => load_config(path)?,
        (None, Some(csv)) => GeneratorConfig::ad_hoc(csv.clone(), DEFAULT_OUTPUT),
        (None, None) => bail!("either --config or --csv must be given"),
    };
    if let Some(csv) = &args.csv {
        config.csv.file_path = csv.clone();
    }
    if let Some(output) = &args.output {
        config.output.kotlin_file = output.clone();
    }

    run_generate(&GenerateRequest {
        config,
        leaf_only: args.leaf_only,
        level_style: if args.level_names {
            LevelStyle::NamedConstant
        } else {
            LevelStyle::Direct
        },
    })
}

pub fn run_split_command(args: &SplitArgs) -> Result<SplitOutcome> {
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    });
    run_split(&SplitRequest {
        input: args.input.clone(),
        output_dir,
        max_per_chunk: args.max_per_chunk,
    })
}
