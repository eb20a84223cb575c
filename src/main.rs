//! Resource inspector - Entry Point
//!
//! Loads a directory into a resource tree and prints the metadata of the
//! resources named on the command line.

use clap::Parser;
use log::info;

use module_resource::cli::Cli;
use module_resource::config::InspectorConfig;
use module_resource::error::{InspectorError, exit_code, handle_error};
use module_resource::tree::load_directory;
use module_resource::utils::logging::setup_logging;
use module_resource::{ModuleResource, ResourceInfo};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(exit_code(&InspectorError::from(e)));
        }
    };

    setup_logging(&config.log_level);

    if let Err(e) = run(&config, &cli.resource_paths()).await {
        handle_error(&e);
        std::process::exit(exit_code(&e));
    }
}

async fn run(config: &InspectorConfig, paths: &[String]) -> Result<(), InspectorError> {
    info!("Loading resources from {}", config.source_dir);
    let tree = load_directory(&config.source_dir_path(), &config.load_options()).await?;

    for path in paths {
        let resource = ModuleResource::new(path, &tree);
        print!("{}", ResourceInfo::from(&resource));
    }

    Ok(())
}
