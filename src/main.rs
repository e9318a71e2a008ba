use anyhow::Result;
use clap::{Parser, Subcommand};
use pipeworks::areas::project::Project;
use pipeworks::commands::porcelain::create::CreateOptions;
use pipeworks::commands::porcelain::delete::DeleteOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pipeworks",
    version = "0.1.0",
    about = "A scaffolding tool for modular data pipelines",
    long_about = "pipeworks instantiates and removes modular pipeline scaffolds \
    inside a pipeworks project: pipeline code, its tests and its per-environment \
    configuration are created and deleted together.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "pipeline",
        about = "Commands for working with modular pipelines"
    )]
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommands,
    },
}

#[derive(Subcommand)]
enum PipelineCommands {
    #[command(
        name = "create",
        about = "Create a new modular pipeline by providing a name",
        long_about = "This command instantiates the pipeline template under the project's \
        pipelines directory, then merges the generated tests and configuration \
        into the project without overwriting anything that already exists."
    )]
    Create {
        #[arg(index = 1, help = "The pipeline name, with '.' separating parent folders")]
        name: String,
        #[arg(long, help = "Skip creation of config files for the new pipeline")]
        skip_config: bool,
        #[arg(
            short = 't',
            long = "template",
            help = "Path to a pipeline template directory, overriding any local template"
        )]
        template_path: Option<PathBuf>,
        #[arg(
            short = 'e',
            long,
            help = "Environment to create pipeline configuration in, defaults to 'base'"
        )]
        env: Option<String>,
    },
    #[command(
        name = "delete",
        about = "Delete a modular pipeline by providing a name",
        long_about = "This command removes the pipeline directory, its tests and its \
        configuration files, after checking that no child pipeline is nested inside."
    )]
    Delete {
        #[arg(index = 1, help = "The pipeline name, with '.' separating parent folders")]
        name: String,
        #[arg(
            short = 'e',
            long,
            help = "Environment to delete pipeline configuration from, defaults to 'base'"
        )]
        env: Option<String>,
        #[arg(short = 'y', long, help = "Confirm deletion of the pipeline non-interactively")]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pwd = std::env::current_dir()?;
    let project = Project::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Pipeline { command } => match command {
            PipelineCommands::Create {
                name,
                skip_config,
                template_path,
                env,
            } => {
                let opts = CreateOptions {
                    skip_config: *skip_config,
                    template_path: template_path.clone(),
                    env: env.clone(),
                };

                project.create_pipeline(name, &opts)?
            }
            PipelineCommands::Delete { name, env, yes } => {
                let opts = DeleteOptions {
                    env: env.clone(),
                    yes: *yes,
                };

                project.delete_pipeline(name, &opts)?
            }
        },
    }

    Ok(())
}
