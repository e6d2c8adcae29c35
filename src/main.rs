use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use entity_ddl::{describe_project, generate_ddl, Dialect, GenerateOptions};

#[derive(Parser)]
#[command(name = "entity-ddl")]
#[command(author, version, about = "Derive relational schemas and DDL from annotated entity models")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a .sql script from a .entproj project
    Generate {
        /// Path to the .entproj file
        #[arg(short, long)]
        project: PathBuf,

        /// Output path for the .sql file (defaults to the project's OutputFile or <project>.sql)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Target dialect (mysql, postgresql, sqlserver, sqlite); overrides the project setting
        #[arg(short, long)]
        dialect: Option<Dialect>,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the derived tables, keys, indexes and diagnostics
    Describe {
        /// Path to the .entproj file
        #[arg(short, long)]
        project: PathBuf,

        /// Dialect used to render column types
        #[arg(short, long)]
        dialect: Option<Dialect>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            project,
            output,
            dialect,
            verbose,
        } => {
            let options = GenerateOptions {
                project_path: project,
                output_path: output,
                dialect,
                verbose,
            };

            let output_path = generate_ddl(options)?;
            if !verbose {
                println!("{}", output_path.display());
            }
        }
        Commands::Describe { project, dialect } => {
            print!("{}", describe_project(&project, dialect)?);
        }
    }

    Ok(())
}
