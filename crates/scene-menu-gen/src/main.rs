use clap::{Parser, Subcommand};
use scene_menu_gen::config::asset_path_arg;
use scene_menu_gen::{GenerateOutcome, MenuConfig, MenuError, ProjectHost};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "scene-menu")]
#[command(about = "Generate editor menu items that open each scene in a Unity project", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project root (contains Assets/ and ProjectSettings/)
    #[arg(short, long, global = true, default_value = ".")]
    project: PathBuf,

    /// Suppress progress output (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sync the build list and regenerate SceneLoadMenu.cs
    Generate,
    /// Show or change the build-list settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current settings
    Show,
    /// Set the directory whose scenes make up the build list
    SetBuildDir {
        /// Directory path (project-relative or absolute)
        path: PathBuf,
    },
    /// Set the scene pinned first in the build list
    SetFirstScene {
        /// Scene path (project-relative or absolute)
        path: PathBuf,
    },
    /// Reset both settings
    Clear,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging (suppressed if --quiet)
    if !cli.quiet {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();
    }

    let result = match cli.command {
        Commands::Generate => generate(&cli.project, cli.quiet),
        Commands::Config { action } => configure(&cli.project, action),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn generate(project: &Path, quiet: bool) -> Result<(), MenuError> {
    let config = MenuConfig::load_or_default(project);
    let mut host = ProjectHost::open(project)?;

    match scene_menu_gen::generate_scene_menu(&mut host, &config)? {
        GenerateOutcome::Written(report) => {
            if !quiet {
                eprintln!(
                    "Success: Menu generated at {} ({} scenes, {} menu items)",
                    report.output_path.display(),
                    report.scene_count,
                    report.method_count
                );
            }
        }
        GenerateOutcome::NoScenes | GenerateOutcome::NoMethods => {}
    }

    Ok(())
}

fn configure(project: &Path, action: ConfigAction) -> Result<(), MenuError> {
    let mut config = MenuConfig::load(project)?;

    match action {
        ConfigAction::Show => {
            println!("BuildScenePath = {}", config.build_dir().unwrap_or(""));
            println!("FirstScenePath = {}", config.first_scene().unwrap_or(""));
            return Ok(());
        }
        ConfigAction::SetBuildDir { path } => {
            config.set_build_dir(&asset_path_arg(project, &path));
        }
        ConfigAction::SetFirstScene { path } => {
            config.set_first_scene(&asset_path_arg(project, &path));
        }
        ConfigAction::Clear => config.clear(),
    }

    let saved = config.save(project)?;
    log::info!("Settings saved to {}", saved.display());
    Ok(())
}
