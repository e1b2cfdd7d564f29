use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use vectorscribe::{Config, EditorState, RecordingSurface, ReplayScript};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VECTORSCRIBE_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "vectorscribe")]
#[command(version = VERSION, about = "Editable vector drawing core with scripted gesture replay")]
struct Cli {
    /// Config file to use instead of ~/.config/vectorscribe/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Replay a TOML gesture script and print the resulting scene as JSON
    #[arg(long, short = 'r', value_name = "SCRIPT")]
    replay: Option<PathBuf>,

    /// Print the draw commands of the final scene instead of the scene itself
    #[arg(long, requires = "replay", action = ArgAction::SetTrue)]
    draw: bool,

    /// Write the documented default config to ~/.config/vectorscribe/config.toml
    #[arg(long, conflicts_with = "replay", action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.replay else {
        println!("vectorscribe: editable vector drawing core");
        println!();
        println!("Usage:");
        println!("  vectorscribe --replay <SCRIPT>          Replay gestures, print the scene as JSON");
        println!("  vectorscribe --replay <SCRIPT> --draw   Print the draw commands instead");
        println!("  vectorscribe --init-config              Write the default config file");
        println!("  vectorscribe --help                     Show help");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = ReplayScript::load(&script_path)?;
    let mut state = EditorState::new(&config);
    let summary = script
        .run(&mut state)
        .with_context(|| format!("Replay of {} failed", script_path.display()))?;
    log::info!(
        "Replayed {} events ({} selection changes)",
        summary.events,
        summary.selection_changes
    );

    let output = if cli.draw {
        let mut surface = RecordingSurface::new();
        state.draw(&mut surface);
        serde_json::to_string_pretty(surface.commands())?
    } else {
        serde_json::to_string_pretty(&serde_json::json!({
            "tool": state.tool(),
            "summary": summary,
            "scene": state.scene,
        }))?
    };
    println!("{output}");

    Ok(())
}
