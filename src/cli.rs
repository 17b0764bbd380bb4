// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "cubeplay")]
#[command(about = "Textured spinning cube with a fly camera", long_about = None)]
pub struct Cli {
    /// JSON file overriding the default camera/viewport tuning
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Image file for the cube faces (checkerboard if omitted)
    #[arg(long = "cube-texture")]
    pub cube_texture: Option<PathBuf>,

    /// Image file for the ground plane (checkerboard if omitted)
    #[arg(long = "ground-texture")]
    pub ground_texture: Option<PathBuf>,

    /// Disable the debug overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
