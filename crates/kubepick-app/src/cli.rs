use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kubepick", version, about = "Interactively switch the current kubeconfig context")]
pub struct Args {
    /// Kubeconfig to edit instead of ~/.kube/config
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Picker config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the default picker config and exit
    #[arg(long)]
    pub init_config: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
