use clap::Parser;
use std::path::PathBuf;

/// Extract DefineBinaryData payloads from an SWF file
#[derive(Parser, Debug)]
#[command(name = "swf-extract", version)]
pub struct Cli {
    /// Path to the swf file
    #[arg(long)]
    pub input: PathBuf,

    /// Character id of the binary data to extract
    #[arg(long, required_unless_present = "list")]
    pub id: Option<u16>,

    /// Path to write the payload to
    #[arg(long, required_unless_present = "list")]
    pub output: Option<PathBuf>,

    /// Print the id and size of every binary data tag instead of extracting
    #[arg(long, conflicts_with_all = ["id", "output"])]
    pub list: bool,
}
