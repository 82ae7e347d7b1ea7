use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    #[clap(
        help = "JSON file holding a user object or an array of users (reads stdin if omitted)",
        env = "GITHUB_USER_INPUT"
    )]
    pub path: Option<PathBuf>,

    #[clap(
        short = 'k',
        long = "skip-invalid",
        help = "Report and skip invalid users in an array instead of failing",
        default_value = "false"
    )]
    pub skip_invalid: bool,

    #[clap(
        short = 'j',
        long = "json",
        help = "Print decoded users as JSON",
        default_value = "false"
    )]
    pub json: bool,
}
