use super::Parser;

#[derive(Parser, Debug)]
#[command(name = "asobi-login", about = "Username/password login endpoint")]
pub struct Cli {
    /// Path to a TOML settings file.
    #[arg(long)]
    pub settings: Option<String>,
}
