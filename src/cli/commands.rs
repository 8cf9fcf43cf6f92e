// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print the serialized field as the renderer receives it
    Render(FieldArgs),

    /// Hash a password the way a form submission would store it
    Hash {
        /// Plain password to hash
        #[arg(required = true)]
        value: String,
    },

    /// Start the HTTP API
    Serve(FieldArgs),
}

/// Options applied to the field before rendering or serving
#[derive(clap::Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Field label
    #[arg(long, default_value = "Password")]
    pub name: String,

    /// Generated password length
    #[arg(long)]
    pub length: Option<i64>,

    /// Minimum selectable length
    #[arg(long)]
    pub min_length: Option<i64>,

    /// Maximum selectable length
    #[arg(long)]
    pub max_length: Option<i64>,

    /// Prefix added to generated passwords
    #[arg(long)]
    pub prefix: Option<String>,

    /// Suffix added to generated passwords
    #[arg(long)]
    pub suffix: Option<String>,

    /// Exclude look-alike characters
    #[arg(long)]
    pub exclude_similar: bool,

    /// Exclude ambiguous symbols
    #[arg(long)]
    pub exclude_ambiguous: bool,

    /// Show the password instead of masking it
    #[arg(long)]
    pub show_password: bool,

    /// Hide every UI extra (toggles, length input, copy and regenerate buttons)
    #[arg(long)]
    pub hide_all_extras: bool,
}
