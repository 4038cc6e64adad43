use clap::Parser;

#[derive(Parser)]
pub struct Cli {
    /// Query to parse. When omitted, queries are read line by line from
    /// stdin (`/bye` quits).
    pub query: Option<String>,
    #[clap(long, default_value = "false")]
    /// Print the report as JSON instead of the human-readable listing.
    pub json: bool,
    #[clap(long, default_value = "false")]
    /// Reclassify e-mail-looking text segments as `to:` conditions.
    pub emails: bool,
    #[clap(long, default_value = "false")]
    /// Reclassify domain-looking text segments as `to:` conditions.
    pub domains: bool,
}
