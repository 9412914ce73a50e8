pub mod request_file;

use crate::adapters::mailer::DEFAULT_RECIPIENT;
use crate::domain::model::{parse_pensum, RequestInput, Tone};
use crate::utils::error::Result;
use crate::utils::validation::{validate_recipient, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "spesenantrag")]
#[command(about = "Generates a reimbursement request letter for flat-rate allowances")]
pub struct CliConfig {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub role: String,

    /// Employment percentage (1-100). Non-numeric or out-of-range input falls
    /// back to 100.
    #[arg(long, default_value = "100")]
    pub pensum: String,

    #[arg(long, help = "Exclude the device allowance")]
    pub no_device: bool,

    #[arg(long, help = "Exclude the mobility allowance")]
    pub no_mobility: bool,

    #[arg(
        long,
        default_value = "neutral",
        help = "Letter tone: neutral, happy or grumpy"
    )]
    pub tone: String,

    #[arg(long, help = "Load request fields from a TOML file")]
    pub request_file: Option<String>,

    #[arg(long, help = "Copy the letter to the system clipboard")]
    pub copy: bool,

    #[arg(long, help = "Open the default mail client with the letter")]
    pub mail: bool,

    #[arg(long, default_value = DEFAULT_RECIPIENT)]
    pub recipient: String,

    #[arg(long, help = "Print the result as JSON instead of plain text")]
    pub json: bool,

    #[arg(long, help = "Dictate into the letter (requires a platform recognizer)")]
    pub dictate: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Builds the normalized request input from the raw flag values.
    pub fn to_request_input(&self) -> RequestInput {
        RequestInput {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role.clone(),
            pensum_pct: parse_pensum(&self.pensum),
            include_device: !self.no_device,
            include_mobility: !self.no_mobility,
            tone: Tone::parse(&self.tone),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_recipient("recipient", &self.recipient)
    }
}
