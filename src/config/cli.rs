use crate::domain::model::{Currency, CustomerInfo};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "quoter")]
#[command(about = "Price a service from the catalog and export the quotation as PDF")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Catalog JSON to use instead of the configured or built-in one
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Directory exported files are written to
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct SelectionArgs {
    /// Service id from the catalog
    pub service: String,

    /// Option id to include; repeat or separate with commas
    #[arg(long = "option", value_delimiter = ',')]
    pub options: Vec<String>,

    /// Defaults to the catalog's currency
    #[arg(long)]
    pub currency: Option<Currency>,
}

impl SelectionArgs {
    /// The requested currency, or `default` when none was given.
    pub fn currency_or(&self, default: Currency) -> Currency {
        self.currency.unwrap_or(default)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List services with their base price
    Services {
        #[arg(long)]
        currency: Option<Currency>,
    },
    /// List the options offered for a service
    Options {
        service: String,
        #[arg(long)]
        currency: Option<Currency>,
    },
    /// Print the total for a selection
    Total(SelectionArgs),
    /// Print the price breakdown for a selection
    Summary(SelectionArgs),
    /// Convert an amount between usd and mxn with the catalog rate
    Convert {
        amount: u64,
        #[arg(long, default_value = "usd")]
        from: Currency,
    },
    /// Render the quotation PDF for a selection and contact details
    Export {
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        message: String,
    },
    /// Slice a rendered snapshot image into an image-per-page PDF
    Snapshot {
        image: String,
        /// Output file name inside the output directory
        #[arg(long, default_value = "quotation.pdf")]
        file: String,
    },
}

impl Command {
    /// Contact details carried by `export`, if this is one.
    pub fn customer(&self) -> Option<CustomerInfo> {
        match self {
            Command::Export {
                name,
                email,
                phone,
                message,
                ..
            } => Some(CustomerInfo {
                name: name.clone(),
                email: email.clone(),
                phone: phone.clone(),
                message: Some(message.clone()),
            }),
            _ => None,
        }
    }
}
