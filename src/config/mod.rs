pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::runner::{CallMode, Invocation, SERVICE_NAMES};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_one_of, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "service-object")]
#[command(about = "Run service objects through the safe or bang call path")]
pub struct CliConfig {
    #[arg(long, default_value = "echo")]
    pub service: String,

    #[arg(long, help = "Argument passed to the service")]
    pub args: Option<String>,

    #[arg(long, help = "Use the bang call: failures propagate and exit non-zero")]
    pub bang: bool,

    #[arg(short, long, help = "TOML file describing a batch of invocations")]
    pub config: Option<String>,

    #[arg(long, help = "Print reports as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn invocation(&self) -> Invocation {
        Invocation {
            service: self.service.clone(),
            args: self.args.clone(),
            mode: if self.bang {
                CallMode::Bang
            } else {
                CallMode::Safe
            },
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("service", &self.service, SERVICE_NAMES)
    }
}
