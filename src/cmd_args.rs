use std::ffi::OsString;
use std::path::PathBuf;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Page fixture (JSON) describing the loaded page
    #[clap(short = 'p', long, help = "page fixture file")]
    page: PathBuf,

    /// Replay script (JSON array of page events and time advances).
    /// Without a script the page is only bootstrapped.
    #[clap(short = 's', long, help = "replay script file")]
    script: Option<PathBuf>,

    /// Site configuration overrides (JSON)
    #[clap(short = 'c', long, help = "site config file")]
    config: Option<PathBuf>,

    #[clap(long, help = "pretty-print the JSON report")]
    pretty: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    page: PathBuf,
    script: Option<PathBuf>,
    config: Option<PathBuf>,
    pretty: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            page: args.page,
            script: args.script,
            config: args.config,
            pretty: args.pretty,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn page(&self) -> &PathBuf {
        &self.page
    }

    pub fn script(&self) -> Option<&PathBuf> {
        self.script.as_ref()
    }

    pub fn config(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
