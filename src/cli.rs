//! Command-line interface for freecheck

use std::path::PathBuf;

use clap::Parser;
use freecheck::config::{DEFAULT_ACCOUNT, DEFAULT_CHECK_BLANK, DEFAULT_STYLE};
use freecheck::{Overrides, Selection};

#[derive(Parser, Debug)]
#[command(
    name = "freecheck",
    version,
    about = "A free check printing utility.",
    after_help = "Writes PostScript to standard output.

EXAMPLES:
  freecheck --account business --checknum 1050 > checks.ps
  freecheck --test --checkstyle Wallet | ps2pdf - sample.pdf
  freecheck --showaccounts --showblanks"
)]
pub struct Cli {
    /// Configuration file [default: ~/.freecheck.toml]
    #[arg(long, env = "FREECHECK_CONF")]
    pub conf: Option<PathBuf>,

    /// Account definition name
    #[arg(long, default_value = DEFAULT_ACCOUNT)]
    pub account: String,

    /// Check blank definition
    #[arg(long, default_value = DEFAULT_CHECK_BLANK)]
    pub checktype: String,

    /// Check style
    #[arg(long, default_value = DEFAULT_STYLE)]
    pub checkstyle: String,

    /// Starting check number (overrides the account's)
    #[arg(long)]
    pub checknum: Option<u64>,

    /// Number of pages to print
    #[arg(long)]
    pub pages: Option<u64>,

    /// Don't print the MICR line (body only)
    #[arg(long)]
    pub nomicr: bool,

    /// Don't print the check body (MICR line only)
    #[arg(long)]
    pub nobody: bool,

    /// Print VOID across every check
    #[arg(long)]
    pub test: bool,

    /// List available accounts
    #[arg(long)]
    pub showaccounts: bool,

    /// List available check styles
    #[arg(long)]
    pub showstyles: bool,

    /// List available check blanks
    #[arg(long)]
    pub showblanks: bool,

    /// Directory with freecheck_header.ps, freecheck_formats.ps and freecheck_program.ps
    #[arg(long, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Write the document to a file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging on stderr (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn selection(&self) -> Selection {
        Selection::new(&self.account, &self.checktype, &self.checkstyle)
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            check_number: self.checknum,
            pages: self.pages,
            no_micr: self.nomicr,
            no_body: self.nobody,
            test: self.test,
        }
    }

    pub fn wants_listing(&self) -> bool {
        self.showaccounts || self.showstyles || self.showblanks
    }
}
