//! `fpt partner` command - Partner views

use clap::Subcommand;
use miette::{IntoDiagnostic, Result};
use tabled::Tabled;

use crate::cli::commands::utils::open_store;
use crate::cli::helpers::format_optional;
use crate::cli::table;
use crate::cli::GlobalOpts;
use crate::entities::Partner;

#[derive(Subcommand, Debug)]
pub enum PartnerCommands {
    /// List partners
    List,
}

/// Run a partner subcommand
pub fn run(cmd: PartnerCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        PartnerCommands::List => run_list(global),
    }
}

#[derive(Tabled)]
struct PartnerRowDisplay {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "COMPANY")]
    company: String,
    #[tabled(rename = "PHONE")]
    phone: String,
    #[tabled(rename = "EMAIL")]
    email: String,
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let rows = store.list_partners().into_diagnostic()?;
    table::print_rows(
        &rows,
        |p: &Partner| PartnerRowDisplay {
            id: p.partner_id,
            company: p.company_name.clone(),
            phone: format_optional(p.phone.as_deref()),
            email: format_optional(p.email.as_deref()),
        },
        global.format,
        "No partners found.",
    )
}
