//! `fpt prod` command - Product views

use clap::Subcommand;
use miette::{IntoDiagnostic, Result};
use tabled::Tabled;

use crate::cli::commands::utils::open_store;
use crate::cli::helpers::format_decimal;
use crate::cli::table;
use crate::cli::GlobalOpts;
use crate::entities::{ProductListRow, ProductType};

#[derive(Subcommand, Debug)]
pub enum ProdCommands {
    /// List products
    List,

    /// List product types
    Types,
}

/// Run a product subcommand
pub fn run(cmd: ProdCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ProdCommands::List => run_list(global),
        ProdCommands::Types => run_types(global),
    }
}

#[derive(Tabled)]
struct ProductRowDisplay {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    type_name: String,
    #[tabled(rename = "MIN PARTNER PRICE")]
    min_partner_price: String,
}

#[derive(Tabled)]
struct TypeRowDisplay {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "NAME")]
    name: String,
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let rows = store.list_products().into_diagnostic()?;
    table::print_rows(
        &rows,
        |p: &ProductListRow| ProductRowDisplay {
            id: p.product_id,
            name: p.product_name.clone(),
            type_name: p.type_name.clone(),
            min_partner_price: format_decimal(p.min_partner_price),
        },
        global.format,
        "No products found.",
    )
}

fn run_types(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let rows = store.list_product_types().into_diagnostic()?;
    table::print_rows(
        &rows,
        |t: &ProductType| TypeRowDisplay {
            id: t.product_type_id,
            name: t.type_name.clone(),
        },
        global.format,
        "No product types found.",
    )
}
