//! `fpt mat` command - Material management

use clap::Subcommand;
use console::style;
use miette::{miette, IntoDiagnostic, Result};
use rust_decimal::Decimal;
use tabled::Tabled;

use crate::cli::commands::utils::open_store;
use crate::cli::helpers::{format_decimal, stdin_is_interactive};
use crate::cli::prompt::{self, MaterialFormSeed};
use crate::cli::table;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::entities::{Material, MaterialDraft, MaterialListRow, MaterialType, ProductUsage};
use crate::store::Store;

#[derive(Subcommand, Debug)]
pub enum MatCommands {
    /// List materials
    List,

    /// Show a material's details
    Show(ShowArgs),

    /// Add a new material
    New(NewArgs),

    /// Edit a material
    Edit(EditArgs),

    /// Delete a material
    Delete(DeleteArgs),

    /// List the products that use a material
    Usage(UsageArgs),

    /// List material types
    Types,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Material id; prompts for a selection when omitted
    pub id: Option<i32>,
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Material name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Material type id (see `fpt mat types`)
    #[arg(long = "type", short = 't')]
    pub type_id: Option<i32>,

    /// Price per unit
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Quantity in stock
    #[arg(long, short = 'q')]
    pub quantity: Option<i32>,

    /// Minimum quantity threshold
    #[arg(long)]
    pub min_quantity: Option<i32>,

    /// Units per package
    #[arg(long)]
    pub package_quantity: Option<Decimal>,

    /// Unit of measure (e.g. "pcs", "m2")
    #[arg(long, short = 'u')]
    pub unit: Option<String>,

    /// Prompt for fields interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

impl NewArgs {
    /// A complete draft, when every field was given on the command line
    fn draft(&self) -> Option<MaterialDraft> {
        Some(MaterialDraft {
            name: self.name.clone()?,
            type_id: self.type_id?,
            unit_price: self.price?,
            quantity_in_stock: self.quantity?,
            min_quantity: self.min_quantity?,
            package_quantity: self.package_quantity?,
            unit_of_measure: self.unit.clone()?,
        })
    }

    fn seed(&self) -> MaterialFormSeed {
        MaterialFormSeed {
            name: self.name.clone(),
            type_id: self.type_id,
            unit_price: self.price,
            quantity_in_stock: self.quantity,
            min_quantity: self.min_quantity,
            package_quantity: self.package_quantity,
            unit_of_measure: self.unit.clone(),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Material id; prompts for a selection when omitted
    pub id: Option<i32>,

    /// New material name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// New material type id
    #[arg(long = "type", short = 't')]
    pub type_id: Option<i32>,

    /// New price per unit
    #[arg(long)]
    pub price: Option<Decimal>,

    /// New quantity in stock
    #[arg(long, short = 'q')]
    pub quantity: Option<i32>,

    /// New minimum quantity threshold
    #[arg(long)]
    pub min_quantity: Option<i32>,

    /// New units per package
    #[arg(long)]
    pub package_quantity: Option<Decimal>,

    /// New unit of measure
    #[arg(long, short = 'u')]
    pub unit: Option<String>,

    /// Walk through every field interactively
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

impl EditArgs {
    fn has_any_field(&self) -> bool {
        self.name.is_some()
            || self.type_id.is_some()
            || self.price.is_some()
            || self.quantity.is_some()
            || self.min_quantity.is_some()
            || self.package_quantity.is_some()
            || self.unit.is_some()
    }

    /// Overlay the given flags onto `draft`
    fn apply_to(&self, draft: &mut MaterialDraft) {
        if let Some(ref name) = self.name {
            draft.name = name.clone();
        }
        if let Some(type_id) = self.type_id {
            draft.type_id = type_id;
        }
        if let Some(price) = self.price {
            draft.unit_price = price;
        }
        if let Some(quantity) = self.quantity {
            draft.quantity_in_stock = quantity;
        }
        if let Some(min_quantity) = self.min_quantity {
            draft.min_quantity = min_quantity;
        }
        if let Some(package_quantity) = self.package_quantity {
            draft.package_quantity = package_quantity;
        }
        if let Some(ref unit) = self.unit {
            draft.unit_of_measure = unit.clone();
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Material id; prompts for a selection when omitted
    pub id: Option<i32>,

    /// Delete without asking for confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct UsageArgs {
    /// Material id; prompts for a selection when omitted
    pub id: Option<i32>,
}

/// Run a material subcommand
pub fn run(cmd: MatCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        MatCommands::List => run_list(global),
        MatCommands::Show(args) => run_show(args, global),
        MatCommands::New(args) => run_new(args, global),
        MatCommands::Edit(args) => run_edit(args, global),
        MatCommands::Delete(args) => run_delete(args, global),
        MatCommands::Usage(args) => run_usage(args, global),
        MatCommands::Types => run_types(global),
    }
}

#[derive(Tabled)]
struct MaterialRowDisplay {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    type_name: String,
    #[tabled(rename = "UNIT PRICE")]
    unit_price: String,
    #[tabled(rename = "IN STOCK")]
    in_stock: i32,
    #[tabled(rename = "MIN QTY")]
    min_quantity: i32,
    #[tabled(rename = "UNIT")]
    unit: String,
}

fn material_display(row: &MaterialListRow) -> MaterialRowDisplay {
    MaterialRowDisplay {
        id: row.material_id,
        name: row.material_name.clone(),
        type_name: row.type_name.clone(),
        unit_price: format_decimal(row.unit_price),
        in_stock: row.quantity_in_stock,
        min_quantity: row.min_quantity,
        unit: row.unit_of_measure.clone(),
    }
}

#[derive(Tabled)]
struct TypeRowDisplay {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "NAME")]
    name: String,
}

#[derive(Tabled)]
struct UsageRowDisplay {
    #[tabled(rename = "PRODUCT")]
    product: String,
    #[tabled(rename = "REQUIRED QTY")]
    required_quantity: String,
}

/// Re-fetch the full material list and rebuild the table from scratch.
/// Called after every successful mutation, and by `mat list` itself.
fn refresh_list(store: &Store, format: OutputFormat) -> Result<()> {
    let rows = store.list_materials().into_diagnostic()?;
    table::print_rows(&rows, material_display, format, "No materials found.")
}

/// Resolve the target material: explicit id, or a single-row selection over
/// the freshly fetched list when running interactively.
fn resolve_material_id(store: &Store, id: Option<i32>, action: &str) -> Result<i32> {
    if let Some(id) = id {
        return Ok(id);
    }
    let rows = store.list_materials().into_diagnostic()?;
    if rows.is_empty() {
        return Err(miette!("no materials to {action}"));
    }
    let items: Vec<String> = rows
        .iter()
        .map(|r| format!("{} - {} ({})", r.material_id, r.material_name, r.type_name))
        .collect();
    let index = prompt::select(&format!("Select a material to {action}"), &items)?;
    Ok(rows[index].material_id)
}

/// Reject an omitted id outright when there is no terminal to select on
fn require_id_or_terminal(id: Option<i32>) -> Result<()> {
    if id.is_none() && !stdin_is_interactive() {
        return Err(miette!(
            "material id required when not running interactively"
        ));
    }
    Ok(())
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    refresh_list(&store, global.format)
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    require_id_or_terminal(args.id)?;
    let store = open_store(global)?;
    let id = resolve_material_id(&store, args.id, "show")?;
    let material = store.get_material(id).into_diagnostic()?;

    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&material).into_diagnostic()?;
            println!("{json}");
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.serialize(&material).into_diagnostic()?;
            writer.flush().into_diagnostic()?;
        }
        OutputFormat::Table => print_material(&store, &material)?,
    }
    Ok(())
}

fn print_material(store: &Store, material: &Material) -> Result<()> {
    let type_name = store
        .list_material_types()
        .into_diagnostic()?
        .into_iter()
        .find(|t| t.material_type_id == material.material_type_id)
        .map(|t| t.type_name)
        .unwrap_or_else(|| format!("type {}", material.material_type_id));

    println!("{}", style("─".repeat(50)).dim());
    println!(
        "{}: {}",
        style("ID").bold(),
        style(material.material_id).cyan()
    );
    println!(
        "{}: {}",
        style("Name").bold(),
        style(&material.material_name).yellow()
    );
    println!("{}: {}", style("Type").bold(), type_name);
    println!(
        "{}: {}",
        style("Unit price").bold(),
        format_decimal(material.unit_price)
    );
    println!(
        "{}: {}",
        style("In stock").bold(),
        material.quantity_in_stock
    );
    println!(
        "{}: {}",
        style("Minimum quantity").bold(),
        material.min_quantity
    );
    println!(
        "{}: {}",
        style("Package quantity").bold(),
        format_decimal(material.package_quantity)
    );
    println!(
        "{}: {}",
        style("Unit of measure").bold(),
        material.unit_of_measure
    );
    println!("{}", style("─".repeat(50)).dim());
    Ok(())
}

fn run_new(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    if !args.interactive {
        // The fully-flagged path validates before the store is touched.
        if let Some(draft) = args.draft() {
            draft.validate().into_diagnostic()?;
            let store = open_store(global)?;
            let id = store.add_material(&draft).into_diagnostic()?;
            println!(
                "{} Added material {} ({})",
                style("✓").green(),
                style(id).cyan(),
                draft.name
            );
            return refresh_list(&store, global.format);
        }
        if !stdin_is_interactive() {
            return Err(miette!(
                "missing fields: pass --name, --type, --price, --quantity, \
                 --min-quantity, --package-quantity and --unit, or run interactively"
            ));
        }
    } else if !stdin_is_interactive() {
        return Err(miette!("interactive mode needs a terminal"));
    }

    let store = open_store(global)?;
    let types = fetch_types(&store)?;
    let mut seed = args.seed();
    loop {
        let draft = prompt::material_form(&types, &seed)?;
        if let Err(err) = draft.validate() {
            eprintln!("{} {}", style("✗").red(), err);
            seed = MaterialFormSeed::from(&draft);
            continue;
        }
        match store.add_material(&draft) {
            Ok(id) => {
                println!(
                    "{} Added material {} ({})",
                    style("✓").green(),
                    style(id).cyan(),
                    draft.name
                );
                break;
            }
            Err(err) => {
                eprintln!("{} {}", style("✗").red(), err);
                seed = MaterialFormSeed::from(&draft);
                if !prompt::confirm("Try again?")? {
                    println!("{}", style("Cancelled.").dim());
                    return Ok(());
                }
            }
        }
    }
    refresh_list(&store, global.format)
}

fn run_edit(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    require_id_or_terminal(args.id)?;
    let fields_given = args.has_any_field();
    if !fields_given && !args.interactive && !stdin_is_interactive() {
        return Err(miette!(
            "nothing to change: pass field flags or run interactively"
        ));
    }
    if args.interactive && !stdin_is_interactive() {
        return Err(miette!("interactive mode needs a terminal"));
    }

    let store = open_store(global)?;
    let id = resolve_material_id(&store, args.id, "edit")?;
    let current = store.get_material(id).into_diagnostic()?;

    let mut draft = MaterialDraft::from(&current);
    args.apply_to(&mut draft);

    if fields_given && !args.interactive {
        draft.validate().into_diagnostic()?;
        store.update_material(id, &draft).into_diagnostic()?;
        println!(
            "{} Updated material {} ({})",
            style("✓").green(),
            style(id).cyan(),
            draft.name
        );
        return refresh_list(&store, global.format);
    }

    let types = fetch_types(&store)?;
    let mut seed = MaterialFormSeed::from(&draft);
    loop {
        let candidate = prompt::material_form(&types, &seed)?;
        if let Err(err) = candidate.validate() {
            eprintln!("{} {}", style("✗").red(), err);
            seed = MaterialFormSeed::from(&candidate);
            continue;
        }
        match store.update_material(id, &candidate) {
            Ok(()) => {
                println!(
                    "{} Updated material {} ({})",
                    style("✓").green(),
                    style(id).cyan(),
                    candidate.name
                );
                break;
            }
            Err(err) => {
                eprintln!("{} {}", style("✗").red(), err);
                seed = MaterialFormSeed::from(&candidate);
                if !prompt::confirm("Try again?")? {
                    println!("{}", style("Cancelled.").dim());
                    return Ok(());
                }
            }
        }
    }
    refresh_list(&store, global.format)
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    if !args.yes && !stdin_is_interactive() {
        return Err(miette!(
            "confirmation required: pass --yes to delete without a prompt"
        ));
    }
    require_id_or_terminal(args.id)?;

    let store = open_store(global)?;
    let id = resolve_material_id(&store, args.id, "delete")?;
    let material = store.get_material(id).into_diagnostic()?;

    if !args.yes {
        let question = format!("Delete material {} ({})?", id, material.material_name);
        if !prompt::confirm(&question)? {
            println!("{}", style("Cancelled.").dim());
            return Ok(());
        }
    }

    store.delete_material(id).into_diagnostic()?;
    println!(
        "{} Deleted material {} ({})",
        style("✓").green(),
        style(id).cyan(),
        material.material_name
    );
    refresh_list(&store, global.format)
}

fn run_usage(args: UsageArgs, global: &GlobalOpts) -> Result<()> {
    require_id_or_terminal(args.id)?;
    let store = open_store(global)?;
    let id = resolve_material_id(&store, args.id, "inspect")?;
    let material = store.get_material(id).into_diagnostic()?;
    let rows = store.products_using(id).into_diagnostic()?;

    if global.format == OutputFormat::Table {
        println!(
            "{} {}",
            style("Products using").bold(),
            style(&material.material_name).yellow()
        );
    }
    table::print_rows(
        &rows,
        usage_display,
        global.format,
        "Not used by any product.",
    )
}

fn usage_display(row: &ProductUsage) -> UsageRowDisplay {
    UsageRowDisplay {
        product: row.product_name.clone(),
        required_quantity: format_decimal(row.required_quantity),
    }
}

fn run_types(global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let rows = store.list_material_types().into_diagnostic()?;
    table::print_rows(
        &rows,
        |t: &MaterialType| TypeRowDisplay {
            id: t.material_type_id,
            name: t.type_name.clone(),
        },
        global.format,
        "No material types found.",
    )
}

fn fetch_types(store: &Store) -> Result<Vec<MaterialType>> {
    let types = store.list_material_types().into_diagnostic()?;
    if types.is_empty() {
        return Err(miette!(
            "no material types exist; add one to the store first"
        ));
    }
    Ok(types)
}
