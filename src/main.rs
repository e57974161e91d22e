use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use eyre::{Context, Result};
use leadstore::config::resolve_db_path;
use leadstore::export::{EXPORT_FILENAME, render_csv};
use leadstore::report::render_chart;
use leadstore::{Fuente, Lead, LeadFilter, NewLead, Store};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leadstore")]
#[command(about = "Registro de leads: guardar, buscar, exportar")]
#[command(version)]
struct Cli {
    /// Database file (default: $LEADS_DB_PATH, then the user data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture a new lead
    Add(AddArgs),

    /// Search stored leads: count, per-fuente chart and results table
    Search {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the result set as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export the filtered result set to CSV
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output file
        #[arg(long, default_value = EXPORT_FILENAME)]
        out: PathBuf,
    },
}

#[derive(Args)]
struct AddArgs {
    /// Free-text subject or interest
    #[arg(long, default_value = "")]
    tema: String,
    #[arg(long, default_value = "")]
    nombre: String,
    #[arg(long, default_value = "")]
    apellido: String,
    #[arg(long, default_value = "")]
    puesto: String,
    #[arg(long, default_value = "")]
    tel_trabajo: String,
    #[arg(long, default_value = "")]
    tel_movil: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    compania: String,
    #[arg(long, default_value = "")]
    web: String,
    #[arg(long, default_value = "")]
    calle1: String,
    #[arg(long, default_value = "")]
    calle2: String,
    #[arg(long, default_value = "")]
    calle3: String,
    #[arg(long, default_value = "")]
    ciudad: String,
    #[arg(long, default_value = "")]
    estado: String,
    #[arg(long, default_value = "")]
    pais: String,
    #[arg(long, default_value = "")]
    notas: String,
    /// Source channel: Web, Evento, Referido, Campaña, Llamada, Email, Otro
    #[arg(long, default_value = "Web")]
    fuente: Fuente,
}

#[derive(Args)]
struct FilterArgs {
    /// Substring matched against name, company, email and the other text fields
    #[arg(long)]
    text: Option<String>,

    /// Restrict to one source channel
    #[arg(long)]
    fuente: Option<Fuente>,

    /// Inclusive start date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Inclusive end date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
}

impl From<AddArgs> for NewLead {
    fn from(args: AddArgs) -> Self {
        NewLead {
            tema: args.tema,
            nombre: args.nombre,
            apellido: args.apellido,
            puesto: args.puesto,
            tel_trabajo: args.tel_trabajo,
            tel_movil: args.tel_movil,
            email: args.email,
            compania: args.compania,
            web: args.web,
            calle1: args.calle1,
            calle2: args.calle2,
            calle3: args.calle3,
            ciudad: args.ciudad,
            estado: args.estado,
            pais: args.pais,
            notas: args.notas,
            fuente: args.fuente.label().to_string(),
        }
    }
}

impl From<FilterArgs> for LeadFilter {
    fn from(args: FilterArgs) -> Self {
        LeadFilter {
            text: args.text,
            fuente: args.fuente.map(|f| f.label().to_string()),
            from: args.from,
            to: args.to,
        }
    }
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store = Store::new(resolve_db_path(cli.db))?;

    match cli.command {
        Commands::Add(args) => {
            let lead: NewLead = args.into();
            store.insert(&lead)?;
            println!("Lead guardado: {} {} — {}", lead.nombre, lead.apellido, lead.tema);
        }
        Commands::Search { filter, json } => {
            let results = store.query(&filter.into())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("{} {}", "Resultados:".bold(), results.len());
                println!();
                println!("{}", render_chart(&results));
                print_table(&results);
            }
        }
        Commands::Export { filter, out } => {
            let results = store.query(&filter.into())?;
            let csv = render_csv(&results);
            fs::write(&out, csv).context(format!("Failed to write {}", out.display()))?;
            println!("{} leads exportados a {}", results.len(), out.display());
        }
    }

    Ok(())
}

/// Compact results table; the CSV export carries the full field set.
fn print_table(leads: &[Lead]) {
    if leads.is_empty() {
        return;
    }

    println!(
        "{}",
        format!(
            "{:<19}  {:<25}  {:<20}  {:<25}  {:<8}  {}",
            "Fecha/Hora", "Nombre", "Compañía", "Correo electrónico", "Fuente", "Tema"
        )
        .bold()
    );
    for lead in leads {
        let nombre = format!("{} {}", lead.nombre, lead.apellido);
        println!(
            "{:<19}  {:<25}  {:<20}  {:<25}  {:<8}  {}",
            lead.created_at,
            nombre.trim(),
            lead.compania,
            lead.email,
            lead.fuente,
            lead.tema
        );
    }
}
