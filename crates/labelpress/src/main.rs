//! labelpress: render price labels with barcodes from spreadsheet rows

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use label_engine::{
    default_queue, generate_labels, read_labels, FontConfig, LabelFonts, LabelRecord,
};
use log::warn;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "labelpress",
    version,
    about = "Generate printable 80x30mm price labels with Code 128 barcodes"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the spreadsheet rows with their selectable indices
    List {
        /// Spreadsheet with columns Item Name, Tamil, MRP, SP, Barcode
        input: PathBuf,
    },
    /// Render selected rows into a multi-page label PDF
    Generate(GenerateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Spreadsheet with columns Item Name, Tamil, MRP, SP, Barcode
    #[arg(required_unless_present = "job")]
    input: Option<PathBuf>,

    /// Row index to include (repeatable; order defines page order)
    #[arg(long = "row", value_name = "INDEX")]
    rows: Vec<usize>,

    /// Override the MRP text of a selected row
    #[arg(long = "mrp", value_name = "INDEX=TEXT", value_parser = parse_override)]
    mrp_overrides: Vec<(usize, String)>,

    /// Override the SP text of a selected row
    #[arg(long = "sp", value_name = "INDEX=TEXT", value_parser = parse_override)]
    sp_overrides: Vec<(usize, String)>,

    /// Read the label records from a JSON file instead of a spreadsheet
    #[arg(long, value_name = "FILE", conflicts_with_all = ["input", "rows", "mrp_overrides", "sp_overrides"])]
    job: Option<PathBuf>,

    /// Output PDF path
    #[arg(short, long, default_value = "labels.pdf")]
    output: PathBuf,

    /// Send the finished PDF to the default printer (best effort)
    #[arg(long)]
    print: bool,

    /// Directory holding the font assets
    #[arg(long, default_value = "fonts")]
    fonts_dir: PathBuf,

    /// Latin regular TTF (default: <fonts-dir>/NotoSans-Regular.ttf)
    #[arg(long, value_name = "PATH")]
    label_font: Option<PathBuf>,

    /// Latin bold TTF (default: <fonts-dir>/NotoSans-Bold.ttf)
    #[arg(long, value_name = "PATH")]
    label_bold_font: Option<PathBuf>,

    /// Script TTF (default: <fonts-dir>/NotoSansTamil-Regular.ttf)
    #[arg(long, value_name = "PATH")]
    script_font: Option<PathBuf>,

    /// Currency-glyph TTF (default: the script font)
    #[arg(long, value_name = "PATH")]
    currency_font: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::List { input } => run_list(&input),
        Command::Generate(args) => run_generate(args),
    }
}

fn run_list(input: &PathBuf) -> Result<()> {
    let table = read_labels(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    println!("{:>4}  {:<28} {:<20} {:>10} {:>10}  {}", "row", "Item Name", "Tamil", "MRP", "SP", "Barcode");
    for (index, record) in table.iter().enumerate() {
        println!(
            "{index:>4}  {:<28} {:<20} {:>10} {:>10}  {}",
            record.item_name, record.localized_name, record.mrp, record.sp, record.barcode
        );
    }

    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    // Fonts are a startup requirement; resolve them before touching input
    let fonts = LabelFonts::load(&font_config(&args)).context("font assets unavailable")?;

    let records = if let Some(job) = &args.job {
        let file = fs::File::open(job)
            .with_context(|| format!("failed to open job file {}", job.display()))?;
        serde_json::from_reader::<_, Vec<LabelRecord>>(file)
            .with_context(|| format!("invalid job file {}", job.display()))?
    } else {
        let input = args
            .input
            .as_ref()
            .ok_or_else(|| anyhow!("either a spreadsheet or --job is required"))?;
        let table = read_labels(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        select_rows(&table, &args.rows, &args.mrp_overrides, &args.sp_overrides)?
    };

    if records.is_empty() {
        println!("no rows selected; nothing to generate");
        return Ok(());
    }

    let pdf = generate_labels(&records, &fonts)?;
    fs::write(&args.output, &pdf)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("wrote {} ({} labels)", args.output.display(), records.len());

    if args.print {
        match default_queue().submit(&pdf) {
            Ok(()) => println!("sent to default printer"),
            Err(e) => {
                // Best effort: generation and the written file stand
                warn!("print submission failed: {e}");
                eprintln!("print failed: {e}");
            }
        }
    }

    Ok(())
}

fn font_config(args: &GenerateArgs) -> FontConfig {
    let mut config = FontConfig::from_dir(&args.fonts_dir);
    if let Some(path) = &args.label_font {
        config.label_regular = path.clone();
    }
    if let Some(path) = &args.label_bold_font {
        config.label_bold = path.clone();
    }
    if let Some(path) = &args.script_font {
        config.script = path.clone();
    }
    config.currency = args.currency_font.clone();
    config
}

/// Pick rows by index, applying per-row price overrides
fn select_rows(
    table: &[LabelRecord],
    rows: &[usize],
    mrp_overrides: &[(usize, String)],
    sp_overrides: &[(usize, String)],
) -> Result<Vec<LabelRecord>> {
    let mrp: HashMap<usize, &str> = mrp_overrides
        .iter()
        .map(|(i, text)| (*i, text.as_str()))
        .collect();
    let sp: HashMap<usize, &str> = sp_overrides
        .iter()
        .map(|(i, text)| (*i, text.as_str()))
        .collect();

    rows.iter()
        .map(|&index| {
            let record = table.get(index).ok_or_else(|| {
                anyhow!(
                    "row {index} is out of range (spreadsheet has {} rows)",
                    table.len()
                )
            })?;
            Ok(record
                .clone()
                .with_price_overrides(mrp.get(&index).copied(), sp.get(&index).copied()))
        })
        .collect()
}

fn parse_override(value: &str) -> std::result::Result<(usize, String), String> {
    let (index, text) = value
        .split_once('=')
        .ok_or_else(|| format!("expected INDEX=TEXT, got '{value}'"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("'{index}' is not a row index"))?;
    Ok((index, text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<LabelRecord> {
        vec![
            LabelRecord::new("Rice 1kg", "அரிசி", "60", "55", "8901234567890"),
            LabelRecord::new("Dal 500g", "பருப்பு", "80", "72", "8901234567891"),
            LabelRecord::new("Soap", "சோப்பு", "30", "25", "8901234567892"),
        ]
    }

    #[test]
    fn test_parse_override() {
        assert_eq!(parse_override("2=45.00").unwrap(), (2, "45.00".to_string()));
        assert_eq!(parse_override("0=N/A").unwrap(), (0, "N/A".to_string()));
        // Values may themselves contain '='
        assert_eq!(parse_override("1=a=b").unwrap(), (1, "a=b".to_string()));
        assert!(parse_override("45.00").is_err());
        assert!(parse_override("x=45").is_err());
    }

    #[test]
    fn test_select_rows_keeps_order() {
        let selected = select_rows(&table(), &[2, 0], &[], &[]).unwrap();
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].item_name, "Soap");
        assert_eq!(selected[1].item_name, "Rice 1kg");
    }

    #[test]
    fn test_select_rows_applies_overrides() {
        let selected = select_rows(
            &table(),
            &[0, 1],
            &[(0, "58".to_string())],
            &[(1, "70.50".to_string())],
        )
        .unwrap();

        assert_eq!(selected[0].mrp, "58");
        assert_eq!(selected[0].sp, "55");
        assert_eq!(selected[1].mrp, "80");
        assert_eq!(selected[1].sp, "70.50");
    }

    #[test]
    fn test_select_rows_out_of_range() {
        assert!(select_rows(&table(), &[7], &[], &[]).is_err());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
