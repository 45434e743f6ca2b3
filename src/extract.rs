use bill_ingest::assemble::extract_bill;
use bill_ingest::runtime::store::render_record_json;
use bill_ingest::types::{BillLocator, BillType, Extraction};

type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn main() -> Result<(), DynError> {
    tracing_subscriber::fmt::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.len() != 5 {
        eprintln!("Usage: extract <congress> <bill_type> <bill_id> <all_info.html> <text.html>");
        std::process::exit(2);
    }

    let congress: u32 = args[0].parse()?;
    let bill_type: BillType = args[1].parse()?;
    let bill_id: u32 = args[2].parse()?;
    let locator = BillLocator::new(congress, bill_type, bill_id);

    let all_info_html = std::fs::read_to_string(&args[3])?;
    let text_html = std::fs::read_to_string(&args[4])?;

    match extract_bill(&locator, &all_info_html, &text_html)? {
        Extraction::Reserved => println!("reserved"),
        Extraction::Record { record, warnings } => {
            for warning in &warnings {
                tracing::warn!("[Scraper] {}: {}", locator, warning);
            }
            println!("{}", render_record_json(&record)?);
        }
    }
    Ok(())
}
