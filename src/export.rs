use std::io;
use std::path::Path;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use crate::error::Result;
use crate::models::PriceBreakdown;

fn money(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Write a breakdown as CSV rows: one per ingredient, then extras and the total.
pub fn write_receipt<W: io::Write>(breakdown: &PriceBreakdown, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["item", "units", "unit_price", "total"])?;

    for line in breakdown.lines() {
        wtr.write_record([
            line.name.clone(),
            line.units.normalize().to_string(),
            money(line.unit_price),
            money(line.total),
        ])?;
    }

    if breakdown.non_dairy_surcharge.applied {
        wtr.write_record([
            "Non-dairy milk".to_string(),
            String::new(),
            String::new(),
            money(breakdown.non_dairy_surcharge.amount),
        ])?;
    }
    if breakdown.decaf_discount.applied {
        wtr.write_record([
            "Decaf".to_string(),
            String::new(),
            String::new(),
            money(-breakdown.decaf_discount.amount),
        ])?;
    }

    wtr.write_record([
        "Total".to_string(),
        String::new(),
        String::new(),
        money(breakdown.total),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Write a breakdown to a CSV file.
pub fn export_receipt(breakdown: &PriceBreakdown, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_receipt(breakdown, file)?;
    info!(path = %path.display(), blend = %breakdown.blend_name, "exported receipt");
    Ok(())
}
