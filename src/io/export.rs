//! CSV export for computed cases.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::report::CaseReport;

/// Column header for CSV case export.
const HEADER: &str = "case,mass_flow_kg_h,fuel_lhv_mj_kg,gas_flow_nm3_h,temp_out_c,temp_ref_c,\
                       co_pct,h2_pct,ch4_pct,lhv_gas_mj_nm3,e_in_mj_h,e_chem_mj_h,e_sens_mj_h,\
                       e_loss_mj_h,cge_pct,gas_quality,efficiency";

/// Exports computed cases to a CSV file at the given path.
///
/// Writes a header row followed by one data row per case. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(reports: &[CaseReport], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(reports, buf)
}

/// Writes computed cases as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(reports: &[CaseReport], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for r in reports {
        let p = &r.inputs;
        let b = &r.balance;
        wtr.write_record(&[
            r.name.clone(),
            format!("{:.3}", p.mass_flow),
            format!("{:.3}", p.fuel_lhv),
            format!("{:.3}", p.gas_flow),
            format!("{:.2}", p.temp_out),
            format!("{:.2}", p.temp_ref),
            format!("{:.3}", p.vol_co),
            format!("{:.3}", p.vol_h2),
            format!("{:.3}", p.vol_ch4),
            format!("{:.4}", b.lhv_gas),
            format!("{:.4}", b.e_in),
            format!("{:.4}", b.e_chem),
            format!("{:.4}", b.e_sens),
            format!("{:.4}", b.e_loss),
            format!("{:.4}", b.cge),
            r.advisory.gas_quality.label().to_string(),
            r.advisory.efficiency.label().to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
