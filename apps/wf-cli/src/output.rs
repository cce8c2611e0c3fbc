//! Text, CSV and JSON rendering of results.

use std::fmt::Write as _;
use wf_fluids::PvtTable;
use wf_nodal::NodalSolution;

pub const NODAL_CSV_HEADER: &str = "rate_stb_d,pwf_inflow_psi,pwf_outflow_psi";

pub fn nodal_csv(solution: &NodalSolution) -> String {
    let mut csv = String::from(NODAL_CSV_HEADER);
    csv.push('\n');
    for (q, p_in, p_out) in solution.rows() {
        let _ = writeln!(csv, "{},{},{}", q, p_in, p_out);
    }
    csv
}

pub fn curve_csv(rates: &[f64], pressures: &[f64]) -> String {
    let mut csv = String::from("rate_stb_d,pwf_psi\n");
    for (q, p) in rates.iter().zip(pressures) {
        let _ = writeln!(csv, "{},{}", q, p);
    }
    csv
}

pub fn nodal_summary(solution: &NodalSolution) -> String {
    let op = solution.operating_point;
    let mut out = String::new();
    let _ = writeln!(out, "Inflow model:  {}", solution.inflow_model);
    let _ = writeln!(out, "Outflow model: {}", solution.outflow_model);
    let _ = writeln!(out, "Grid points:   {}", solution.rate_grid.len());
    let _ = writeln!(out, "\nOperating point ({:?}):", solution.kind);
    let _ = writeln!(out, "  Rate: {:.2} STB/d", op.rate);
    let _ = writeln!(out, "  Pwf:  {:.2} psi", op.pressure);
    if !solution.flows() {
        let _ = writeln!(out, "  Well does not flow: outflow exceeds inflow at every rate");
    }
    out
}

pub fn pvt_text(table: &PvtTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Bubble point: {:.1} psia (Rsb = {:.1} scf/STB)\n",
        table.bubble_point, table.rs_at_bubble_point
    );
    let _ = writeln!(
        out,
        "{:>10} {:>10} {:>8} {:>7} {:>10}",
        "p_psia", "Rs", "Bo", "z", "Bg"
    );
    for row in &table.rows {
        let _ = writeln!(
            out,
            "{:>10.1} {:>10.2} {:>8.4} {:>7.4} {:>10.6}",
            row.pressure, row.rs, row.bo, row.z, row.bg
        );
    }
    out
}
