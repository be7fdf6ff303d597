//! Terminal summary formatting for an assembled sweep.
//!
//! Formatting is kept in one place so the container and model code stay
//! clean and testable, and output changes are localized.

use crate::sweep::ResonatorSweep;

/// Format a one-screen summary: axes, grid shape, and per-table fill.
pub fn format_sweep_summary(sweep: &ResonatorSweep) -> String {
    let (n_temps, n_pwrs) = sweep.index().shape();
    let cells = n_temps * n_pwrs;

    let mut out = String::new();
    out.push_str("=== resonator sweep ===\n");
    out.push_str(&format!(
        "Grid: {n_temps} temperatures x {n_pwrs} powers ({cells} cells)\n"
    ));
    if let (Some(t_lo), Some(t_hi)) = (sweep.tvec().first(), sweep.tvec().last()) {
        out.push_str(&format!("T: [{:.4}, {:.4}] K\n", t_lo, t_hi));
    }
    if let (Some(p_lo), Some(p_hi)) = (sweep.pvec().first(), sweep.pvec().last()) {
        out.push_str(&format!("P: [{:.1}, {:.1}] dBm\n", p_lo, p_hi));
    }

    out.push_str("\nTables:\n");
    for name in sweep.parameter_names() {
        let filled = sweep
            .table(name)
            .map(|t| t.iter().filter(|v| v.is_finite()).count())
            .unwrap_or(0);
        out.push_str(&format!("  {name}: {filled}/{cells} cells\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use crate::domain::{FitStats, MeasurementRecord};

    fn record(itemp: f64, pwr: f64, with_qi: bool) -> MeasurementRecord {
        let mut params = BTreeMap::new();
        if with_qi {
            params.insert("qi".to_string(), 1.0e5);
        }
        MeasurementRecord {
            itemp,
            temp: itemp + 2e-4,
            pwr,
            fmin: 5.0e9,
            params,
            stats: FitStats {
                chisq: 10.0,
                redchi: 1.0,
                nfev: 40,
            },
        }
    }

    #[test]
    fn summary_reports_shape_and_fill() {
        let records = vec![
            record(0.100, -30.0, true),
            record(0.105, -30.0, false),
        ];
        let sweep = ResonatorSweep::from_records(&records).unwrap();
        let summary = format_sweep_summary(&sweep);

        assert!(summary.contains("2 temperatures x 1 powers"));
        assert!(summary.contains("qi: 1/2 cells"));
        assert!(summary.contains("temps: 2/2 cells"));
        assert!(summary.contains("[0.1000, 0.1050] K"));
    }
}
