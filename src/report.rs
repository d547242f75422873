use crate::analysis::AnalysisSummary;
use plateload::{
    format_number, format_optional, DeformationSource, Locale, GAUGE_DIVISION_MM,
    GAUGE_LEVER_FACTOR,
};
use std::fmt::Write;

/// Render a textual summary of the plate-load test.
///
/// With `verbose` the worked calculation is included so the result can be
/// checked by hand against the field sheet.
#[must_use]
pub fn render_summary(summary: &AnalysisSummary, locale: Locale, verbose: bool) -> String {
    let inputs = &summary.inputs;
    let outcome = &summary.outcome;
    let num = |value: f64, digits: usize| format_number(value, digits, locale);
    let mut output = String::new();

    writeln!(
        &mut output,
        "Plate-load test on {} (Poisson's ratio µ = {})",
        inputs.material, outcome.poisson_ratio
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Plate diameter D = {} cm, pressure p = {} MPa, recoverable deformation l = {} mm",
        num(inputs.plate_diameter, 0),
        num(inputs.pressure, 3),
        num(outcome.deformation, 3)
    )
    .expect("writing to string cannot fail");

    if verbose {
        render_worked_calculation(&mut output, summary, locale);
    }

    match outcome.elastic_modulus {
        Some(modulus) => writeln!(
            &mut output,
            "Elastic modulus E = {} MPa",
            num(modulus, 2)
        )
        .expect("writing to string cannot fail"),
        None => output.push_str("Elastic modulus E = - (deformation must be greater than 0)\n"),
    }

    let evaluation = &outcome.evaluation;
    if let Some(comparison) = &evaluation.comparison {
        writeln!(
            &mut output,
            "Requirement check: {} ({})",
            comparison.status, evaluation.status
        )
        .expect("writing to string cannot fail");
        writeln!(
            &mut output,
            "  Measured E = {} MPa, required E = {} MPa, ratio = {}%",
            num(comparison.measured, 2),
            num(comparison.required, 2),
            num(comparison.ratio, 1)
        )
        .expect("writing to string cannot fail");
        writeln!(&mut output, "  {}", comparison.details).expect("writing to string cannot fail");
    } else {
        writeln!(&mut output, "Evaluation: {}", evaluation.status)
            .expect("writing to string cannot fail");
        writeln!(&mut output, "  {}", evaluation.details).expect("writing to string cannot fail");
    }

    output
}

/// Append every substitution of the modulus formula.
fn render_worked_calculation(output: &mut String, summary: &AnalysisSummary, locale: Locale) {
    let num = |value: f64, digits: usize| format_number(value, digits, locale);
    let breakdown = &summary.outcome.breakdown;

    output.push_str("Worked calculation:\n");
    if let DeformationSource::Gauge(readings) = summary.inputs.deformation {
        writeln!(
            output,
            "  l = ({} - {}) × {} × {} = {} mm",
            num(readings.after_load, 2),
            num(readings.after_unload, 2),
            GAUGE_LEVER_FACTOR,
            num(GAUGE_DIVISION_MM, 2),
            num(breakdown.deformation, 3)
        )
        .expect("writing to string cannot fail");
    }
    writeln!(
        output,
        "  π = {}, π/4 = {}",
        num(breakdown.pi, 6),
        num(breakdown.shape_coefficient, 6)
    )
    .expect("writing to string cannot fail");
    writeln!(
        output,
        "  D = {} cm = {} mm",
        num(breakdown.diameter_cm, 2),
        num(breakdown.diameter_mm, 2)
    )
    .expect("writing to string cannot fail");
    writeln!(
        output,
        "  (1 - µ²) = (1 - {}²) = {}",
        breakdown.poisson_ratio,
        num(breakdown.reduction_factor, 4)
    )
    .expect("writing to string cannot fail");
    writeln!(
        output,
        "  p × D × (1 - µ²) = {} × {} × {} = {}",
        num(breakdown.pressure, 3),
        num(breakdown.diameter_mm, 2),
        num(breakdown.reduction_factor, 4),
        num(breakdown.loading_term, 4)
    )
    .expect("writing to string cannot fail");
    writeln!(
        output,
        "  E = (π/4) × ({} × {} × {}) / {} = {} MPa",
        num(breakdown.pressure, 3),
        num(breakdown.diameter_mm, 2),
        num(breakdown.reduction_factor, 4),
        num(breakdown.deformation, 3),
        format_optional(breakdown.modulus, 2, locale)
    )
    .expect("writing to string cannot fail");
}

/// Render the summary as pretty-printed JSON.
pub fn render_json(summary: &AnalysisSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
