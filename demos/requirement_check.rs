use plateload::{format_number, DeformationSource, Locale, MaterialCategory, TestInputs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let inputs = TestInputs {
        material: MaterialCategory::PavementStructure,
        pressure: 0.6,
        plate_diameter: 76.0,
        deformation: DeformationSource::Direct(1.4),
        required_modulus: Some(180.0),
    };
    inputs.validate()?;

    let outcome = inputs.run();
    if let Some(comparison) = &outcome.evaluation.comparison {
        println!(
            "{}: {}% of the required {} MPa",
            comparison.status,
            format_number(comparison.ratio, 1, Locale::English),
            format_number(comparison.required, 2, Locale::English)
        );
    }
    println!("{}", outcome.evaluation.details);

    Ok(())
}
