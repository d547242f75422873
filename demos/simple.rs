use plateload::{
    calculate_elastic_modulus, evaluate, resolve_deformation, GaugeReadingPair, MaterialCategory,
};

fn main() {
    // Subgrade soil tested with the recommended 76 cm plate at 0.5 MPa
    let mu = MaterialCategory::SubgradeSoil.poisson_ratio();
    let deformation = resolve_deformation(GaugeReadingPair::new(112.0, 47.0).into());

    // Evaluate on the absolute scale
    let modulus = calculate_elastic_modulus(0.5, 76.0, mu, deformation);
    let verdict = evaluate(modulus, None);

    match modulus {
        Some(modulus) => println!("E = {modulus:.2} MPa ({})", verdict.status),
        None => println!("E is undefined: {}", verdict.details),
    }
}
