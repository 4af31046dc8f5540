use isq_core::units::{ampere, kilogram, meter, second};
use isq_core::{DerivedUnitRegistry, FormatOptions, QuantityFormatter, QuantityResult, QuantityValue};
use std::f64::consts::PI;
use tracing::{info, warn};

const OPTIONS_ENV: &str = "ISQ_FORMAT";

/// Registry of the common SI derived units, composed from base units.
fn si_derived_units() -> QuantityResult<DerivedUnitRegistry> {
    let newton = kilogram().multiply(meter())?.divide(second().powi(2)?)?;
    let joule = newton.multiply(meter())?;
    let watt = joule.divide(second())?;
    let volt = watt.divide(ampere())?;
    let pascal = newton.divide(meter().powi(2)?)?;
    let hertz = second().invert()?;

    Ok(DerivedUnitRegistry::new()
        .with_unit("N", &newton)
        .with_unit("Pa", &pascal)
        .with_unit("J", &joule)
        .with_unit("W", &watt)
        .with_unit("V", &volt)
        .with_unit("Hz", &hertz))
}

fn load_options() -> FormatOptions {
    match std::env::var(OPTIONS_ENV) {
        Ok(json) => FormatOptions::from_json(&json).unwrap_or_else(|e| {
            warn!("Ignoring {}: {}", OPTIONS_ENV, e);
            FormatOptions::default()
        }),
        Err(_) => FormatOptions::default(),
    }
}

fn print_row(formatter: &QuantityFormatter, label: &str, value: &QuantityValue) {
    match formatter.format(value) {
        Ok(text) => println!("{:>12}: {}", label, text),
        Err(e) => warn!("Could not format {}: {}", label, e),
    }
}

fn measurements(formatter: &QuantityFormatter) -> QuantityResult<()> {
    println!("Uncertainty digits for a 10 km baseline");
    for exponent in -4..=3 {
        let uncertainty = 10f64.powi(exponent);
        let baseline = QuantityValue::new(10000.0, "m", uncertainty)?;
        print_row(formatter, &format!("u = {}", uncertainty), &baseline);
    }

    println!();
    println!("Pendulum estimate of g");
    let length = QuantityValue::new(1.0, "m", 0.002)?;
    let period = QuantityValue::new(2.006, "s", 0.005)?;
    let g = length.multiply(4.0 * PI * PI)?.divide(period.powi(2)?)?;
    print_row(formatter, "L", &length);
    print_row(formatter, "T", &period);
    print_row(formatter, "g", &g);

    println!();
    println!("Derived quantities");
    let mass = QuantityValue::new(2.5, "kg", 0.01)?;
    let force = mass.multiply(&g)?;
    let work = force.multiply(QuantityValue::new(0.75, "m", 0.001)?)?;
    let power = work.divide(QuantityValue::new(1.5, "s", 0.02)?)?;
    print_row(formatter, "F = m g", &force);
    print_row(formatter, "W = F d", &work);
    print_row(formatter, "P = W / t", &power);
    print_row(formatter, "f = 1 / T", &period.invert()?);

    let speed = QuantityValue::new(3.0, "m s^-1", 0.1)?;
    if let Err(e) = speed.add(&period) {
        warn!("{}", e);
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();

    info!("isq {}", isq_core::version());

    let options = load_options();
    let registry = match si_derived_units() {
        Ok(registry) => registry,
        Err(e) => {
            warn!("Falling back to base units only: {}", e);
            DerivedUnitRegistry::new()
        }
    };
    info!("Loaded {} derived units", registry.len());

    let formatter = QuantityFormatter::new(options).with_registry(&registry);
    if let Err(e) = measurements(&formatter) {
        warn!("Measurement table failed: {}", e);
    }
}
