use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use isa_core::{
    crossover_altitude, isa_altitude, AtmosphereState, IsaFloat, KelvinDelta, Metres,
    MetresPerSecond, Pascals,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// ISA atmosphere and airspeed calculator
#[derive(Parser, Debug)]
#[command(name = "isa-calc")]
#[command(about = "International Standard Atmosphere and BADA airspeed calculator", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print an ISA table: altitude, pressure, temperature, density, speed of sound
    Table {
        /// First altitude in metres
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        from: f64,

        /// Last altitude in metres
        #[arg(long, default_value_t = 20_000.0, allow_negative_numbers = true)]
        to: f64,

        /// Altitude step in metres
        #[arg(long, default_value_t = 1000.0, value_parser = positive_step)]
        step: f64,

        /// Offset from ISA sea-level temperature in Kelvin
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        delta_temperature: f64,

        /// Evaluate in single precision
        #[arg(long)]
        single_precision: bool,
    },

    /// Pressure altitude for a static pressure
    Altitude {
        /// Static pressure in pascals
        #[arg(short, long, allow_negative_numbers = true)]
        pressure: f64,
    },

    /// True air speed for a calibrated air speed
    Tas {
        /// Calibrated air speed in m/s
        #[arg(long)]
        cas: f64,

        /// Pressure altitude in metres
        #[arg(short, long, allow_negative_numbers = true)]
        altitude: f64,

        /// Offset from ISA sea-level temperature in Kelvin
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        delta_temperature: f64,
    },

    /// Calibrated air speed for a true air speed
    Cas {
        /// True air speed in m/s
        #[arg(long)]
        tas: f64,

        /// Pressure altitude in metres
        #[arg(short, long, allow_negative_numbers = true)]
        altitude: f64,

        /// Offset from ISA sea-level temperature in Kelvin
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        delta_temperature: f64,
    },

    /// Altitude at which a CAS and a Mach number give the same true air speed
    Crossover {
        /// Calibrated air speed in m/s
        #[arg(long)]
        cas: f64,

        /// Mach number
        #[arg(short, long, allow_negative_numbers = true)]
        mach: f64,
    },
}

/// Upper bound on the rows a single table prints
const MAX_TABLE_ROWS: u32 = 100_000;

fn positive_step(s: &str) -> Result<f64, String> {
    let step: f64 = s.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if step > 0.0 && step.is_finite() {
        Ok(step)
    } else {
        Err(format!("step must be a positive number of metres, got {s}"))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(command = ?args.command, "parsed arguments");

    match run(&args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Command) -> Result<(), Box<dyn Error>> {
    match *command {
        Command::Table {
            from,
            to,
            step,
            delta_temperature,
            single_precision,
        } => {
            let rows = table_rows(from, to, step)?;
            if single_precision {
                print_table::<f32>(from, step, rows, delta_temperature)?;
            } else {
                print_table::<f64>(from, step, rows, delta_temperature)?;
            }
            Ok(())
        }
        Command::Altitude { pressure } => {
            let pressure = Pascals::new(pressure);
            let altitude = isa_altitude(pressure)?;
            println!(
                "Pressure altitude: {altitude:.2} ({:.2} hPa)",
                pressure.to_hectopascals()
            );
            Ok(())
        }
        Command::Tas {
            cas,
            altitude,
            delta_temperature,
        } => {
            let state =
                AtmosphereState::at(Metres::new(altitude), KelvinDelta::new(delta_temperature))?;
            print_conditions(&state);
            println!("TAS: {:.3}", state.true_air_speed(MetresPerSecond::new(cas))?);
            Ok(())
        }
        Command::Cas {
            tas,
            altitude,
            delta_temperature,
        } => {
            let state =
                AtmosphereState::at(Metres::new(altitude), KelvinDelta::new(delta_temperature))?;
            print_conditions(&state);
            println!(
                "CAS: {:.3}",
                state.calibrated_air_speed(MetresPerSecond::new(tas))?
            );
            Ok(())
        }
        Command::Crossover { cas, mach } => {
            let cas = MetresPerSecond::new(cas);
            let altitude = crossover_altitude(cas, mach)?;
            let state = AtmosphereState::standard(altitude)?;
            println!("Crossover altitude: {altitude:.1}");
            println!("TAS from CAS:  {:.3}", state.true_air_speed(cas)?);
            println!("TAS from Mach: {:.3}", state.mach_true_air_speed(mach)?);
            Ok(())
        }
    }
}

fn print_conditions(state: &AtmosphereState) {
    println!(
        "At {:.0} (ISA {:+.1} K): {:.1}, {:.2}",
        state.altitude(),
        *state.delta_temperature(),
        state.pressure(),
        state.temperature()
    );
}

/// Number of table rows after the first for altitudes `from..=to` in steps of
/// `step`. An inverted range gives no rows at all.
fn table_rows(from: f64, to: f64, step: f64) -> Result<Option<u32>, String> {
    let span = to - from;
    if span < 0.0 {
        return Ok(None);
    }
    let rows = (span / step).floor();
    if rows.is_nan() || rows >= f64::from(MAX_TABLE_ROWS) {
        return Err(format!(
            "table from {from} m to {to} m in steps of {step} m exceeds {MAX_TABLE_ROWS} rows"
        ));
    }
    // non-negative integer below MAX_TABLE_ROWS
    #[allow(clippy::cast_sign_loss)]
    let rows = rows as u32;
    Ok(Some(rows))
}

/// Print the header and `rows + 1` altitudes starting at `from`
fn print_table<T: IsaFloat>(
    from: f64,
    step: f64,
    rows: Option<u32>,
    delta_temperature: f64,
) -> Result<(), Box<dyn Error>> {
    let narrow = |v: f64| T::from_f64(v).unwrap_or_else(T::nan);
    let delta_temperature = KelvinDelta::new(narrow(delta_temperature));

    println!(
        "{:>10} {:>12} {:>10} {:>10} {:>10}",
        "h [m]", "p [Pa]", "T [K]", "rho", "a [m/s]"
    );

    let Some(rows) = rows else {
        return Ok(());
    };
    for row in 0..=rows {
        let altitude = from + step * f64::from(row);
        let state = AtmosphereState::at(Metres::new(narrow(altitude)), delta_temperature)?;
        println!(
            "{:>10.0} {:>12.2} {:>10.3} {:>10.5} {:>10.3}",
            *state.altitude(),
            *state.pressure(),
            *state.temperature(),
            *state.density(),
            *state.speed_of_sound()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_inclusive() {
        assert_eq!(table_rows(0.0, 20_000.0, 1000.0), Ok(Some(20)));
        assert_eq!(table_rows(0.0, 999.0, 1000.0), Ok(Some(0)));
        assert_eq!(table_rows(500.0, 500.0, 10.0), Ok(Some(0)));
    }

    #[test]
    fn test_table_rows_inverted_range_is_empty() {
        assert_eq!(table_rows(1000.0, 0.0, 100.0), Ok(None));
    }

    #[test]
    fn test_table_rows_rejects_tiny_step() {
        assert!(table_rows(0.0, 20_000.0, 1e-12).is_err());
        assert!(table_rows(0.0, 1.0, f64::MIN_POSITIVE).is_err());
    }

    #[test]
    fn test_positive_step() {
        assert_eq!(positive_step("250"), Ok(250.0));
        assert!(positive_step("0").is_err());
        assert!(positive_step("-5").is_err());
        assert!(positive_step("inf").is_err());
        assert!(positive_step("abc").is_err());
    }
}
