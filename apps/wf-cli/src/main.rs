mod case;
mod error;
mod output;

use clap::{Parser, Subcommand};
use error::{CliError, CliResult};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wf_core::linspace;
use wf_flow::geometry::DEFAULT_ROUGHNESS_IN;
use wf_flow::{
    BeggsBrill, Correlation, Flowline, FlowlineModel, FluidProperties, FluidState, PipeGeometry,
    PressureGradient, available_flowline_models, available_models,
};
use wf_fluids::{BubblePoint, PvtTable, ZMethod};
use wf_nodal::available_inflow_models;

#[derive(Parser)]
#[command(name = "wf-cli")]
#[command(about = "WellFlow CLI - Multiphase well performance and nodal analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available inflow, outflow and flowline models
    Models,
    /// Evaluate a pressure gradient at one point
    Gradient {
        /// Correlation name (beggs_brill, hagedorn_brown)
        #[arg(long, default_value = "beggs_brill")]
        correlation: String,
        /// Superficial liquid velocity, ft/s
        #[arg(long)]
        vsl: f64,
        /// Superficial gas velocity, ft/s
        #[arg(long)]
        vsg: f64,
        /// Pipe inner diameter, in
        #[arg(long, default_value_t = 2.992)]
        diameter_in: f64,
        /// Inclination from horizontal, degrees
        #[arg(long, default_value_t = 0.0)]
        angle: f64,
        /// Liquid density, lbm/ft³
        #[arg(long, default_value_t = 55.0)]
        rho_l: f64,
        /// Gas density, lbm/ft³
        #[arg(long, default_value_t = 3.0)]
        rho_g: f64,
        /// Liquid viscosity, cP
        #[arg(long, default_value_t = 1.0)]
        mu_l: f64,
        /// Gas viscosity, cP
        #[arg(long, default_value_t = 0.02)]
        mu_g: f64,
        /// Surface tension, dyn/cm
        #[arg(long)]
        sigma: Option<f64>,
        /// Absolute pressure for the acceleration term, psia
        #[arg(long)]
        pressure: Option<f64>,
    },
    /// Tabulate black-oil PVT properties
    Pvt {
        /// Temperature, °F
        #[arg(long)]
        temperature: f64,
        /// Oil gravity, °API
        #[arg(long)]
        api: f64,
        /// Gas specific gravity (air = 1)
        #[arg(long)]
        gas_gravity: f64,
        /// z-factor method (papay, ideal)
        #[arg(long, default_value = "papay")]
        z_method: String,
        #[arg(long, default_value_t = 100.0)]
        p_min: f64,
        #[arg(long, default_value_t = 5000.0)]
        p_max: f64,
        #[arg(long, default_value_t = 25)]
        steps: usize,
        /// Bubble-point pressure, psia
        #[arg(long)]
        bubble_point: Option<f64>,
        /// Solution gas ratio at the bubble point, scf/STB
        #[arg(long)]
        rsb: Option<f64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Build the outflow curve for a well case
    Outflow {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Write the curve to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Solve the bottomhole operating point for a well case
    Nodal {
        /// Path to the case YAML file
        case_path: PathBuf,
        /// Write the sampled curves to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print the full solution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pressure drop across a surface flowline
    Flowline {
        /// Model name (darcy, beggs_brill)
        #[arg(long, default_value = "darcy")]
        model: String,
        /// Liquid rate, STB/d
        #[arg(long)]
        rate: f64,
        /// Gas rate, MSCF/d
        #[arg(long, default_value_t = 0.0)]
        gas_rate: f64,
        /// Line length, ft
        #[arg(long)]
        length: f64,
        /// Inner diameter, in
        #[arg(long)]
        diameter_in: f64,
        /// Outlet minus inlet elevation, ft
        #[arg(long, default_value_t = 0.0)]
        elevation: f64,
        /// Liquid density, lbm/ft³
        #[arg(long, default_value_t = 55.0)]
        rho: f64,
        /// Liquid viscosity, cP
        #[arg(long, default_value_t = 1.0)]
        mu: f64,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Models => cmd_models(),
        Commands::Gradient {
            correlation,
            vsl,
            vsg,
            diameter_in,
            angle,
            rho_l,
            rho_g,
            mu_l,
            mu_g,
            sigma,
            pressure,
        } => {
            let mut fluid = FluidProperties::new(rho_l, rho_g, mu_l, mu_g)?;
            if let Some(sigma) = sigma {
                fluid = fluid.with_surface_tension(sigma)?;
            }
            let state = FluidState::new(fluid, vsl, vsg)?;
            let geometry = PipeGeometry::new(diameter_in, DEFAULT_ROUGHNESS_IN, angle)?;
            cmd_gradient(&correlation, &geometry, &state, pressure)
        }
        Commands::Pvt {
            temperature,
            api,
            gas_gravity,
            z_method,
            p_min,
            p_max,
            steps,
            bubble_point,
            rsb,
            json,
        } => {
            let bubble_point = match (bubble_point, rsb) {
                (Some(pressure), Some(solution_gas)) => BubblePoint::Both {
                    pressure,
                    solution_gas,
                },
                (Some(pressure), None) => BubblePoint::Pressure(pressure),
                (None, Some(solution_gas)) => BubblePoint::SolutionGas(solution_gas),
                (None, None) => BubblePoint::MaxPressure,
            };
            let z_method: ZMethod = z_method.parse()?;
            if steps < 1 || !(p_min > 0.0 && p_max >= p_min) {
                return Err(CliError::InvalidInput(format!(
                    "pressure range {p_min}..{p_max} with {steps} steps"
                )));
            }
            let pressures = linspace(p_min, p_max, steps);
            let table = PvtTable::build(
                &pressures,
                temperature,
                api,
                gas_gravity,
                bubble_point,
                z_method,
            )?;
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                print!("{}", output::pvt_text(&table));
            }
            Ok(())
        }
        Commands::Outflow { case_path, csv } => cmd_outflow(&case_path, csv.as_deref()),
        Commands::Nodal {
            case_path,
            csv,
            json,
        } => cmd_nodal(&case_path, csv.as_deref(), json),
        Commands::Flowline {
            model,
            rate,
            gas_rate,
            length,
            diameter_in,
            elevation,
            rho,
            mu,
        } => {
            let model: FlowlineModel = model.parse()?;
            let line = Flowline::new(length, diameter_in, elevation)?;
            let fluid = FluidProperties::liquid(rho, mu)?;
            let dp = model.pressure_drop(&line, rate, gas_rate, &fluid)?;
            println!(
                "Flowline ({}): {:.1} ft, {:.3} in, elevation {:+.1} ft",
                model.name(),
                length,
                diameter_in,
                elevation
            );
            println!("  Pressure drop: {:.2} psi", dp);
            Ok(())
        }
    }
}

fn cmd_models() -> CliResult<()> {
    println!("Inflow models:");
    for name in available_inflow_models() {
        println!("  {}", name);
    }
    println!("\nOutflow models:");
    for name in available_models() {
        println!("  {}", name);
    }
    println!("\nFlowline models:");
    for name in available_flowline_models() {
        println!("  {}", name);
    }
    Ok(())
}

fn cmd_gradient(
    correlation: &str,
    geometry: &PipeGeometry,
    state: &FluidState,
    pressure: Option<f64>,
) -> CliResult<()> {
    let mut model: Correlation = correlation.parse()?;
    if let Some(p) = pressure {
        if matches!(model, Correlation::BeggsBrill(_)) {
            model = Correlation::BeggsBrill(BeggsBrill::with_absolute_pressure(p)?);
        }
    }
    let r = model.gradient(geometry, state)?;

    println!("Correlation: {}", model.name());
    if let Some(regime) = r.regime {
        println!("  Regime:           {}", regime);
    }
    println!("  Holdup:           {:.4}", r.holdup);
    println!("  Mixture density:  {:.3} lbm/ft³", r.mixture_density);
    println!("  Reynolds:         {:.0}", r.reynolds);
    println!("  Friction factor:  {:.5}", r.friction_factor);
    println!("  Elevation:        {:.5} psi/ft", r.elevation_gradient);
    println!("  Friction:         {:.5} psi/ft", r.friction_gradient);
    println!("  Total:            {:.5} psi/ft", r.pressure_gradient);
    Ok(())
}

fn cmd_outflow(case_path: &Path, csv: Option<&Path>) -> CliResult<()> {
    let case = case::load_case(case_path)?;
    let analysis = case.analysis()?;
    let rates = analysis.rate_grid()?;
    let pressures = analysis.outflow.bottomhole_pressures(&rates, &analysis.well)?;

    println!(
        "Outflow ({}) for {}",
        analysis.outflow.name(),
        display_name(&case.name, case_path)
    );
    println!("{:>12} {:>12}", "rate_stb_d", "pwf_psi");
    for (q, p) in rates.iter().zip(&pressures) {
        println!("{:>12.1} {:>12.2}", q, p);
    }

    if let Some(path) = csv {
        std::fs::write(path, output::curve_csv(&rates, &pressures))?;
        println!("✓ Exported {} points to {}", rates.len(), path.display());
    }
    Ok(())
}

fn cmd_nodal(case_path: &Path, csv: Option<&Path>, json: bool) -> CliResult<()> {
    let case = case::load_case(case_path)?;
    let solution = case.analysis()?.solve()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("Nodal analysis: {}\n", display_name(&case.name, case_path));
        print!("{}", output::nodal_summary(&solution));
    }

    if let Some(path) = csv {
        std::fs::write(path, output::nodal_csv(&solution))?;
        if !json {
            println!("✓ Exported {} points to {}", solution.rate_grid.len(), path.display());
        }
    }
    Ok(())
}

fn display_name(name: &str, path: &Path) -> String {
    if name.is_empty() {
        path.display().to_string()
    } else {
        name.to_string()
    }
}
