//! Well case files (YAML).

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wf_flow::outflow::DEFAULT_REFERENCE_PRESSURE;
use wf_flow::{
    BeggsBrill, FluidProperties, GasRate, HagedornBrown, OutflowModel, OutflowModelKind,
    PipeGeometry, Well,
};
use wf_fluids::{BlackOilFluid, ZMethod};
use wf_nodal::{DEFAULT_POINTS, InflowModel, InflowModelKind, NodalAnalysis};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    #[serde(default)]
    pub name: String,
    pub reservoir: ReservoirDef,
    pub inflow: InflowDef,
    pub well: WellDef,
    pub fluid: FluidDef,
    #[serde(default)]
    pub gas: GasDef,
    #[serde(default)]
    pub outflow: OutflowDef,
    #[serde(default)]
    pub grid: GridDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservoirDef {
    pub pressure_psi: f64,
}

/// Inflow model by name; only the parameters that model needs are read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InflowDef {
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub productivity_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laminar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turbulent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bubble_point: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellDef {
    pub depth_ft: f64,
    pub tubing_id_in: f64,
    #[serde(default = "default_roughness")]
    pub roughness_in: f64,
    #[serde(default = "default_inclination")]
    pub inclination_deg: f64,
    #[serde(default)]
    pub wellhead_pressure_psi: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    /// lbm/ft³
    pub liquid_density: f64,
    /// cP
    pub liquid_viscosity: f64,
    #[serde(default = "default_gas_density")]
    pub gas_density: f64,
    #[serde(default = "default_gas_viscosity")]
    pub gas_viscosity: f64,
    /// dyn/cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_tension: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GasDef {
    #[default]
    None,
    Constant {
        rate_mscf_d: f64,
    },
    PerPoint {
        rates_mscf_d: Vec<f64>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutflowDef {
    #[serde(default = "default_outflow_model")]
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friction_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holdup_factor: Option<f64>,
    /// psia, enables the Beggs-Brill acceleration term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_pressure: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pvt: Option<PvtDef>,
}

impl Default for OutflowDef {
    fn default() -> Self {
        Self {
            model: default_outflow_model(),
            friction_factor: None,
            holdup_factor: None,
            absolute_pressure: None,
            pvt: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PvtDef {
    pub temperature_f: f64,
    pub api: f64,
    pub gas_gravity: f64,
    #[serde(default)]
    pub z_method: ZMethod,
    #[serde(default = "default_reference_pressure")]
    pub reference_pressure_psi: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridDef {
    #[serde(default = "default_points")]
    pub points: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rate_stb_d: Option<f64>,
}

impl Default for GridDef {
    fn default() -> Self {
        Self {
            points: default_points(),
            max_rate_stb_d: None,
        }
    }
}

fn default_roughness() -> f64 {
    wf_flow::geometry::DEFAULT_ROUGHNESS_IN
}

fn default_inclination() -> f64 {
    90.0
}

fn default_gas_density() -> f64 {
    wf_flow::state::DEFAULT_GAS_DENSITY
}

fn default_gas_viscosity() -> f64 {
    wf_flow::state::DEFAULT_GAS_VISCOSITY
}

fn default_outflow_model() -> String {
    "darcy".to_string()
}

fn default_reference_pressure() -> f64 {
    DEFAULT_REFERENCE_PRESSURE
}

fn default_points() -> usize {
    DEFAULT_POINTS
}

pub fn load_case(path: &Path) -> CliResult<CaseDef> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::CaseRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| CliError::CaseParse {
        path: path.to_path_buf(),
        source,
    })
}

fn require(value: Option<f64>, model: &str, field: &'static str) -> CliResult<f64> {
    value.ok_or_else(|| CliError::MissingParameter {
        model: model.to_string(),
        field,
    })
}

impl InflowDef {
    pub fn to_model(&self) -> CliResult<InflowModel> {
        let kind: InflowModelKind = self.model.parse()?;
        let name = kind.as_str();
        let model = match kind {
            InflowModelKind::Vogel => InflowModel::Vogel {
                q_max: require(self.q_max, name, "q_max")?,
            },
            InflowModelKind::Fetkovich => InflowModel::Fetkovich {
                productivity_index: require(self.productivity_index, name, "productivity_index")?,
            },
            InflowModelKind::Jones => InflowModel::Jones {
                laminar: require(self.laminar, name, "laminar")?,
                turbulent: self.turbulent.unwrap_or(0.0),
            },
            InflowModelKind::Standing => InflowModel::Standing {
                bubble_point: require(self.bubble_point, name, "bubble_point")?,
                productivity_index: require(self.productivity_index, name, "productivity_index")?,
            },
            InflowModelKind::StandingExponent => InflowModel::StandingExponent {
                q_max: require(self.q_max, name, "q_max")?,
                exponent: self
                    .exponent
                    .unwrap_or(wf_nodal::inflow::DEFAULT_STANDING_EXPONENT),
            },
            InflowModelKind::SkinAdjusted => InflowModel::SkinAdjusted {
                productivity_index: require(self.productivity_index, name, "productivity_index")?,
                skin: self.skin.unwrap_or(0.0),
            },
        };
        Ok(model)
    }
}

impl OutflowDef {
    pub fn to_model(&self) -> CliResult<OutflowModel> {
        let kind: OutflowModelKind = self.model.parse()?;
        let beggs_brill = || match self.absolute_pressure {
            Some(p) => BeggsBrill::with_absolute_pressure(p),
            None => Ok(BeggsBrill::new()),
        };
        let model = match kind {
            OutflowModelKind::Darcy => OutflowModel::Darcy {
                friction_factor: self
                    .friction_factor
                    .unwrap_or(wf_flow::outflow::DEFAULT_DARCY_FRICTION),
            },
            OutflowModelKind::BeggsBrill => OutflowModel::BeggsBrill(beggs_brill()?),
            OutflowModelKind::HagedornBrown => OutflowModel::HagedornBrown(match self.holdup_factor {
                Some(k) => HagedornBrown::new(k)?,
                None => HagedornBrown::default(),
            }),
            OutflowModelKind::BeggsBrillBlackOil => {
                let pvt = self.pvt.as_ref().ok_or_else(|| CliError::MissingParameter {
                    model: kind.as_str().to_string(),
                    field: "pvt",
                })?;
                OutflowModel::BeggsBrillBlackOil {
                    correlation: beggs_brill()?,
                    pvt: BlackOilFluid::new(pvt.temperature_f, pvt.api, pvt.gas_gravity, pvt.z_method)?,
                    reference_pressure: pvt.reference_pressure_psi,
                }
            }
        };
        Ok(model)
    }
}

impl CaseDef {
    pub fn well(&self) -> CliResult<Well> {
        let mut fluid = FluidProperties::new(
            self.fluid.liquid_density,
            self.fluid.gas_density,
            self.fluid.liquid_viscosity,
            self.fluid.gas_viscosity,
        )?;
        if let Some(sigma) = self.fluid.surface_tension {
            fluid = fluid.with_surface_tension(sigma)?;
        }

        let gas = match &self.gas {
            GasDef::None => GasRate::None,
            GasDef::Constant { rate_mscf_d } => GasRate::Constant(*rate_mscf_d),
            GasDef::PerPoint { rates_mscf_d } => GasRate::PerPoint(rates_mscf_d.clone()),
        };

        let well = Well {
            length: self.well.depth_ft,
            geometry: PipeGeometry::new(
                self.well.tubing_id_in,
                self.well.roughness_in,
                self.well.inclination_deg,
            )?,
            fluid,
            wellhead_pressure: self.well.wellhead_pressure_psi,
            gas,
        };
        well.validate()?;
        Ok(well)
    }

    pub fn analysis(&self) -> CliResult<NodalAnalysis> {
        let mut analysis = NodalAnalysis::new(
            self.reservoir.pressure_psi,
            self.inflow.to_model()?,
            self.outflow.to_model()?,
            self.well()?,
        )
        .with_points(self.grid.points);
        analysis.rate_ceiling = self.grid.max_rate_stb_d;
        Ok(analysis)
    }
}
