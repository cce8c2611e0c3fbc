// wf-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;

#[inline]
pub fn psi(v: f64) -> Pressure {
    use uom::si::pressure::psi;
    Pressure::new::<psi>(v)
}

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn stb(v: f64) -> Volume {
    use uom::si::volume::barrel;
    Volume::new::<barrel>(v)
}

#[inline]
pub fn deg_f(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_fahrenheit;
    Temperature::new::<degree_fahrenheit>(v)
}

pub fn psi_to_pa(v: f64) -> f64 {
    use uom::si::pressure::pascal;
    psi(v).get::<pascal>()
}

pub fn pa_to_psi(v: f64) -> f64 {
    use uom::si::pressure::{pascal, psi};
    Pressure::new::<pascal>(v).get::<psi>()
}

pub fn stb_to_m3(v: f64) -> f64 {
    use uom::si::volume::cubic_meter;
    stb(v).get::<cubic_meter>()
}

pub fn m3_to_stb(v: f64) -> f64 {
    use uom::si::volume::{barrel, cubic_meter};
    Volume::new::<cubic_meter>(v).get::<barrel>()
}

pub fn ft_to_m(v: f64) -> f64 {
    use uom::si::length::meter;
    ft(v).get::<meter>()
}

pub fn m_to_ft(v: f64) -> f64 {
    use uom::si::length::{foot, meter};
    Length::new::<meter>(v).get::<foot>()
}

pub fn inch_to_ft(v: f64) -> f64 {
    v / constants::INCHES_PER_FT
}

pub fn fahrenheit_to_rankine(v: f64) -> f64 {
    use uom::si::thermodynamic_temperature::degree_rankine;
    deg_f(v).get::<degree_rankine>()
}

/// Liquid rate in STB/d to ft³/s.
pub fn stb_per_day_to_ft3_per_s(q: f64) -> f64 {
    q * constants::FT3_PER_STB / constants::SECONDS_PER_DAY
}

/// Gas rate in MSCF/d to ft³/s.
pub fn mscf_per_day_to_ft3_per_s(q: f64) -> f64 {
    q * constants::FT3_PER_MSCF / constants::SECONDS_PER_DAY
}

pub fn cp_to_lbm_per_ft_s(mu_cp: f64) -> f64 {
    mu_cp * constants::LBM_PER_FT_S_PER_CP
}

/// Reynolds number for a volumetric rate through a circular pipe.
///
/// `q` in ft³/s, `d` in ft, `mu` in cP, `rho` in lbm/ft³.
pub fn reynolds_number(q: f64, d: f64, mu: f64, rho: f64) -> f64 {
    let mu_lbm_ft_s = mu * 0.000672;
    let area = std::f64::consts::PI * (d / 2.0).powi(2);
    let v = q / area;
    rho * v * d / mu_lbm_ft_s
}

pub mod constants {
    /// Standard gravity in ft/s².
    pub const G_FT_S2: f64 = 32.174;

    /// gc in lbm·ft/(lbf·s²).
    pub const GC: f64 = 32.174;

    pub const INCHES_PER_FT: f64 = 12.0;

    /// lbm/ft³ times ft, divided by this, gives psi.
    pub const SQ_IN_PER_SQ_FT: f64 = 144.0;

    pub const FT3_PER_STB: f64 = 5.615;

    pub const FT3_PER_MSCF: f64 = 1000.0;

    pub const SECONDS_PER_DAY: f64 = 86_400.0;

    pub const LBM_PER_FT_S_PER_CP: f64 = 0.000_671_969;

    /// Density of fresh water in lbm/ft³.
    pub const WATER_DENSITY_LBM_FT3: f64 = 62.4;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rel_close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1e-300)
    }

    #[test]
    fn constructors_smoke() {
        let _p = psi(14.7);
        let _l = ft(8000.0);
        let _v = stb(1.0);
        let _t = deg_f(180.0);
    }

    #[test]
    fn psi_to_pa_matches_oilfield_factor() {
        assert!((psi_to_pa(1.0) - 6894.76).abs() < 1e-2);
    }

    #[test]
    fn stb_to_m3_matches_oilfield_factor() {
        assert!((stb_to_m3(1.0) - 0.158987).abs() < 1e-5);
    }

    #[test]
    fn rankine_offset() {
        assert!((fahrenheit_to_rankine(180.0) - 639.67).abs() < 1e-9);
    }

    #[test]
    fn rate_conversions() {
        assert!((stb_per_day_to_ft3_per_s(86_400.0) - 5.615).abs() < 1e-12);
        assert!((mscf_per_day_to_ft3_per_s(86.4) - 1.0).abs() < 1e-12);
        assert!((inch_to_ft(2.992) - 0.249_333_333).abs() < 1e-8);
    }

    #[test]
    fn reynolds_number_laminar() {
        let re = reynolds_number(0.001, 0.1, 10.0, 62.4);
        assert!(re < 2000.0);
    }

    #[test]
    fn reynolds_number_turbulent() {
        let re = reynolds_number(5.0, 0.5, 1.0, 62.4);
        assert!(re > 4000.0);
    }

    proptest! {
        #[test]
        fn pressure_round_trip(p in 1e-3_f64..1e5) {
            prop_assert!(rel_close(pa_to_psi(psi_to_pa(p)), p));
        }

        #[test]
        fn volume_round_trip(v in 1e-3_f64..1e6) {
            prop_assert!(rel_close(m3_to_stb(stb_to_m3(v)), v));
        }

        #[test]
        fn length_round_trip(l in 1e-3_f64..1e5) {
            prop_assert!(rel_close(m_to_ft(ft_to_m(l)), l));
        }
    }
}
