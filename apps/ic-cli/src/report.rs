//! Calculation inputs as entered by the user, and the reports printed for them.

use crate::error::CliResult;
use clap::ValueEnum;
use ic_core::units::{as_kilonewtons, as_meganewtons, as_megapascals, m};
use ic_polar::{BowGeometry, ClassFactors, PolarClass, compute_bow_design_load};
use ic_resistance::{HullAngles, HullGeometry, IceConditions, level_ice_resistance};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse a user-entered number that must be finite and non-negative.
pub fn parse_non_negative(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(format!(
            "'{}' is not a valid non-negative numeric value",
            s.trim()
        )),
    }
}

/// Level ice resistance inputs in log-sheet units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResistanceInputs {
    pub length_m: f64,
    pub breadth_m: f64,
    pub draft_m: f64,
    pub speed_kn: f64,
    pub trim_deg: f64,
    pub keel_deg: f64,
    pub side_deg: f64,
    pub ice_thickness_cm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResistanceReport {
    pub inputs: ResistanceInputs,
    pub crushing_kn: f64,
    pub bending_kn: f64,
    pub submersion_kn: f64,
    pub total_kn: f64,
}

impl ResistanceInputs {
    pub fn evaluate(&self) -> CliResult<ResistanceReport> {
        let hull = HullGeometry::new(m(self.length_m), m(self.breadth_m), m(self.draft_m));
        let angles = HullAngles::from_degrees(self.trim_deg, self.keel_deg, self.side_deg);
        let ice = IceConditions::from_cm_and_knots(self.ice_thickness_cm, self.speed_kn);

        let r = level_ice_resistance(&hull, &angles, &ice)?;
        Ok(ResistanceReport {
            inputs: *self,
            crushing_kn: as_kilonewtons(r.components.crushing),
            bending_kn: as_kilonewtons(r.components.bending),
            submersion_kn: as_kilonewtons(r.components.submersion),
            total_kn: as_kilonewtons(r.total),
        })
    }
}

impl ResistanceReport {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if self.inputs.ice_thickness_cm > 0.0 {
            out.push_str(&format!(
                "  Crushing:   {:.2} kN\n  Bending:    {:.2} kN\n  Submersion: {:.2} kN\n",
                self.crushing_kn, self.bending_kn, self.submersion_kn
            ));
        }
        out.push_str(&format!("Ice resistance: {:.2} kN\n", self.total_kn));
        out
    }
}

/// Bow design load inputs in the units of the Polar Class rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BowLoadInputs {
    pub lui_m: f64,
    pub dui_kt: f64,
    #[serde(serialize_with = "serialize_class")]
    pub class: PolarClass,
    pub beta_prime_deg: f64,
    pub alpha_deg: f64,
    pub gamma_deg: f64,
}

fn serialize_class<S: serde::Serializer>(class: &PolarClass, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(class.code())
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorsReport {
    pub cfc: f64,
    pub cff: f64,
    pub cfd: f64,
    pub cfdis: f64,
    pub cfl: f64,
}

impl From<ClassFactors> for FactorsReport {
    fn from(f: ClassFactors) -> Self {
        Self {
            cfc: f.cfc,
            cff: f.cff,
            cfd: f.cfd,
            cfdis: f.cfdis,
            cfl: f.cfl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowLoadReport {
    pub inputs: BowLoadInputs,
    pub factors: FactorsReport,
    pub fai: f64,
    pub fi_mn: f64,
    pub ari: f64,
    pub qi_mn_per_m: f64,
    pub pi_mpa: f64,
    pub b_m: f64,
    pub w_m: f64,
    pub pavg_mpa: f64,
}

impl BowLoadInputs {
    pub fn evaluate(&self) -> CliResult<BowLoadReport> {
        let factors = self.class.factors();
        let bow = BowGeometry::from_degrees(
            self.lui_m,
            self.dui_kt,
            self.beta_prime_deg,
            self.alpha_deg,
            self.gamma_deg,
        );
        let r = compute_bow_design_load(&bow, &factors)?;
        Ok(BowLoadReport {
            inputs: *self,
            factors: factors.into(),
            fai: r.shape_factor,
            fi_mn: as_meganewtons(r.force),
            ari: r.aspect_ratio,
            qi_mn_per_m: r.line_load_mn_per_m,
            pi_mpa: as_megapascals(r.pressure),
            b_m: r.patch_width.value,
            w_m: r.patch_height.value,
            pavg_mpa: as_megapascals(r.average_pressure),
        })
    }
}

impl BowLoadReport {
    pub fn render_text(&self) -> String {
        let mut out = render_factors(self.inputs.class);
        out.push_str("\nResults:\n");
        out.push_str(&format!("  fai: {:.2}\n", self.fai));
        out.push_str(&format!("  Fi: {:.2} MN\n", self.fi_mn));
        out.push_str(&format!("  ARi: {:.2}\n", self.ari));
        out.push_str(&format!("  Qi: {:.2} MN/m\n", self.qi_mn_per_m));
        out.push_str(&format!("  Pi: {:.2} MPa\n", self.pi_mpa));
        out.push_str(&format!(
            "  Design Load Patch (b x w): {:.2} x {:.2} m\n",
            self.b_m, self.w_m
        ));
        out.push_str(&format!(
            "  Design Average Pressure (Pavg): {:.2} MPa\n",
            self.pavg_mpa
        ));
        out
    }
}

/// Class factor block for one Polar Class.
pub fn render_factors(class: PolarClass) -> String {
    let f = class.factors();
    format!(
        "Shape Factors for {class}:\n  CFC: {}\n  CFF: {}\n  CFD: {}\n  CFDIS: {}\n  CFL: {}\n",
        f.cfc, f.cff, f.cfd, f.cfdis, f.cfl
    )
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassRow {
    pub class: &'static str,
    #[serde(flatten)]
    pub factors: FactorsReport,
}

pub fn class_table() -> Vec<ClassRow> {
    PolarClass::ALL
        .iter()
        .map(|class| ClassRow {
            class: class.code(),
            factors: class.factors().into(),
        })
        .collect()
}

pub fn render_class_table() -> String {
    let mut out = format!(
        "{:<6}{:>8}{:>8}{:>8}{:>8}{:>8}\n",
        "Class", "CFC", "CFF", "CFD", "CFDIS", "CFL"
    );
    for row in class_table() {
        let f = row.factors;
        out.push_str(&format!(
            "{:<6}{:>8.2}{:>8.2}{:>8.2}{:>8}{:>8.2}\n",
            row.class, f.cfc, f.cff, f.cfd, f.cfdis, f.cfl
        ));
    }
    out
}

/// Render any serializable report in the chosen format.
pub fn render<T: Serialize>(
    format: OutputFormat,
    report: &T,
    text: impl FnOnce(&T) -> String,
) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_resistance() -> ResistanceInputs {
        ResistanceInputs {
            length_m: 100.0,
            breadth_m: 20.0,
            draft_m: 8.0,
            speed_kn: 10.0,
            trim_deg: 20.0,
            keel_deg: 30.0,
            side_deg: 40.0,
            ice_thickness_cm: 100.0,
        }
    }

    #[test]
    fn parse_non_negative_accepts_zero_and_rejects_text() {
        assert_eq!(parse_non_negative(" 0 "), Ok(0.0));
        assert_eq!(parse_non_negative("12.5"), Ok(12.5));
        assert!(parse_non_negative("-1").is_err());
        assert!(parse_non_negative("abc").is_err());
        assert!(parse_non_negative("inf").is_err());
    }

    #[test]
    fn resistance_report_text() {
        let report = reference_resistance().evaluate().unwrap();
        let text = report.render_text();
        assert!(text.contains("Ice resistance: 1802.07 kN"), "{text}");
        assert!(text.contains("Crushing:"));
    }

    #[test]
    fn open_water_report_is_zero() {
        let inputs = ResistanceInputs {
            ice_thickness_cm: 0.0,
            ..reference_resistance()
        };
        let text = inputs.evaluate().unwrap().render_text();
        assert_eq!(text, "Ice resistance: 0.00 kN\n");
    }

    #[test]
    fn bow_load_report_text_and_json() {
        let inputs = BowLoadInputs {
            lui_m: 150.0,
            dui_kt: 20.0,
            class: PolarClass::PC5,
            beta_prime_deg: 30.0,
            alpha_deg: 20.0,
            gamma_deg: 0.0,
        };
        let report = inputs.evaluate().unwrap();

        let text = report.render_text();
        assert!(text.contains("Shape Factors for PC5:"));
        assert!(text.contains("  CFDIS: 70"));
        assert!(text.contains("  Fi: 6.95 MN"));
        assert!(text.contains("Design Load Patch (b x w): 2.58 x 0.69 m"));

        let json = render(OutputFormat::Json, &report, BowLoadReport::render_text).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["inputs"]["class"], "PC5");
        assert_eq!(value["factors"]["cfc"], 3.1);
    }

    #[test]
    fn factor_block_has_one_line_per_factor() {
        assert_eq!(
            render_factors(PolarClass::PC5),
            "Shape Factors for PC5:\n  CFC: 3.1\n  CFF: 9\n  CFD: 1.31\n  CFDIS: 70\n  CFL: 2.5\n"
        );
    }

    #[test]
    fn resistance_text_lists_components_before_total() {
        let text = reference_resistance().evaluate().unwrap().render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("  Crushing:   195.54 kN"));
        assert!(lines[1].starts_with("  Bending:    24.37 kN"));
        assert!(lines[2].starts_with("  Submersion: 423.15 kN"));
        assert_eq!(lines[3], "Ice resistance: 1802.07 kN");
    }

    #[test]
    fn class_table_lists_all_classes() {
        let table = render_class_table();
        for class in PolarClass::ALL {
            assert!(table.contains(class.code()));
        }
        assert_eq!(class_table().len(), 7);
    }
}
