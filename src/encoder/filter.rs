//! Filter-graph construction for the dream effect.
//!
//! The graph is a single comma-joined chain handed to `-filter_complex`:
//! motion interpolation up to 60 fps, a PTS stretch, a gaussian blur and a
//! width-constrained scale.

/// Motion-compensated interpolation stage, quoted so ffmpeg keeps its `:` options together
pub const INTERPOLATION_STAGE: &str = "minterpolate='mi_mode=mci:mc_mode=aobmc:vsbmc=1:fps=60'";

/// Parameters that vary the filter graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Slowdown factor applied to presentation timestamps
    pub slow: f64,

    /// Gaussian blur sigma
    pub blur: f64,

    /// Target width; height is derived with `-1`
    pub width: u32,
}

impl FilterParams {
    /// Individual stages in application order
    pub fn stages(&self) -> [String; 4] {
        [
            INTERPOLATION_STAGE.to_string(),
            format!("setpts={}*PTS", format_decimal(self.slow)),
            format!("gblur=sigma={}", format_decimal(self.blur)),
            format!("scale={}:-1", self.width),
        ]
    }

    /// Complete filter graph expression
    pub fn graph(&self) -> String {
        self.stages().join(",")
    }
}

/// Render a float the way ffmpeg's expression parser expects it.
///
/// Always uses `.` as the separator and always keeps a fractional part, so
/// `2.0` never collapses to `2`.
pub fn format_decimal(value: f64) -> String {
    let rendered = value.to_string();
    if value.is_finite() && !rendered.contains('.') {
        format!("{}.0", rendered)
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(slow: f64, blur: f64, width: u32) -> FilterParams {
        FilterParams { slow, blur, width }
    }

    #[test]
    fn test_default_graph() {
        assert_eq!(
            params(4.0, 12.0, 854).graph(),
            "minterpolate='mi_mode=mci:mc_mode=aobmc:vsbmc=1:fps=60',\
             setpts=4.0*PTS,gblur=sigma=12.0,scale=854:-1"
        );
    }

    #[test]
    fn test_integer_valued_floats_keep_decimal_point() {
        assert_eq!(format_decimal(2.0), "2.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(100.0), "100.0");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(format_decimal(0.5), "0.5");
        assert_eq!(format_decimal(2.25), "2.25");
        assert_eq!(format_decimal(12.75), "12.75");
    }

    #[test]
    fn test_stage_order() {
        let stages = params(2.0, 3.5, 1280).stages();
        assert!(stages[0].starts_with("minterpolate="));
        assert_eq!(stages[1], "setpts=2.0*PTS");
        assert_eq!(stages[2], "gblur=sigma=3.5");
        assert_eq!(stages[3], "scale=1280:-1");
    }
}
