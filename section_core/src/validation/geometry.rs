//! Cross-dimension consistency
//!
//! Each dimension can be in range on its own and still describe a section
//! that cannot exist (a tube wall thicker than half the tube). These checks
//! run once every dimension has parsed. They only warn: the engine computes
//! parsable input as given, so the result is left to engineering review.

use std::collections::HashMap;

use crate::profiles::{ProfileFamily, ProfileGroup};

use super::ValidationResult;

/// `thin` must stay strictly below `thick / divisor`
struct Proportion {
    thin: &'static str,
    thick: &'static str,
    divisor: f64,
}

const fn lt(thin: &'static str, thick: &'static str) -> Proportion {
    Proportion { thin, thick, divisor: 1.0 }
}

const fn half(thin: &'static str, thick: &'static str) -> Proportion {
    Proportion { thin, thick, divisor: 2.0 }
}

fn proportions(family: ProfileFamily) -> &'static [Proportion] {
    const I_BEAM: &[Proportion] = &[half("tf", "h"), lt("tw", "b")];
    const CHANNEL: &[Proportion] = &[half("tf", "h"), lt("tw", "b")];
    const T_BEAM: &[Proportion] = &[lt("tf", "h"), lt("tw", "b")];
    const EQUAL_ANGLE: &[Proportion] = &[lt("t", "a")];
    const UNEQUAL_ANGLE: &[Proportion] = &[lt("t", "a"), lt("t", "b")];
    const RHS: &[Proportion] = &[half("t", "h"), half("t", "b")];
    const SHS: &[Proportion] = &[half("t", "a")];
    const CHS: &[Proportion] = &[half("t", "od")];
    const PIPE: &[Proportion] = &[half("wt", "od")];
    const BULB_FLAT: &[Proportion] = &[lt("t", "b")];
    const PERFORATED: &[Proportion] = &[lt("hd", "p")];

    match family.group() {
        ProfileGroup::IBeam => I_BEAM,
        ProfileGroup::Channel => CHANNEL,
        _ => match family {
            ProfileFamily::TBeam => T_BEAM,
            ProfileFamily::EqualAngle => EQUAL_ANGLE,
            ProfileFamily::UnequalAngle => UNEQUAL_ANGLE,
            ProfileFamily::Rhs => RHS,
            ProfileFamily::Shs => SHS,
            ProfileFamily::Chs => CHS,
            ProfileFamily::Pipe => PIPE,
            ProfileFamily::BulbFlat => BULB_FLAT,
            ProfileFamily::PerforatedPlate => PERFORATED,
            _ => &[],
        },
    }
}

/// Warn when thicknesses do not fit inside the section they belong to.
///
/// Never adds errors. `values` holds the parsed magnitudes by dimension key; pairs with a
/// missing side are skipped (the dimension check already reported them).
pub fn validate_geometry(family: ProfileFamily, values: &HashMap<String, f64>) -> ValidationResult {
    let mut result = ValidationResult::valid();
    for rule in proportions(family) {
        let (Some(&thin), Some(&thick)) = (values.get(rule.thin), values.get(rule.thick)) else {
            continue;
        };
        if thin * rule.divisor >= thick {
            let relation = if rule.divisor == 2.0 { "half of " } else { "" };
            result.add_warning(format!(
                "{} should be less than {relation}{} for {}; the computed properties will not be meaningful",
                rule.thin,
                rule.thick,
                family.display_name()
            ));
        }
    }
    result
}
