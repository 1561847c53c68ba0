//! Static sector and region coefficient tables.
//!
//! These are fixed, read-only, process-wide lookup tables. The sector
//! multipliers encode how strongly a policy in that sector moves each
//! indicator; the region coefficients encode macro stability and growth
//! headroom. Both feed the training-data synthesizer, not inference directly.

use crate::domain::{Region, Sector};

/// Per-sector impact multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorProfile {
    pub gdp: f64,
    pub inflation: f64,
    pub unemployment: f64,
    pub environment: f64,
}

/// Per-region sensitivity coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionProfile {
    pub stability: f64,
    pub growth_potential: f64,
}

/// Indexed by `Sector::index()`.
const SECTOR_PROFILES: [SectorProfile; 8] = [
    // Energy
    SectorProfile { gdp: 1.2, inflation: 1.5, unemployment: 0.8, environment: 2.0 },
    // Healthcare
    SectorProfile { gdp: 0.8, inflation: 0.6, unemployment: 1.2, environment: 0.3 },
    // Education
    SectorProfile { gdp: 1.0, inflation: 0.4, unemployment: 1.0, environment: 0.2 },
    // Transportation
    SectorProfile { gdp: 1.1, inflation: 1.2, unemployment: 0.9, environment: 1.8 },
    // Agriculture
    SectorProfile { gdp: 0.9, inflation: 1.3, unemployment: 1.1, environment: 1.5 },
    // Finance
    SectorProfile { gdp: 1.4, inflation: 0.8, unemployment: 0.7, environment: 0.1 },
    // Technology
    SectorProfile { gdp: 1.5, inflation: 0.5, unemployment: 0.6, environment: 0.4 },
    // Manufacturing
    SectorProfile { gdp: 1.3, inflation: 1.0, unemployment: 1.0, environment: 1.6 },
];

/// Indexed by `Region::index()`.
const REGION_PROFILES: [RegionProfile; 6] = [
    // North America
    RegionProfile { stability: 1.1, growth_potential: 1.0 },
    // Europe
    RegionProfile { stability: 1.1, growth_potential: 0.9 },
    // Asia
    RegionProfile { stability: 0.9, growth_potential: 1.2 },
    // Africa
    RegionProfile { stability: 0.7, growth_potential: 1.1 },
    // South America
    RegionProfile { stability: 0.8, growth_potential: 1.0 },
    // Oceania
    RegionProfile { stability: 1.0, growth_potential: 0.8 },
];

pub fn sector_profile(sector: Sector) -> SectorProfile {
    SECTOR_PROFILES[sector.index()]
}

pub fn region_profile(region: Region) -> RegionProfile {
    REGION_PROFILES[region.index()]
}

/// Interconnectedness weight when unlisted.
const DEFAULT_INTERCONNECT: f64 = 0.2;

/// Explicitly modeled sector pairs (symmetric).
const INTERCONNECTIONS: [(Sector, Sector, f64); 5] = [
    (Sector::Energy, Sector::Transportation, 0.8),
    (Sector::Energy, Sector::Manufacturing, 0.7),
    (Sector::Technology, Sector::Finance, 0.6),
    (Sector::Healthcare, Sector::Education, 0.4),
    (Sector::Agriculture, Sector::Manufacturing, 0.5),
];

/// How tightly two sectors are economically coupled, in `[0, 1]`.
///
/// Symmetric: `interconnectedness(a, b) == interconnectedness(b, a)`.
pub fn interconnectedness(a: Sector, b: Sector) -> f64 {
    for &(x, y, w) in &INTERCONNECTIONS {
        if (x == a && y == b) || (x == b && y == a) {
            return w;
        }
    }
    DEFAULT_INTERCONNECT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_every_variant() {
        for s in Sector::ALL {
            let p = sector_profile(s);
            assert!(p.gdp > 0.0 && p.inflation > 0.0);
        }
        for r in Region::ALL {
            let p = region_profile(r);
            assert!(p.stability > 0.0 && p.growth_potential > 0.0);
        }
    }

    #[test]
    fn interconnectedness_is_symmetric() {
        for a in Sector::ALL {
            for b in Sector::ALL {
                assert_eq!(interconnectedness(a, b), interconnectedness(b, a));
            }
        }
        assert_eq!(
            interconnectedness(Sector::Transportation, Sector::Energy),
            0.8
        );
        // Unlisted pairs get the default weight.
        assert_eq!(
            interconnectedness(Sector::Finance, Sector::Agriculture),
            0.2
        );
    }
}
