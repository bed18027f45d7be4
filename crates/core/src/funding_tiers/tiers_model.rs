//! Funding tier models and preset tables.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Investor-selected funding bracket controlling which preset amounts are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FundingTier {
    #[default]
    #[serde(rename = "individual_supporter")]
    IndividualSupporter,
    #[serde(rename = "professional_investor")]
    ProfessionalInvestor,
    #[serde(rename = "microvc")]
    MicroVc,
    #[serde(rename = "institutional")]
    Institutional,
}

impl FundingTier {
    pub const ALL: [FundingTier; 4] = [
        FundingTier::IndividualSupporter,
        FundingTier::ProfessionalInvestor,
        FundingTier::MicroVc,
        FundingTier::Institutional,
    ];

    /// Returns the tier id as stored in investor preferences.
    pub fn as_str(&self) -> &'static str {
        match self {
            FundingTier::IndividualSupporter => "individual_supporter",
            FundingTier::ProfessionalInvestor => "professional_investor",
            FundingTier::MicroVc => "microvc",
            FundingTier::Institutional => "institutional",
        }
    }

    /// Parses a tier id. Unknown ids return `None`; callers fall back.
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(id))
    }

    /// Returns the preset table for this tier.
    pub fn presets(&self) -> &'static TierPresets {
        match self {
            FundingTier::IndividualSupporter => &INDIVIDUAL_SUPPORTER,
            FundingTier::ProfessionalInvestor => &PROFESSIONAL_INVESTOR,
            FundingTier::MicroVc => &MICRO_VC,
            FundingTier::Institutional => &INSTITUTIONAL,
        }
    }
}

impl std::fmt::Display for FundingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.presets().label)
    }
}

/// The four preset amounts offered for one tier, in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPresets {
    pub tier: FundingTier,
    pub label: &'static str,
    pub amounts: [Decimal; 4],
}

impl TierPresets {
    pub fn amounts(&self) -> &[Decimal] {
        &self.amounts
    }

    /// Smallest preset, used when nothing more specific is configured.
    pub fn first(&self) -> Decimal {
        self.amounts[0]
    }

    pub fn contains(&self, amount: Decimal) -> bool {
        self.amounts.contains(&amount)
    }

    /// Preset at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Decimal> {
        self.amounts.get(index).copied()
    }
}

static INDIVIDUAL_SUPPORTER: TierPresets = TierPresets {
    tier: FundingTier::IndividualSupporter,
    label: "Individual Supporter",
    amounts: [dec!(10), dec!(50), dec!(100), dec!(500)],
};

static PROFESSIONAL_INVESTOR: TierPresets = TierPresets {
    tier: FundingTier::ProfessionalInvestor,
    label: "Professional Investor",
    amounts: [dec!(1000), dec!(5000), dec!(10000), dec!(25000)],
};

static MICRO_VC: TierPresets = TierPresets {
    tier: FundingTier::MicroVc,
    label: "Micro VC",
    amounts: [dec!(25000), dec!(100000), dec!(250000), dec!(500000)],
};

static INSTITUTIONAL: TierPresets = TierPresets {
    tier: FundingTier::Institutional,
    label: "Institutional",
    amounts: [dec!(500000), dec!(1000000), dec!(2500000), dec!(5000000)],
};
