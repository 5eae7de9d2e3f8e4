use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScoreError;

/// Usage scenario selecting how CPU, GPU, RAM and storage are blended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    Gaming,
    Creator,
    Office,
}

/// Weight coefficients for one profile. They are not required to sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileWeights {
    pub gpu_weight: f64,
    pub cpu_weight: f64,
    pub ram_bonus_weight: f64,
    pub ssd_bonus_weight: f64,
}

const GAMING: ProfileWeights = ProfileWeights {
    gpu_weight: 0.70,
    cpu_weight: 0.25,
    ram_bonus_weight: 0.03,
    ssd_bonus_weight: 0.02,
};

const CREATOR: ProfileWeights = ProfileWeights {
    gpu_weight: 0.35,
    cpu_weight: 0.55,
    ram_bonus_weight: 0.07,
    ssd_bonus_weight: 0.03,
};

const OFFICE: ProfileWeights = ProfileWeights {
    gpu_weight: 0.05,
    cpu_weight: 0.80,
    ram_bonus_weight: 0.10,
    ssd_bonus_weight: 0.05,
};

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Gaming, Profile::Creator, Profile::Office];

    /// Fixed weight table lookup
    pub const fn weights(self) -> ProfileWeights {
        match self {
            Profile::Gaming => GAMING,
            Profile::Creator => CREATOR,
            Profile::Office => OFFICE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Gaming => "Gaming",
            Profile::Creator => "Creator",
            Profile::Office => "Office",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Profile {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Profile::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScoreError::UnknownProfile(s.to_string()))
    }
}
