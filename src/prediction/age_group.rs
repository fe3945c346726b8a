use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// Age bracket that selects which classifier and lookup tables apply
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr,
)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase")]
pub enum AgeGroup {
    Child,
    Adult,
    Elder,
}

impl AgeGroup {
    pub const CHILD_UPPER_BOUND: i32 = 13;
    pub const ADULT_UPPER_BOUND: i32 = 60;

    /// `< 13` Child, `< 60` Adult, otherwise Elder
    pub fn from_age(age: i32) -> Self {
        Self::from_years(f64::from(age))
    }

    /// Same brackets for fractional ages, e.g. `12.9` is still Child
    pub fn from_years(age: f64) -> Self {
        if age < f64::from(Self::CHILD_UPPER_BOUND) {
            AgeGroup::Child
        } else if age < f64::from(Self::ADULT_UPPER_BOUND) {
            AgeGroup::Adult
        } else {
            AgeGroup::Elder
        }
    }

    /// Lowercase stem used in artifact file names
    pub fn file_stem(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Adult => "adult",
            AgeGroup::Elder => "elder",
        }
    }

    /// Symptom dataset CSV file name
    pub fn dataset_file(&self) -> String {
        format!("{} Dataset.csv", self.as_ref())
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl std::str::FromStr for AgeGroup {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "child" => Ok(Self::Child),
            "adult" => Ok(Self::Adult),
            "elder" => Ok(Self::Elder),
            _ => Err(format!(
                "Invalid age group: '{}'. Valid: Child, Adult, Elder",
                s
            )),
        }
    }
}
