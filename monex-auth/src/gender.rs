use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Gender {
    #[strum(serialize = "Male")]
    Male,
    #[strum(serialize = "Female")]
    Female,
    #[strum(serialize = "Non-binary")]
    NonBinary,
    #[strum(serialize = "Prefer to self-describe")]
    SelfDescribe,
    #[strum(
        to_string = "Prefer not to disclose",
        serialize = "Prefer not to disclosure"
    )]
    Undisclosed,
}

/// Gender values that make the free-text description mandatory.
pub const DESCRIBED_GENDERS: &[&str] = &["Prefer to self-describe"];

impl Gender {
    pub fn requires_description(self) -> bool {
        DESCRIBED_GENDERS.contains(&self.as_ref())
    }
}
