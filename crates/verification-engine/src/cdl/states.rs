//! US state and territory postal codes accepted as CDL prefixes

use serde::{Deserialize, Serialize};

/// Issuing jurisdictions: the 50 states plus DC and the territories that
/// issue commercial licenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StateCode {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
    DC,
    PR,
    GU,
    AS,
    VI,
    MP,
}

impl StateCode {
    /// Parse a two-letter postal code (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let code = match s.to_uppercase().as_str() {
            "AL" => StateCode::AL,
            "AK" => StateCode::AK,
            "AZ" => StateCode::AZ,
            "AR" => StateCode::AR,
            "CA" => StateCode::CA,
            "CO" => StateCode::CO,
            "CT" => StateCode::CT,
            "DE" => StateCode::DE,
            "FL" => StateCode::FL,
            "GA" => StateCode::GA,
            "HI" => StateCode::HI,
            "ID" => StateCode::ID,
            "IL" => StateCode::IL,
            "IN" => StateCode::IN,
            "IA" => StateCode::IA,
            "KS" => StateCode::KS,
            "KY" => StateCode::KY,
            "LA" => StateCode::LA,
            "ME" => StateCode::ME,
            "MD" => StateCode::MD,
            "MA" => StateCode::MA,
            "MI" => StateCode::MI,
            "MN" => StateCode::MN,
            "MS" => StateCode::MS,
            "MO" => StateCode::MO,
            "MT" => StateCode::MT,
            "NE" => StateCode::NE,
            "NV" => StateCode::NV,
            "NH" => StateCode::NH,
            "NJ" => StateCode::NJ,
            "NM" => StateCode::NM,
            "NY" => StateCode::NY,
            "NC" => StateCode::NC,
            "ND" => StateCode::ND,
            "OH" => StateCode::OH,
            "OK" => StateCode::OK,
            "OR" => StateCode::OR,
            "PA" => StateCode::PA,
            "RI" => StateCode::RI,
            "SC" => StateCode::SC,
            "SD" => StateCode::SD,
            "TN" => StateCode::TN,
            "TX" => StateCode::TX,
            "UT" => StateCode::UT,
            "VT" => StateCode::VT,
            "VA" => StateCode::VA,
            "WA" => StateCode::WA,
            "WV" => StateCode::WV,
            "WI" => StateCode::WI,
            "WY" => StateCode::WY,
            "DC" => StateCode::DC,
            "PR" => StateCode::PR,
            "GU" => StateCode::GU,
            "AS" => StateCode::AS,
            "VI" => StateCode::VI,
            "MP" => StateCode::MP,
            _ => return None,
        };
        Some(code)
    }

    /// Full jurisdiction name
    pub fn name(&self) -> &'static str {
        match self {
            StateCode::AL => "Alabama",
            StateCode::AK => "Alaska",
            StateCode::AZ => "Arizona",
            StateCode::AR => "Arkansas",
            StateCode::CA => "California",
            StateCode::CO => "Colorado",
            StateCode::CT => "Connecticut",
            StateCode::DE => "Delaware",
            StateCode::FL => "Florida",
            StateCode::GA => "Georgia",
            StateCode::HI => "Hawaii",
            StateCode::ID => "Idaho",
            StateCode::IL => "Illinois",
            StateCode::IN => "Indiana",
            StateCode::IA => "Iowa",
            StateCode::KS => "Kansas",
            StateCode::KY => "Kentucky",
            StateCode::LA => "Louisiana",
            StateCode::ME => "Maine",
            StateCode::MD => "Maryland",
            StateCode::MA => "Massachusetts",
            StateCode::MI => "Michigan",
            StateCode::MN => "Minnesota",
            StateCode::MS => "Mississippi",
            StateCode::MO => "Missouri",
            StateCode::MT => "Montana",
            StateCode::NE => "Nebraska",
            StateCode::NV => "Nevada",
            StateCode::NH => "New Hampshire",
            StateCode::NJ => "New Jersey",
            StateCode::NM => "New Mexico",
            StateCode::NY => "New York",
            StateCode::NC => "North Carolina",
            StateCode::ND => "North Dakota",
            StateCode::OH => "Ohio",
            StateCode::OK => "Oklahoma",
            StateCode::OR => "Oregon",
            StateCode::PA => "Pennsylvania",
            StateCode::RI => "Rhode Island",
            StateCode::SC => "South Carolina",
            StateCode::SD => "South Dakota",
            StateCode::TN => "Tennessee",
            StateCode::TX => "Texas",
            StateCode::UT => "Utah",
            StateCode::VT => "Vermont",
            StateCode::VA => "Virginia",
            StateCode::WA => "Washington",
            StateCode::WV => "West Virginia",
            StateCode::WI => "Wisconsin",
            StateCode::WY => "Wyoming",
            StateCode::DC => "District of Columbia",
            StateCode::PR => "Puerto Rico",
            StateCode::GU => "Guam",
            StateCode::AS => "American Samoa",
            StateCode::VI => "U.S. Virgin Islands",
            StateCode::MP => "Northern Mariana Islands",
        }
    }

    /// Territories (everything past DC in the table)
    pub fn is_territory(&self) -> bool {
        matches!(
            self,
            StateCode::PR | StateCode::GU | StateCode::AS | StateCode::VI | StateCode::MP
        )
    }

    /// All 56 accepted jurisdictions
    pub fn all() -> &'static [StateCode] {
        use StateCode::*;
        &[
            AL, AK, AZ, AR, CA, CO, CT, DE, FL, GA, HI, ID, IL, IN, IA, KS, KY, LA, ME, MD, MA,
            MI, MN, MS, MO, MT, NE, NV, NH, NJ, NM, NY, NC, ND, OH, OK, OR, PA, RI, SC, SD, TN,
            TX, UT, VT, VA, WA, WV, WI, WY, DC, PR, GU, AS, VI, MP,
        ]
    }
}

impl std::fmt::Display for StateCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_states_and_territories() {
        assert_eq!(StateCode::parse("CA"), Some(StateCode::CA));
        assert_eq!(StateCode::parse("tx"), Some(StateCode::TX));
        assert_eq!(StateCode::parse("PR"), Some(StateCode::PR));
        assert_eq!(StateCode::parse("MP"), Some(StateCode::MP));
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        assert_eq!(StateCode::parse("ZZ"), None);
        assert_eq!(StateCode::parse(""), None);
        assert_eq!(StateCode::parse("CAL"), None);
    }

    #[test]
    fn test_table_has_56_entries() {
        assert_eq!(StateCode::all().len(), 56);
        // every entry round-trips through its display code
        for code in StateCode::all() {
            assert_eq!(StateCode::parse(&code.to_string()), Some(*code));
        }
    }

    #[test]
    fn test_territories() {
        assert!(StateCode::PR.is_territory());
        assert!(StateCode::VI.is_territory());
        assert!(!StateCode::DC.is_territory());
        assert!(!StateCode::CA.is_territory());
    }

    #[test]
    fn test_names() {
        assert_eq!(StateCode::CA.name(), "California");
        assert_eq!(StateCode::GU.name(), "Guam");
    }
}
