// Fixed choice lists offered by the registration and edit forms.

pub const TITLES: &[&str] = &[
    "Brother",
    "Sister",
    "Elder",
    "Presiding Elder",
    "Deacon",
    "Deaconess",
    "Retired Deacon",
    "Retired Deaconess",
];

pub const GENDERS: &[&str] = &["Male", "Female"];

pub const MARITAL_STATUSES: &[&str] = &["Single", "Married", "Widowed", "Divorced"];

pub const REGIONS: &[&str] = &[
    "Ahafo",
    "Ashanti",
    "Bono",
    "Bono East",
    "Central",
    "Eastern",
    "Greater Accra",
    "North East",
    "Northern",
    "Oti",
    "Savannah",
    "Upper East",
    "Upper West",
    "Volta",
    "Western",
    "Western North",
];

pub const MINISTRIES: &[&str] = &[
    "Men's Ministry",
    "Women's Ministry",
    "Youth Ministry",
    "Children's Ministry",
    "Evangelism Ministry",
];

pub const BAPTISM_STATUSES: &[&str] = &["Baptized", "Not Baptized"];

/// Dialling prefix offered next to every phone input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    pub code: &'static str,
    pub country: &'static str,
}

pub const DEFAULT_COUNTRY_CODE: &str = "+233";

pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { code: "+233", country: "Ghana" },
    CountryCode { code: "+234", country: "Nigeria" },
    CountryCode { code: "+1", country: "USA/Canada" },
    CountryCode { code: "+44", country: "UK" },
    CountryCode { code: "+27", country: "South Africa" },
    CountryCode { code: "+49", country: "Germany" },
    CountryCode { code: "+33", country: "France" },
    CountryCode { code: "+39", country: "Italy" },
    CountryCode { code: "+31", country: "Netherlands" },
    CountryCode { code: "+34", country: "Spain" },
];
