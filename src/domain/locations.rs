//! Static lookup data served by the locations endpoints and used to resolve
//! ids to display names in outgoing notifications.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Province {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: &'static str,
    pub name: &'static str,
    pub province_id: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Nationality {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountryCode {
    pub id: &'static str,
    pub name: &'static str,
    pub code: &'static str,
}

pub const PROVINCES: &[Province] = &[
    Province { id: "kigali", name: "City of Kigali" },
    Province { id: "northern", name: "Northern Province" },
    Province { id: "southern", name: "Southern Province" },
    Province { id: "eastern", name: "Eastern Province" },
    Province { id: "western", name: "Western Province" },
];

pub const DISTRICTS: &[District] = &[
    District { id: "gasabo", name: "Gasabo", province_id: "kigali" },
    District { id: "kicukiro", name: "Kicukiro", province_id: "kigali" },
    District { id: "nyarugenge", name: "Nyarugenge", province_id: "kigali" },
    District { id: "burera", name: "Burera", province_id: "northern" },
    District { id: "gakenke", name: "Gakenke", province_id: "northern" },
    District { id: "gicumbi", name: "Gicumbi", province_id: "northern" },
    District { id: "musanze", name: "Musanze", province_id: "northern" },
    District { id: "rulindo", name: "Rulindo", province_id: "northern" },
    District { id: "gisagara", name: "Gisagara", province_id: "southern" },
    District { id: "huye", name: "Huye", province_id: "southern" },
    District { id: "kamonyi", name: "Kamonyi", province_id: "southern" },
    District { id: "muhanga", name: "Muhanga", province_id: "southern" },
    District { id: "nyamagabe", name: "Nyamagabe", province_id: "southern" },
    District { id: "nyanza", name: "Nyanza", province_id: "southern" },
    District { id: "nyaruguru", name: "Nyaruguru", province_id: "southern" },
    District { id: "ruhango", name: "Ruhango", province_id: "southern" },
    District { id: "bugesera", name: "Bugesera", province_id: "eastern" },
    District { id: "gatsibo", name: "Gatsibo", province_id: "eastern" },
    District { id: "kayonza", name: "Kayonza", province_id: "eastern" },
    District { id: "kirehe", name: "Kirehe", province_id: "eastern" },
    District { id: "ngoma", name: "Ngoma", province_id: "eastern" },
    District { id: "nyagatare", name: "Nyagatare", province_id: "eastern" },
    District { id: "rwamagana", name: "Rwamagana", province_id: "eastern" },
    District { id: "karongi", name: "Karongi", province_id: "western" },
    District { id: "ngororero", name: "Ngororero", province_id: "western" },
    District { id: "nyabihu", name: "Nyabihu", province_id: "western" },
    District { id: "nyamasheke", name: "Nyamasheke", province_id: "western" },
    District { id: "rubavu", name: "Rubavu", province_id: "western" },
    District { id: "rusizi", name: "Rusizi", province_id: "western" },
    District { id: "rutsiro", name: "Rutsiro", province_id: "western" },
];

pub const NATIONALITIES: &[Nationality] = &[
    Nationality { id: "rwandan", name: "Rwandan" },
    Nationality { id: "burundian", name: "Burundian" },
    Nationality { id: "congolese", name: "Congolese" },
    Nationality { id: "ugandan", name: "Ugandan" },
    Nationality { id: "tanzanian", name: "Tanzanian" },
    Nationality { id: "kenyan", name: "Kenyan" },
    Nationality { id: "ethiopian", name: "Ethiopian" },
    Nationality { id: "nigerian", name: "Nigerian" },
    Nationality { id: "south-african", name: "South African" },
    Nationality { id: "egyptian", name: "Egyptian" },
    Nationality { id: "american", name: "American" },
    Nationality { id: "canadian", name: "Canadian" },
    Nationality { id: "british", name: "British" },
    Nationality { id: "french", name: "French" },
    Nationality { id: "german", name: "German" },
    Nationality { id: "belgian", name: "Belgian" },
    Nationality { id: "dutch", name: "Dutch" },
    Nationality { id: "indian", name: "Indian" },
    Nationality { id: "chinese", name: "Chinese" },
    Nationality { id: "other", name: "Other" },
];

pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode { id: "rw", name: "Rwanda", code: "+250" },
    CountryCode { id: "bi", name: "Burundi", code: "+257" },
    CountryCode { id: "cd", name: "DR Congo", code: "+243" },
    CountryCode { id: "ug", name: "Uganda", code: "+256" },
    CountryCode { id: "tz", name: "Tanzania", code: "+255" },
    CountryCode { id: "ke", name: "Kenya", code: "+254" },
    CountryCode { id: "et", name: "Ethiopia", code: "+251" },
    CountryCode { id: "ng", name: "Nigeria", code: "+234" },
    CountryCode { id: "za", name: "South Africa", code: "+27" },
    CountryCode { id: "eg", name: "Egypt", code: "+20" },
    CountryCode { id: "us", name: "United States", code: "+1" },
    CountryCode { id: "gb", name: "United Kingdom", code: "+44" },
    CountryCode { id: "fr", name: "France", code: "+33" },
    CountryCode { id: "de", name: "Germany", code: "+49" },
    CountryCode { id: "be", name: "Belgium", code: "+32" },
    CountryCode { id: "nl", name: "Netherlands", code: "+31" },
    CountryCode { id: "in", name: "India", code: "+91" },
    CountryCode { id: "cn", name: "China", code: "+86" },
];

pub fn districts_of(province_id: &str) -> Vec<District> {
    DISTRICTS.iter().filter(|d| d.province_id == province_id).copied().collect()
}

/// Resolves an id to its display name, falling back to the raw id so unknown
/// values still render something meaningful.
pub fn province_name(id: &str) -> &str {
    PROVINCES.iter().find(|p| p.id == id).map_or(id, |p| p.name)
}

pub fn district_name(id: &str) -> &str {
    DISTRICTS.iter().find(|d| d.id == id).map_or(id, |d| d.name)
}

pub fn nationality_name(id: &str) -> &str {
    NATIONALITIES.iter().find(|n| n.id == id).map_or(id, |n| n.name)
}
