//! Record store
//!
//! The full list of office-holders is compiled into the binary as a `'static`
//! array. It is created once, never mutated and lives for the whole process.

use chrono::{Datelike, NaiveDate};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Political party of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Liberal,
    Conservative,
    LiberalConservative,
    ProgressiveConservative,
    Unionist,
}

/// Broad party family, used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyFamily {
    Liberal,
    Conservative,
    Other,
}

impl Party {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Party::Liberal => "Liberal",
            Party::Conservative => "Conservative",
            Party::LiberalConservative => "Liberal-Conservative",
            Party::ProgressiveConservative => "Progressive Conservative",
            Party::Unionist => "Unionist",
        }
    }

    pub fn family(&self) -> PartyFamily {
        match self {
            Party::Liberal => PartyFamily::Liberal,
            Party::Conservative
            | Party::ProgressiveConservative
            | Party::Unionist
            | Party::LiberalConservative => PartyFamily::Conservative,
        }
    }
}

impl Serialize for Party {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A calendar date that can live in a `const` table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Convert to a chrono date, `None` if the table holds an impossible date
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Long form, e.g. "January 11, 1815"
    pub fn long_format(&self) -> String {
        match self.to_naive() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.year.to_string(),
        }
    }

    /// Whole years elapsed between `self` and `later`
    pub fn years_until(&self, later: &Date) -> Option<i32> {
        let start = self.to_naive()?;
        let end = later.to_naive()?;
        if end < start {
            return None;
        }
        let mut years = end.year() - start.year();
        if (end.month(), end.day()) < (start.month(), start.day()) {
            years -= 1;
        }
        Some(years)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{:04}-{:02}-{:02}", self.year, self.month, self.day))
    }
}

/// One office-holder's static data entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based ordinal, also the image key suffix
    pub number: u8,
    pub name: &'static str,
    pub party: Party,
    pub term_start: u16,
    /// `None` while the holder is still serving
    pub term_end: Option<u16>,
    pub terms_summary: &'static str,
    pub description: &'static str,
    pub birth_date: Option<Date>,
    pub death_date: Option<Date>,
    pub birth_place: Option<&'static str>,
    pub key_achievements: &'static [&'static str],
    pub notable_facts: &'static [&'static str],
}

/// External JSON shape, including the derived `image` key
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Record", 13)?;
        state.serialize_field("number", &self.number)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("party", &self.party)?;
        state.serialize_field("termStart", &self.term_start)?;
        state.serialize_field("termEnd", &self.term_end)?;
        state.serialize_field("terms", self.terms_summary)?;
        state.serialize_field("description", self.description)?;
        state.serialize_field("birthDate", &self.birth_date)?;
        state.serialize_field("deathDate", &self.death_date)?;
        state.serialize_field("birthPlace", &self.birth_place)?;
        state.serialize_field("keyAchievements", self.key_achievements)?;
        state.serialize_field("notableFacts", self.notable_facts)?;
        state.serialize_field("image", &self.image_key())?;
        state.end()
    }
}

impl Record {
    /// Image asset key, e.g. `pm07`
    pub fn image_key(&self) -> String {
        format!("pm{:02}", self.number)
    }

    /// Zero-padded ordinal shown on the card, e.g. `07`
    pub fn ordinal_label(&self) -> String {
        format!("{:02}", self.number)
    }

    /// First-to-last year of office, e.g. `1867–1873` or `2025–Present`
    pub fn term_string(&self) -> String {
        match self.term_end {
            Some(end) => format!("{}–{}", self.term_start, end),
            None => format!("{}–Present", self.term_start),
        }
    }

    pub fn is_serving(&self) -> bool {
        self.term_end.is_none()
    }

    /// Vertical shift that centres the face in the portrait frame
    pub fn face_offset(&self) -> f32 {
        FACE_OFFSETS
            .get(usize::from(self.number).wrapping_sub(1))
            .copied()
            .unwrap_or(DEFAULT_FACE_OFFSET)
    }

    /// "January 11, 1815 · Glasgow, Scotland"
    pub fn born_label(&self) -> Option<String> {
        match (self.birth_date, self.birth_place) {
            (Some(date), Some(place)) => Some(format!("{} · {}", date.long_format(), place)),
            (Some(date), None) => Some(date.long_format()),
            (None, Some(place)) => Some(place.to_string()),
            (None, None) => None,
        }
    }

    /// Death date, or "Living" when absent
    pub fn died_label(&self) -> String {
        self.death_date
            .map(|date| date.long_format())
            .unwrap_or_else(|| "Living".to_string())
    }

    /// Age at death, or age reached in `as_of_year` while living
    pub fn age_label(&self, as_of_year: i32) -> Option<String> {
        let born = self.birth_date?;
        match self.death_date {
            Some(died) => born.years_until(&died).map(|age| format!("Died aged {}", age)),
            None => Some(format!("Age {} in {}", as_of_year - born.year, as_of_year)),
        }
    }
}

const DEFAULT_FACE_OFFSET: f32 = -20.0;

/// Face-centring offsets, indexed by `number - 1`
const FACE_OFFSETS: [f32; 24] = [
    -20.0, -30.0, -20.0, -20.0, -20.0, -30.0, -20.0, -30.0, -20.0, -20.0, -20.0, -30.0,
    -30.0, -20.0, -40.0, -30.0, -40.0, -30.0, -40.0, -30.0, -30.0, -30.0, -30.0, -30.0,
];

/// Violations of the record store invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record store is empty")]
    Empty,

    #[error("record at position {position} has number {found}, expected {expected}")]
    NonSequentialNumber { position: usize, expected: usize, found: u8 },

    #[error("record {number} starts in {term_start}, before the previous record ({previous_start})")]
    OutOfOrder { number: u8, term_start: u16, previous_start: u16 },

    #[error("record {number} ends in {term_end}, before it starts in {term_start}")]
    InvertedTerm { number: u8, term_start: u16, term_end: u16 },
}

/// Check ordering and term invariants of a record slice
pub fn validate(records: &[Record]) -> Result<(), StoreError> {
    if records.is_empty() {
        return Err(StoreError::Empty);
    }

    let mut previous_start: Option<u16> = None;
    for (position, record) in records.iter().enumerate() {
        let expected = position + 1;
        if usize::from(record.number) != expected {
            return Err(StoreError::NonSequentialNumber {
                position,
                expected,
                found: record.number,
            });
        }

        if let Some(end) = record.term_end {
            if end < record.term_start {
                return Err(StoreError::InvertedTerm {
                    number: record.number,
                    term_start: record.term_start,
                    term_end: end,
                });
            }
        }

        // Terms can start in the same year (1896, 1984, 1993)
        if let Some(prev) = previous_start {
            if record.term_start < prev {
                return Err(StoreError::OutOfOrder {
                    number: record.number,
                    term_start: record.term_start,
                    previous_start: prev,
                });
            }
        }
        previous_start = Some(record.term_start);
    }

    Ok(())
}

/// All records, ordered by number
pub fn all() -> &'static [Record] {
    &RECORDS
}

/// Years shown at either end of the full timeline header
pub fn span() -> (u16, u16) {
    match (RECORDS.first(), RECORDS.last()) {
        (Some(first), Some(last)) => (first.term_start, last.term_end.unwrap_or(last.term_start)),
        _ => (0, 0),
    }
}

/// Serialize the whole store into the external JSON schema
pub fn to_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(all())
}

static RECORDS: [Record; 24] = [
    Record {
        number: 1,
        name: "Sir John A. Macdonald",
        party: Party::LiberalConservative,
        term_start: 1867,
        term_end: Some(1873),
        terms_summary: "1867–1873, 1878–1891",
        description: "Canada's first Prime Minister and a Father of Confederation. He oversaw the construction of the Canadian Pacific Railway and the expansion of Canada westward.",
        birth_date: Some(Date::new(1815, 1, 11)),
        death_date: Some(Date::new(1891, 6, 6)),
        birth_place: Some("Glasgow, Scotland"),
        key_achievements: &["Led Confederation in 1867", "Built the Canadian Pacific Railway"],
        notable_facts: &["Died in office during his second term"],
    },
    Record {
        number: 2,
        name: "Alexander Mackenzie",
        party: Party::Liberal,
        term_start: 1873,
        term_end: Some(1878),
        terms_summary: "1873–1878",
        description: "First Liberal PM. Introduced the secret ballot and created the Supreme Court of Canada. Known for his integrity and frugal management of public finances.",
        birth_date: Some(Date::new(1822, 1, 28)),
        death_date: Some(Date::new(1892, 4, 17)),
        birth_place: Some("Logierait, Scotland"),
        key_achievements: &["Introduced the secret ballot", "Created the Supreme Court of Canada"],
        notable_facts: &["Worked as a stonemason before entering politics"],
    },
    Record {
        number: 3,
        name: "Sir John Abbott",
        party: Party::Conservative,
        term_start: 1891,
        term_end: Some(1892),
        terms_summary: "1891–1892",
        description: "First Canadian-born Prime Minister. Served briefly after Macdonald's death. Previously served as Mayor of Montreal and Dean of McGill Law Faculty.",
        birth_date: Some(Date::new(1821, 3, 12)),
        death_date: Some(Date::new(1893, 10, 30)),
        birth_place: Some("St. Andrews, Lower Canada"),
        key_achievements: &["Steadied the government after Macdonald's death"],
        notable_facts: &["First Canadian-born Prime Minister", "Former Mayor of Montreal"],
    },
    Record {
        number: 4,
        name: "Sir John Thompson",
        party: Party::Conservative,
        term_start: 1892,
        term_end: Some(1894),
        terms_summary: "1892–1894",
        description: "Reformed Canadian criminal law and created the Criminal Code. Died suddenly at Windsor Castle after being sworn into the British Privy Council.",
        birth_date: Some(Date::new(1845, 11, 10)),
        death_date: Some(Date::new(1894, 12, 12)),
        birth_place: Some("Halifax, Nova Scotia"),
        key_achievements: &["Created the Criminal Code"],
        notable_facts: &["Died at Windsor Castle"],
    },
    Record {
        number: 5,
        name: "Sir Mackenzie Bowell",
        party: Party::Conservative,
        term_start: 1894,
        term_end: Some(1896),
        terms_summary: "1894–1896",
        description: "Rose from newspaper editor to Prime Minister. His government was plagued by the Manitoba Schools Question crisis.",
        birth_date: Some(Date::new(1823, 12, 27)),
        death_date: Some(Date::new(1917, 12, 10)),
        birth_place: Some("Rickinghall, England"),
        key_achievements: &["Governed from the Senate"],
        notable_facts: &["Former newspaper editor"],
    },
    Record {
        number: 6,
        name: "Sir Charles Tupper",
        party: Party::Conservative,
        term_start: 1896,
        term_end: Some(1896),
        terms_summary: "1896 (68 days)",
        description: "Shortest-serving PM at just 68 days. A Father of Confederation who was instrumental in bringing Nova Scotia into Canada.",
        birth_date: Some(Date::new(1821, 7, 2)),
        death_date: Some(Date::new(1915, 10, 30)),
        birth_place: Some("Amherst, Nova Scotia"),
        key_achievements: &["Brought Nova Scotia into Confederation"],
        notable_facts: &["Shortest-serving PM at 68 days"],
    },
    Record {
        number: 7,
        name: "Sir Wilfrid Laurier",
        party: Party::Liberal,
        term_start: 1896,
        term_end: Some(1911),
        terms_summary: "1896–1911",
        description: "First francophone PM. Oversaw massive immigration and the creation of Alberta and Saskatchewan. His image appears on the Canadian $5 bill.",
        birth_date: Some(Date::new(1841, 11, 20)),
        death_date: Some(Date::new(1919, 2, 17)),
        birth_place: Some("Saint-Lin, Canada East"),
        key_achievements: &["Created Alberta and Saskatchewan", "Oversaw mass immigration to the West"],
        notable_facts: &["First francophone Prime Minister", "Appears on the $5 bill"],
    },
    Record {
        number: 8,
        name: "Sir Robert Borden",
        party: Party::Conservative,
        term_start: 1911,
        term_end: Some(1920),
        terms_summary: "1911–1920",
        description: "Led Canada through WWI. Fought for and won Canada's right to sign the Treaty of Versailles independently. Introduced income tax as a 'temporary' measure.",
        birth_date: Some(Date::new(1854, 6, 26)),
        death_date: Some(Date::new(1937, 6, 10)),
        birth_place: Some("Grand-Pré, Nova Scotia"),
        key_achievements: &["Led Canada through the First World War", "Signed the Treaty of Versailles for Canada"],
        notable_facts: &["Introduced income tax as a temporary measure"],
    },
    Record {
        number: 9,
        name: "Arthur Meighen",
        party: Party::Conservative,
        term_start: 1920,
        term_end: Some(1921),
        terms_summary: "1920–1921, 1926",
        description: "Served two brief terms. Known for his oratorical skills and role in the Winnipeg General Strike. Later served in the Senate.",
        birth_date: Some(Date::new(1874, 6, 16)),
        death_date: Some(Date::new(1960, 8, 5)),
        birth_place: Some("Anderson, Ontario"),
        key_achievements: &["Formed two governments"],
        notable_facts: &["Later served in the Senate"],
    },
    Record {
        number: 10,
        name: "William Lyon Mackenzie King",
        party: Party::Liberal,
        term_start: 1921,
        term_end: Some(1948),
        terms_summary: "1921–1926, 1926–1930, 1935–1948",
        description: "Canada's longest-serving PM (21+ years). Led Canada through WWII and expanded social programs. Known for his eccentric spiritualism.",
        birth_date: Some(Date::new(1874, 12, 17)),
        death_date: Some(Date::new(1950, 7, 22)),
        birth_place: Some("Berlin (Kitchener), Ontario"),
        key_achievements: &["Led Canada through the Second World War", "Expanded social programs"],
        notable_facts: &["Longest-serving Prime Minister"],
    },
    Record {
        number: 11,
        name: "R.B. Bennett",
        party: Party::Conservative,
        term_start: 1930,
        term_end: Some(1935),
        terms_summary: "1930–1935",
        description: "Led during the Great Depression. Created the Bank of Canada and Canadian Broadcasting Corporation. Later became a British Viscount.",
        birth_date: Some(Date::new(1870, 7, 3)),
        death_date: Some(Date::new(1947, 6, 26)),
        birth_place: Some("Hopewell Hill, New Brunswick"),
        key_achievements: &["Created the Bank of Canada", "Founded public broadcasting"],
        notable_facts: &["Became a British Viscount"],
    },
    Record {
        number: 12,
        name: "Louis St. Laurent",
        party: Party::Liberal,
        term_start: 1948,
        term_end: Some(1957),
        terms_summary: "1948–1957",
        description: "Known as 'Uncle Louis.' Oversaw Newfoundland joining Confederation and Canada's role in creating NATO. Built the Trans-Canada Highway.",
        birth_date: Some(Date::new(1882, 2, 1)),
        death_date: Some(Date::new(1973, 7, 25)),
        birth_place: Some("Compton, Quebec"),
        key_achievements: &["Welcomed Newfoundland into Confederation", "Helped found NATO"],
        notable_facts: &["Nicknamed 'Uncle Louis'"],
    },
    Record {
        number: 13,
        name: "John Diefenbaker",
        party: Party::ProgressiveConservative,
        term_start: 1957,
        term_end: Some(1963),
        terms_summary: "1957–1963",
        description: "Champion of human rights who created the Canadian Bill of Rights. Extended voting rights to Indigenous peoples and expanded northern development.",
        birth_date: Some(Date::new(1895, 9, 18)),
        death_date: Some(Date::new(1979, 8, 16)),
        birth_place: Some("Neustadt, Ontario"),
        key_achievements: &["Enacted the Canadian Bill of Rights", "Extended the federal vote to First Nations"],
        notable_facts: &["Championed northern development"],
    },
    Record {
        number: 14,
        name: "Lester B. Pearson",
        party: Party::Liberal,
        term_start: 1963,
        term_end: Some(1968),
        terms_summary: "1963–1968",
        description: "Nobel Peace Prize winner for resolving the Suez Crisis. Introduced universal healthcare, the Canada Pension Plan, and the maple leaf flag.",
        birth_date: Some(Date::new(1897, 4, 23)),
        death_date: Some(Date::new(1972, 12, 27)),
        birth_place: Some("Newtonbrook, Ontario"),
        key_achievements: &["Introduced universal healthcare", "Adopted the maple leaf flag"],
        notable_facts: &["Won the Nobel Peace Prize"],
    },
    Record {
        number: 15,
        name: "Pierre Elliott Trudeau",
        party: Party::Liberal,
        term_start: 1968,
        term_end: Some(1984),
        terms_summary: "1968–1979, 1980–1984",
        description: "Charismatic leader who patriated the Constitution and created the Charter of Rights and Freedoms. Implemented official bilingualism.",
        birth_date: Some(Date::new(1919, 10, 18)),
        death_date: Some(Date::new(2000, 9, 28)),
        birth_place: Some("Montreal, Quebec"),
        key_achievements: &["Patriated the Constitution", "Created the Charter of Rights and Freedoms"],
        notable_facts: &["Implemented official bilingualism"],
    },
    Record {
        number: 16,
        name: "Joe Clark",
        party: Party::ProgressiveConservative,
        term_start: 1979,
        term_end: Some(1980),
        terms_summary: "1979–1980",
        description: "Youngest PM at 39. His minority government fell after just 9 months. Later served as External Affairs Minister and PC Party leader.",
        birth_date: Some(Date::new(1939, 6, 5)),
        death_date: None,
        birth_place: Some("High River, Alberta"),
        key_achievements: &["Later served as External Affairs Minister"],
        notable_facts: &["Youngest Prime Minister at 39"],
    },
    Record {
        number: 17,
        name: "John Turner",
        party: Party::Liberal,
        term_start: 1984,
        term_end: Some(1984),
        terms_summary: "1984 (79 days)",
        description: "Second shortest-serving PM. Served 79 days before calling an election that resulted in a historic defeat. Former Olympic sprinter.",
        birth_date: Some(Date::new(1929, 6, 7)),
        death_date: Some(Date::new(2020, 9, 19)),
        birth_place: Some("Richmond, England"),
        key_achievements: &["Led the Liberal Party through two elections"],
        notable_facts: &["Second shortest-serving PM", "Former Olympic-calibre sprinter"],
    },
    Record {
        number: 18,
        name: "Brian Mulroney",
        party: Party::ProgressiveConservative,
        term_start: 1984,
        term_end: Some(1993),
        terms_summary: "1984–1993",
        description: "Negotiated free trade agreements with the US and Mexico (NAFTA). Fought against South African apartheid. Won two majority governments.",
        birth_date: Some(Date::new(1939, 3, 20)),
        death_date: Some(Date::new(2024, 2, 29)),
        birth_place: Some("Baie-Comeau, Quebec"),
        key_achievements: &["Negotiated free trade with the US and Mexico", "Opposed South African apartheid"],
        notable_facts: &["Won two majority governments"],
    },
    Record {
        number: 19,
        name: "Kim Campbell",
        party: Party::ProgressiveConservative,
        term_start: 1993,
        term_end: Some(1993),
        terms_summary: "1993 (132 days)",
        description: "Canada's first and only female Prime Minister. Served 132 days. Her party was reduced to 2 seats in the subsequent election.",
        birth_date: Some(Date::new(1947, 3, 10)),
        death_date: None,
        birth_place: Some("Port Alberni, British Columbia"),
        key_achievements: &["First woman to serve as Prime Minister"],
        notable_facts: &["Served 132 days"],
    },
    Record {
        number: 20,
        name: "Jean Chrétien",
        party: Party::Liberal,
        term_start: 1993,
        term_end: Some(2003),
        terms_summary: "1993–2003",
        description: "Won three consecutive majority governments. Known for eliminating the federal deficit. Kept Canada out of the Iraq War.",
        birth_date: Some(Date::new(1934, 1, 11)),
        death_date: None,
        birth_place: Some("Shawinigan, Quebec"),
        key_achievements: &["Eliminated the federal deficit", "Kept Canada out of the Iraq War"],
        notable_facts: &["Won three consecutive majorities"],
    },
    Record {
        number: 21,
        name: "Paul Martin",
        party: Party::Liberal,
        term_start: 2003,
        term_end: Some(2006),
        terms_summary: "2003–2006",
        description: "As Finance Minister, eliminated the deficit. As PM, created the Kelowna Accord for Indigenous peoples and legalized same-sex marriage.",
        birth_date: Some(Date::new(1938, 8, 28)),
        death_date: None,
        birth_place: Some("Windsor, Ontario"),
        key_achievements: &["Negotiated the Kelowna Accord", "Legalized same-sex marriage"],
        notable_facts: &["Former Finance Minister"],
    },
    Record {
        number: 22,
        name: "Stephen Harper",
        party: Party::Conservative,
        term_start: 2006,
        term_end: Some(2015),
        terms_summary: "2006–2015",
        description: "Economist who led Canada through the 2008 financial crisis. Issued a formal apology for residential schools. Won three elections.",
        birth_date: Some(Date::new(1959, 4, 30)),
        death_date: None,
        birth_place: Some("Toronto, Ontario"),
        key_achievements: &["Steered Canada through the 2008 financial crisis", "Apologized for residential schools"],
        notable_facts: &["Trained as an economist"],
    },
    Record {
        number: 23,
        name: "Justin Trudeau",
        party: Party::Liberal,
        term_start: 2015,
        term_end: Some(2025),
        terms_summary: "2015–2025",
        description: "Son of Pierre Trudeau. Legalized cannabis, implemented carbon pricing, and led pandemic response. First PM born after 1950.",
        birth_date: Some(Date::new(1971, 12, 25)),
        death_date: None,
        birth_place: Some("Ottawa, Ontario"),
        key_achievements: &["Legalized cannabis", "Introduced carbon pricing"],
        notable_facts: &["Son of Pierre Elliott Trudeau"],
    },
    Record {
        number: 24,
        name: "Mark Carney",
        party: Party::Liberal,
        term_start: 2025,
        term_end: None,
        terms_summary: "2025–Present",
        description: "Former Governor of the Bank of Canada and Bank of England. First former central banker to become PM. Focused on economic policy.",
        birth_date: Some(Date::new(1965, 3, 16)),
        death_date: None,
        birth_place: Some("Fort Smith, Northwest Territories"),
        key_achievements: &["Governed the Bank of Canada and the Bank of England"],
        notable_facts: &["First former central banker to become PM"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_is_valid() {
        assert_eq!(all().len(), 24);
        assert_eq!(validate(all()), Ok(()));
    }

    #[test]
    fn test_image_keys() {
        assert_eq!(all()[0].image_key(), "pm01");
        assert_eq!(all()[23].image_key(), "pm24");
        assert_eq!(all()[6].ordinal_label(), "07");
    }

    #[test]
    fn test_term_string_falls_back_to_present() {
        assert_eq!(all()[0].term_string(), "1867–1873");
        assert_eq!(all()[23].term_string(), "2025–Present");
        assert!(all()[23].is_serving());
    }

    #[test]
    fn test_face_offsets_come_from_table() {
        assert_eq!(all()[0].face_offset(), -20.0);
        assert_eq!(all()[14].face_offset(), -40.0);
        assert_eq!(all()[23].face_offset(), -30.0);
    }

    #[test]
    fn test_party_family() {
        assert_eq!(Party::LiberalConservative.family(), PartyFamily::Conservative);
        assert_eq!(Party::ProgressiveConservative.family(), PartyFamily::Conservative);
        assert_eq!(Party::Liberal.family(), PartyFamily::Liberal);
        assert_eq!(all()[12].party.label(), "Progressive Conservative");
    }

    #[test]
    fn test_dates_and_ages() {
        let macdonald = &all()[0];
        assert_eq!(
            macdonald.born_label().as_deref(),
            Some("January 11, 1815 · Glasgow, Scotland")
        );
        assert_eq!(macdonald.died_label(), "June 6, 1891");
        assert_eq!(macdonald.age_label(2025).as_deref(), Some("Died aged 76"));

        let carney = &all()[23];
        assert_eq!(carney.died_label(), "Living");
        assert_eq!(carney.age_label(2025).as_deref(), Some("Age 60 in 2025"));
    }

    #[test]
    fn test_span() {
        assert_eq!(span(), (1867, 2025));
    }

    #[test]
    fn test_validate_rejects_broken_stores() {
        assert_eq!(validate(&[]), Err(StoreError::Empty));

        let mut swapped = vec![all()[1].clone(), all()[0].clone()];
        assert!(matches!(
            validate(&swapped),
            Err(StoreError::NonSequentialNumber { position: 0, expected: 1, found: 2 })
        ));

        swapped[0].number = 1;
        swapped[1].number = 2;
        assert!(matches!(validate(&swapped), Err(StoreError::OutOfOrder { number: 2, .. })));

        let mut inverted = all()[0].clone();
        inverted.term_end = Some(1800);
        assert!(matches!(validate(&[inverted]), Err(StoreError::InvertedTerm { .. })));
    }

    #[test]
    fn test_json_schema_shape() {
        let value: serde_json::Value = serde_json::from_str(&to_json().unwrap()).unwrap();
        let last = &value[23];
        assert_eq!(last["number"], 24);
        assert_eq!(last["termStart"], 2025);
        assert!(last["termEnd"].is_null());
        assert_eq!(last["terms"], "2025–Present");
        assert_eq!(value[0]["party"], "Liberal-Conservative");
        assert_eq!(value[0]["birthDate"], "1815-01-11");
        assert!(value[0]["keyAchievements"].is_array());
        assert_eq!(value[0]["image"], "pm01");
        assert_eq!(last["image"], "pm24");
        assert_eq!(value[0].as_object().map(|fields| fields.len()), Some(13));
    }
}
