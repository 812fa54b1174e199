//! Catalog types as delivered by the catalog search API.
//!
//! The planner never transforms these; they are the payload carried by
//! selection entries and the source of meeting times for the schedule.

use std::fmt;
use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::time_format::RawTime;

/// Anything that can be selected: it must carry a unique, stable id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A `{code, name}` pair, used for semesters, subjects, campuses, etc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coded {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub number: String,
    pub title: String,
    /// Older payloads carry the subject on the course instead of the section
    #[serde(default)]
    pub subject: Option<Coded>,
    #[serde(default)]
    pub catalog_description: String,
}

/// Day of the week, as single-letter codes (U = Sunday, R = Thursday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    #[serde(rename = "U")]
    Sunday,
    #[serde(rename = "M")]
    Monday,
    #[serde(rename = "T")]
    Tuesday,
    #[serde(rename = "W")]
    Wednesday,
    #[serde(rename = "R")]
    Thursday,
    #[serde(rename = "F")]
    Friday,
    #[serde(rename = "S")]
    Saturday,
}

impl Day {
    /// Sunday through Saturday.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// 0 for Sunday through 6 for Saturday.
    pub fn index(self) -> u32 {
        self.weekday().num_days_from_sunday()
    }

    pub fn letter(self) -> char {
        match self {
            Day::Sunday => 'U',
            Day::Monday => 'M',
            Day::Tuesday => 'T',
            Day::Wednesday => 'W',
            Day::Thursday => 'R',
            Day::Friday => 'F',
            Day::Saturday => 'S',
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            Day::Sunday => Weekday::Sun,
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
        }
    }
}

impl fmt::Display for Day {
    /// Short weekday name, e.g. "Mon"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weekday())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingTime {
    pub days: Vec<Day>,
    pub start_time: String,
    pub end_time: String,
    /// Missing for online and to-be-announced meetings
    pub building: Option<Coded>,
    #[serde(default)]
    pub room: String,
}

impl MeetingTime {
    pub fn start(&self) -> Option<RawTime> {
        RawTime::parse(&self.start_time)
    }

    pub fn end(&self) -> Option<RawTime> {
        RawTime::parse(&self.end_time)
    }

    pub fn meets_on(&self, day: Day) -> bool {
        self.days.contains(&day)
    }

    /// Building code and room, e.g. "DSH 125", or `None` without a building.
    pub fn location(&self) -> Option<String> {
        self.building
            .as_ref()
            .map(|b| format!("{} {}", b.code, self.room).trim_end().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub primary: bool,
    pub first: String,
    pub last: String,
    pub middle: Option<String>,
    pub email: String,
}

impl fmt::Display for Instructor {
    /// `* First M Last (email)` for the primary instructor, `- ...` otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.primary { '*' } else { '-' };
        write!(f, "{} {}", marker, self.first)?;
        if let Some(middle) = self.middle.as_deref().filter(|m| !m.is_empty()) {
            write!(f, " {}", middle)?;
        }
        write!(f, " {} ({})", self.last, self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crosslist {
    pub crn: String,
}

/// A single schedulable offering of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub crn: String,
    /// Section number within the course, e.g. "001"
    pub number: String,
    pub subject: Coded,
    pub course: Course,
    pub campus: Coded,
    pub semester: Coded,
    #[serde(default)]
    pub meeting_times: Vec<MeetingTime>,
    #[serde(default)]
    pub instructors: Vec<Instructor>,
    #[serde(default)]
    pub crosslists: Vec<Crosslist>,
    pub part_of_term: Coded,
    pub instructional_method: Option<Coded>,
    pub delivery_type: Coded,
    pub credits: f64,
    pub enrollment: u32,
    pub enrollment_max: u32,
    pub waitlist: u32,
    pub waitlist_max: u32,
    pub status: Coded,
    pub fees: Option<String>,
}

impl Section {
    /// e.g. "MATH 1512.003 - Calculus I"
    pub fn title(&self) -> String {
        format!(
            "{} {}.{} - {}",
            self.subject.code, self.course.number, self.number, self.course.title
        )
    }

    /// e.g. "MATH1512 003", the label used on calendar blocks
    pub fn short_title(&self) -> String {
        format!("{}{} {}", self.subject.code, self.course.number, self.number)
    }

    pub fn enrollment_summary(&self) -> String {
        format!(
            "Enrolled: {}/{} (Waitlist: {}/{})",
            self.enrollment, self.enrollment_max, self.waitlist, self.waitlist_max
        )
    }

    pub fn primary_instructor(&self) -> Option<&Instructor> {
        self.instructors.iter().find(|i| i.primary)
    }
}

impl Identified for Section {
    fn id(&self) -> &str {
        &self.crn
    }
}

/// One page of search results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(rename = "search_results")]
    pub sections: Vec<Section>,
}

impl SearchResults {
    /// Parse `{"search_results": [...]}` or a bare array of sections.
    pub fn from_json(json: &str) -> PlannerResult<Self> {
        let parse_err = |e: serde_json::Error| PlannerError::ResultsParse(e.to_string());

        if json.trim_start().starts_with('[') {
            let sections: Vec<Section> = serde_json::from_str(json).map_err(parse_err)?;
            Ok(SearchResults { sections })
        } else {
            serde_json::from_str(json).map_err(parse_err)
        }
    }

    pub fn load(path: &Path) -> PlannerResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn find(&self, crn: &str) -> PlannerResult<&Section> {
        self.sections
            .iter()
            .find(|s| s.crn == crn)
            .ok_or_else(|| PlannerError::SectionNotFound(crn.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SAMPLE_RESULTS: &str = r#"{
  "search_results": [
    {
      "crn": "51234",
      "number": "003",
      "subject": { "code": "MATH", "name": "Mathematics" },
      "course": { "number": "1512", "title": "Calculus I", "catalog_description": "Limits." },
      "campus": { "code": "ABQ", "name": "Albuquerque/Main" },
      "semester": { "code": "202310", "name": "Spring 2023" },
      "meeting_times": [
        {
          "days": ["M", "W", "F"],
          "start_time": "0900",
          "end_time": "0950",
          "building": { "code": "DSH", "name": "Dane Smith Hall" },
          "room": "125"
        },
        {
          "days": ["R"],
          "start_time": "14:00:00",
          "end_time": "15:15:00",
          "building": null,
          "room": ""
        }
      ],
      "instructors": [
        { "primary": true, "first": "Ada", "last": "Lovelace", "middle": "K", "email": "ada@example.edu" },
        { "primary": false, "first": "Alan", "last": "Turing", "middle": null, "email": "alan@example.edu" }
      ],
      "crosslists": [{ "crn": "51235" }],
      "part_of_term": { "code": "1", "name": "Full Term" },
      "instructional_method": null,
      "delivery_type": { "code": "LC", "name": "Lecture" },
      "credits": 4,
      "enrollment": 38,
      "enrollment_max": 40,
      "waitlist": 0,
      "waitlist_max": 10,
      "status": { "code": "A", "name": "Active" },
      "fees": null
    },
    {
      "crn": "51300",
      "number": "001",
      "subject": { "code": "CS", "name": "Computer Science" },
      "course": { "number": "241", "title": "Data Organization" },
      "campus": { "code": "ABQ", "name": "Albuquerque/Main" },
      "semester": { "code": "202310", "name": "Spring 2023" },
      "meeting_times": [
        {
          "days": ["T", "R"],
          "start_time": "1100",
          "end_time": "1215",
          "building": { "code": "CENT", "name": "Centennial Engineering" },
          "room": "1041"
        }
      ],
      "instructors": [],
      "part_of_term": { "code": "1", "name": "Full Term" },
      "instructional_method": { "code": "ENH", "name": "Web Enhanced" },
      "delivery_type": { "code": "LC", "name": "Lecture" },
      "credits": 3,
      "enrollment": 80,
      "enrollment_max": 80,
      "waitlist": 4,
      "waitlist_max": 5,
      "status": { "code": "A", "name": "Active" }
    }
  ]
}"#;

    #[test]
    fn parses_wrapped_results() {
        let results = SearchResults::from_json(SAMPLE_RESULTS).unwrap();
        assert_eq!(results.len(), 2);

        let calc = results.find("51234").unwrap();
        assert_eq!(calc.title(), "MATH 1512.003 - Calculus I");
        assert_eq!(calc.short_title(), "MATH1512 003");
        assert_eq!(calc.meeting_times[0].days, vec![Day::Monday, Day::Wednesday, Day::Friday]);
        assert_eq!(calc.crosslists[0].crn, "51235");
        assert_eq!(calc.id(), "51234");
    }

    #[test]
    fn parses_bare_array() {
        let results = SearchResults::from_json(SAMPLE_RESULTS).unwrap();
        let bare = serde_json::to_string(&results.sections).unwrap();

        let reparsed = SearchResults::from_json(&bare).unwrap();
        assert_eq!(reparsed.len(), 2);
    }

    #[test]
    fn malformed_results_are_parse_errors() {
        assert!(matches!(
            SearchResults::from_json("{\"search_results\": 3}"),
            Err(PlannerError::ResultsParse(_))
        ));
    }

    #[test]
    fn parse_errors_keep_location() {
        let broken = SAMPLE_RESULTS.replacen("\"R\"]", "\"X\"]", 1);

        let Err(PlannerError::ResultsParse(msg)) = SearchResults::from_json(&broken) else {
            panic!("expected a parse error");
        };
        assert!(msg.contains("unknown variant `X`"), "{msg}");
        assert!(msg.contains("line"), "{msg}");
    }

    #[test]
    fn bare_array_errors_keep_location() {
        let Err(PlannerError::ResultsParse(msg)) = SearchResults::from_json("[{\"crn\": 5}]") else {
            panic!("expected a parse error");
        };
        assert!(msg.contains("line 1"), "{msg}");
    }

    #[test]
    fn course_subject_is_optional() {
        let results = SearchResults::from_json(SAMPLE_RESULTS).unwrap();
        assert_eq!(results.find("51234").unwrap().course.subject, None);

        let course: Course = serde_json::from_str(
            r#"{"number": "1512", "title": "Calculus I", "subject": {"code": "MATH", "name": "Mathematics"}}"#,
        )
        .unwrap();
        assert_eq!(course.subject.map(|s| s.code).as_deref(), Some("MATH"));
    }

    #[test]
    fn unknown_crn_is_not_found() {
        let results = SearchResults::from_json(SAMPLE_RESULTS).unwrap();
        assert!(matches!(
            results.find("99999"),
            Err(PlannerError::SectionNotFound(crn)) if crn == "99999"
        ));
    }

    #[test]
    fn instructor_lines() {
        let results = SearchResults::from_json(SAMPLE_RESULTS).unwrap();
        let calc = results.find("51234").unwrap();

        assert_eq!(calc.instructors[0].to_string(), "* Ada K Lovelace (ada@example.edu)");
        assert_eq!(calc.instructors[1].to_string(), "- Alan Turing (alan@example.edu)");
        assert_eq!(calc.primary_instructor().map(|i| i.last.as_str()), Some("Lovelace"));
    }

    #[test]
    fn meeting_time_helpers() {
        let results = SearchResults::from_json(SAMPLE_RESULTS).unwrap();
        let calc = results.find("51234").unwrap();
        let lecture = &calc.meeting_times[0];
        let online = &calc.meeting_times[1];

        assert_eq!(lecture.location().as_deref(), Some("DSH 125"));
        assert_eq!(online.location(), None);
        assert!(lecture.meets_on(Day::Wednesday));
        assert!(!lecture.meets_on(Day::Thursday));
        assert_eq!(online.start().and_then(|t| t.clock()).as_deref(), Some("14:00"));
    }

    #[test]
    fn day_numbering_and_names() {
        assert_eq!(Day::Sunday.index(), 0);
        assert_eq!(Day::Thursday.index(), 4);
        assert_eq!(Day::Saturday.index(), 6);
        assert_eq!(Day::Thursday.letter(), 'R');
        assert_eq!(Day::Monday.to_string(), "Mon");
    }
}
