//! Weekly view of the selected sections.

use tracing::warn;

use crate::catalog::{Day, Section};
use crate::selection::SelectionRegistry;

/// One meeting of one selected section on one day of the week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleBlock {
    pub crn: String,
    pub title: String,
    pub day: Day,
    /// `HH:MM`, 24-hour
    pub start: String,
    /// `HH:MM`, 24-hour
    pub end: String,
    pub color: String,
    start_minutes: u32,
}

#[derive(Debug, Clone, Default)]
pub struct WeeklySchedule {
    blocks: Vec<ScheduleBlock>,
}

impl WeeklySchedule {
    /// Project every meeting day of every selected section into a block.
    ///
    /// Meetings without a clock time (e.g. "TBA") can't be placed and are
    /// skipped.
    pub fn from_selection(selection: &SelectionRegistry<Section>) -> Self {
        let mut blocks = Vec::new();

        for entry in selection.entries() {
            let section = entry.payload();

            for meeting in &section.meeting_times {
                let (Some(start), Some(end)) = (meeting.start(), meeting.end()) else {
                    warn!(crn = %section.crn, "meeting has no start or end time, skipping");
                    continue;
                };

                let (Some(start_clock), Some(end_clock), Some(start_minutes)) =
                    (start.clock(), end.clock(), start.minutes_since_midnight())
                else {
                    warn!(
                        crn = %section.crn,
                        start = %start.as_str(),
                        end = %end.as_str(),
                        "meeting time is not a clock time, skipping"
                    );
                    continue;
                };

                for day in &meeting.days {
                    blocks.push(ScheduleBlock {
                        crn: section.crn.clone(),
                        title: section.short_title(),
                        day: *day,
                        start: start_clock.clone(),
                        end: end_clock.clone(),
                        color: entry.color().to_string(),
                        start_minutes,
                    });
                }
            }
        }

        WeeklySchedule { blocks }
    }

    pub fn blocks(&self) -> &[ScheduleBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// A day's blocks ordered by start time.
    pub fn blocks_on(&self, day: Day) -> Vec<&ScheduleBlock> {
        let mut blocks: Vec<_> = self.blocks.iter().filter(|b| b.day == day).collect();
        blocks.sort_by_key(|b| b.start_minutes);
        blocks
    }

    /// Sunday through Saturday, each with its ordered blocks.
    pub fn days(&self) -> impl Iterator<Item = (Day, Vec<&ScheduleBlock>)> {
        Day::ALL.into_iter().map(|day| (day, self.blocks_on(day)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MeetingTime, SearchResults};
    use crate::catalog::tests::SAMPLE_RESULTS;
    use crate::palette::Palette;

    fn selection(crns: &[&str]) -> SelectionRegistry<Section> {
        let results = SearchResults::from_json(SAMPLE_RESULTS).unwrap();
        let mut selection = SelectionRegistry::new(Palette::default());
        for crn in crns {
            selection.add(results.find(crn).unwrap().clone());
        }
        selection
    }

    #[test]
    fn one_block_per_meeting_day() {
        let schedule = WeeklySchedule::from_selection(&selection(&["51234", "51300"]));

        // MWF + R for calculus, TR for data organization
        assert_eq!(schedule.blocks().len(), 6);
        assert!(schedule.blocks_on(Day::Sunday).is_empty());
        assert_eq!(schedule.blocks_on(Day::Monday).len(), 1);
    }

    #[test]
    fn blocks_carry_selection_color_and_clock_times() {
        let schedule = WeeklySchedule::from_selection(&selection(&["51234", "51300"]));
        let palette = Palette::default();

        let monday = schedule.blocks_on(Day::Monday);
        assert_eq!(monday[0].title, "MATH1512 003");
        assert_eq!(monday[0].start, "09:00");
        assert_eq!(monday[0].end, "09:50");
        assert_eq!(monday[0].color, palette.colors()[0]);

        let tuesday = schedule.blocks_on(Day::Tuesday);
        assert_eq!(tuesday[0].color, palette.colors()[1]);
    }

    #[test]
    fn day_blocks_ordered_by_start() {
        let schedule = WeeklySchedule::from_selection(&selection(&["51234", "51300"]));

        let thursday: Vec<_> = schedule
            .blocks_on(Day::Thursday)
            .into_iter()
            .map(|b| (b.crn.as_str(), b.start.as_str()))
            .collect();
        assert_eq!(thursday, vec![("51300", "11:00"), ("51234", "14:00")]);
    }

    #[test]
    fn unplaceable_meetings_are_skipped() {
        let results = SearchResults::from_json(SAMPLE_RESULTS).unwrap();
        let mut section = results.find("51300").unwrap().clone();
        section.meeting_times[0].start_time = "TBA".to_string();

        let mut selection = SelectionRegistry::new(Palette::default());
        selection.add(section);

        assert!(WeeklySchedule::from_selection(&selection).is_empty());
    }

    fn calculus_with(edit: impl FnOnce(&mut MeetingTime)) -> SelectionRegistry<Section> {
        let results = SearchResults::from_json(SAMPLE_RESULTS).unwrap();
        let mut section = results.find("51234").unwrap().clone();
        edit(&mut section.meeting_times[1]);

        let mut selection = SelectionRegistry::new(Palette::default());
        selection.add(section);
        selection
    }

    #[test]
    fn opaque_end_time_is_skipped() {
        let schedule =
            WeeklySchedule::from_selection(&calculus_with(|m| m.end_time = "TBA".to_string()));

        // The Thursday meeting is dropped, the MWF lecture stays
        assert_eq!(schedule.blocks().len(), 3);
        assert!(schedule.blocks_on(Day::Thursday).is_empty());
        assert_eq!(schedule.blocks_on(Day::Friday)[0].start, "09:00");
    }

    #[test]
    fn empty_start_or_end_is_skipped() {
        for edit in [
            (|m: &mut MeetingTime| m.start_time.clear()) as fn(&mut MeetingTime),
            |m: &mut MeetingTime| m.end_time.clear(),
        ] {
            let schedule = WeeklySchedule::from_selection(&calculus_with(edit));

            assert_eq!(schedule.blocks().len(), 3);
            assert!(schedule.blocks_on(Day::Thursday).is_empty());
            assert_eq!(schedule.blocks_on(Day::Monday).len(), 1);
        }
    }

    #[test]
    fn days_cover_the_week() {
        let schedule = WeeklySchedule::from_selection(&selection(&["51300"]));
        let days: Vec<_> = schedule.days().map(|(day, blocks)| (day, blocks.len())).collect();

        assert_eq!(days.len(), 7);
        assert_eq!(days[2], (Day::Tuesday, 1));
        assert_eq!(days[4], (Day::Thursday, 1));
    }
}
