//! Lays timetable entries onto the day × slot grid rendered by the timetable
//! table. Every (slot, day) position resolves to exactly one [`Cell`]:
//! the first slot of an entry carries the entry and its row span, the slots it
//! spans over are [`Cell::Covered`] (no `<td>` is emitted for them), and the
//! rest are [`Cell::Empty`].

use super::types::TimetableEntry;
use crate::features::catalog::{self, DayOfWeek, TIME_SLOTS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell<'a> {
    Start { entry: &'a TimetableEntry, span: usize },
    Covered,
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row<'a> {
    pub time: &'static str,
    /// One cell per column in [`Grid::days`].
    pub cells: Vec<Cell<'a>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Grid<'a> {
    pub days: Vec<DayOfWeek>,
    pub rows: Vec<Row<'a>>,
    /// Entries that start in a slot another entry already occupies.
    pub overlaps: Vec<&'a TimetableEntry>,
}

/// Monday to Friday, then any other day used by an entry in order of first
/// appearance. Unrecognised day names are ignored.
pub fn display_days(entries: &[TimetableEntry]) -> Vec<DayOfWeek> {
    let mut days = DayOfWeek::WORKWEEK.to_vec();
    for day in entries.iter().filter_map(TimetableEntry::day) {
        if !days.contains(&day) {
            days.push(day);
        }
    }
    days
}

/// Slots an entry covers before any truncation. An end at or before the start,
/// or an off-grid end, still occupies its starting slot.
pub fn raw_span(start: usize, end: Option<usize>) -> usize {
    match end {
        Some(end) if end > start => end - start,
        _ => 1,
    }
}

pub fn build_grid(entries: &[TimetableEntry]) -> Grid<'_> {
    let days = display_days(entries);
    let slot_count = TIME_SLOTS.len();
    let mut columns = vec![vec![Cell::Empty; slot_count]; days.len()];
    let mut overlaps = Vec::new();

    for entry in entries {
        let Some(column) = entry
            .day()
            .and_then(|day| days.iter().position(|shown| *shown == day))
        else {
            continue;
        };
        let Some(start) = catalog::slot_index(&entry.start_time) else {
            continue;
        };
        let cells = &mut columns[column];
        if cells[start] != Cell::Empty {
            overlaps.push(entry);
            continue;
        }

        let wanted = raw_span(start, catalog::slot_index(&entry.end_time));
        // Stop at the next occupied slot or the end of the day.
        let free = cells[start..]
            .iter()
            .take_while(|cell| **cell == Cell::Empty)
            .count();
        let span = wanted.min(free);

        cells[start] = Cell::Start { entry, span };
        for cell in &mut cells[start + 1..start + span] {
            *cell = Cell::Covered;
        }
    }

    let rows = TIME_SLOTS
        .iter()
        .enumerate()
        .map(|(slot, &time)| Row {
            time,
            cells: columns.iter().map(|column| column[slot]).collect(),
        })
        .collect();

    Grid {
        days,
        rows,
        overlaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::refs::Ref;
    use proptest::prelude::*;

    fn entry(subject: &str, day: &str, start: &str, end: &str) -> TimetableEntry {
        TimetableEntry {
            subject: subject.to_string(),
            hall: Some(Ref::Id("h1".to_string())),
            hall_name: None,
            day_of_week: day.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            lecturer: None,
        }
    }

    fn column<'a>(grid: &Grid<'a>, day: DayOfWeek) -> Vec<Cell<'a>> {
        let index = grid
            .days
            .iter()
            .position(|shown| *shown == day)
            .expect("day shown");
        grid.rows.iter().map(|row| row.cells[index]).collect()
    }

    fn start_at(cells: &[Cell<'_>], slot: usize) -> Option<(String, usize)> {
        match cells[slot] {
            Cell::Start { entry, span } => Some((entry.subject.clone(), span)),
            _ => None,
        }
    }

    #[test]
    fn weekend_days_are_appended_in_first_seen_order() {
        let entries = vec![
            entry("A", "Sunday", "08:00", "09:00"),
            entry("B", "Monday", "08:00", "09:00"),
            entry("C", "Saturday", "08:00", "09:00"),
            entry("D", "Sunday", "10:00", "11:00"),
            entry("E", "Funday", "10:00", "11:00"),
        ];
        assert_eq!(
            display_days(&entries),
            vec![
                DayOfWeek::Monday,
                DayOfWeek::Tuesday,
                DayOfWeek::Wednesday,
                DayOfWeek::Thursday,
                DayOfWeek::Friday,
                DayOfWeek::Sunday,
                DayOfWeek::Saturday,
            ]
        );
    }

    #[test]
    fn entry_spans_from_start_to_end_slot() {
        let entries = vec![entry("Networks", "Monday", "08:00", "10:00")];
        let grid = build_grid(&entries);
        assert_eq!(grid.rows.len(), 21);
        assert_eq!(grid.rows[0].time, "08:00");

        let monday = column(&grid, DayOfWeek::Monday);
        assert_eq!(start_at(&monday, 0), Some(("Networks".to_string(), 4)));
        assert!(monday[1..4].iter().all(|cell| *cell == Cell::Covered));
        assert_eq!(monday[4], Cell::Empty);

        let tuesday = column(&grid, DayOfWeek::Tuesday);
        assert!(tuesday.iter().all(|cell| *cell == Cell::Empty));
    }

    #[test]
    fn inverted_or_off_grid_end_occupies_one_slot() {
        assert_eq!(raw_span(4, Some(2)), 1);
        assert_eq!(raw_span(4, Some(4)), 1);
        assert_eq!(raw_span(4, None), 1);
        assert_eq!(raw_span(4, Some(7)), 3);

        let entries = vec![
            entry("Backwards", "Friday", "10:00", "09:00"),
            entry("Odd end", "Friday", "12:00", "12:45"),
        ];
        let grid = build_grid(&entries);
        let friday = column(&grid, DayOfWeek::Friday);
        assert_eq!(start_at(&friday, 4), Some(("Backwards".to_string(), 1)));
        assert_eq!(start_at(&friday, 8), Some(("Odd end".to_string(), 1)));
        assert_eq!(friday[5], Cell::Empty);
    }

    #[test]
    fn off_grid_start_and_unknown_day_are_skipped() {
        let entries = vec![
            entry("Early", "Monday", "07:30", "09:00"),
            entry("Nowhere", "Someday", "08:00", "09:00"),
        ];
        let grid = build_grid(&entries);
        assert!(grid.overlaps.is_empty());
        assert!(grid
            .rows
            .iter()
            .all(|row| row.cells.iter().all(|cell| *cell == Cell::Empty)));
    }

    #[test]
    fn overlapping_start_is_reported_not_placed() {
        let entries = vec![
            entry("First", "Wednesday", "09:00", "11:00"),
            entry("Clash", "Wednesday", "10:00", "12:00"),
            entry("Same start", "Wednesday", "09:00", "09:30"),
        ];
        let grid = build_grid(&entries);
        let subjects: Vec<_> = grid
            .overlaps
            .iter()
            .map(|entry| entry.subject.as_str())
            .collect();
        assert_eq!(subjects, vec!["Clash", "Same start"]);

        let wednesday = column(&grid, DayOfWeek::Wednesday);
        assert_eq!(start_at(&wednesday, 2), Some(("First".to_string(), 4)));
        assert_eq!(wednesday[6], Cell::Empty);
    }

    #[test]
    fn span_stops_before_a_later_start() {
        let entries = vec![
            entry("Lab", "Thursday", "10:00", "11:00"),
            entry("Long lecture", "Thursday", "08:00", "12:00"),
        ];
        let grid = build_grid(&entries);
        let thursday = column(&grid, DayOfWeek::Thursday);
        assert_eq!(start_at(&thursday, 0), Some(("Long lecture".to_string(), 4)));
        assert_eq!(start_at(&thursday, 4), Some(("Lab".to_string(), 2)));
        assert!(grid.overlaps.is_empty());
    }

    #[test]
    fn span_never_runs_past_the_last_slot() {
        let entries = vec![entry("Evening", "Tuesday", "17:30", "18:00")];
        let grid = build_grid(&entries);
        let tuesday = column(&grid, DayOfWeek::Tuesday);
        assert_eq!(start_at(&tuesday, 19), Some(("Evening".to_string(), 1)));
        assert_eq!(tuesday[20], Cell::Empty);

        let entries = vec![entry("Last", "Tuesday", "18:00", "09:00")];
        let grid = build_grid(&entries);
        assert_eq!(
            start_at(&column(&grid, DayOfWeek::Tuesday), 20),
            Some(("Last".to_string(), 1))
        );
    }

    fn arb_entry() -> impl Strategy<Value = TimetableEntry> {
        let day = prop::sample::select(vec![
            "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday", "Holiday",
        ]);
        let time = prop::sample::select(
            TIME_SLOTS
                .iter()
                .copied()
                .chain(["07:00", "18:30", ""])
                .collect::<Vec<_>>(),
        );
        (day, time.clone(), time).prop_map(|(day, start, end)| entry("S", day, start, end))
    }

    proptest! {
        #[test]
        fn every_column_partitions_the_slots(entries in prop::collection::vec(arb_entry(), 0..24)) {
            let grid = build_grid(&entries);
            prop_assert_eq!(grid.rows.len(), TIME_SLOTS.len());

            for index in 0..grid.days.len() {
                let cells: Vec<_> = grid.rows.iter().map(|row| row.cells[index]).collect();
                let mut covered_left = 0usize;
                let mut total = 0usize;
                for cell in &cells {
                    match cell {
                        Cell::Start { span, .. } => {
                            prop_assert_eq!(covered_left, 0);
                            prop_assert!(*span >= 1);
                            covered_left = span - 1;
                            total += span;
                        }
                        Cell::Covered => {
                            prop_assert!(covered_left > 0);
                            covered_left -= 1;
                        }
                        Cell::Empty => {
                            prop_assert_eq!(covered_left, 0);
                            total += 1;
                        }
                    }
                }
                prop_assert_eq!(covered_left, 0);
                prop_assert_eq!(total, TIME_SLOTS.len());
            }

            let placed: usize = grid
                .rows
                .iter()
                .flat_map(|row| row.cells.iter())
                .filter(|cell| matches!(cell, Cell::Start { .. }))
                .count();
            prop_assert!(placed + grid.overlaps.len() <= entries.len());
        }
    }
}
