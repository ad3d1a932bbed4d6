//! Producer award intervals.
//!
//! ## Algorithm
//! 1. Group winners by producer: producer -> years won (one year per
//!    credited winning movie, duplicates kept)
//! 2. For each producer with at least two wins, sort the years and emit one
//!    interval per adjacent pair
//! 3. Keep only the intervals equal to the global minimum and to the global
//!    maximum
//! 4. Order each group by interval, then following win, then producer
//!
//! Every step is total: no winners, or no repeat winners, gives empty
//! `min` and `max` lists.

use catalogue::{Movie, Year, collate};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Gap between two consecutive wins of one producer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    /// `following_win - previous_win`, saturating at `i32::MAX`
    pub interval: i32,
    pub previous_win: Year,
    pub following_win: Year,
}

/// The shortest and the longest producer intervals.
///
/// Both lists hold every interval tied for the extreme, so they may overlap
/// when only one interval length exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerIntervals {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

impl ProducerIntervals {
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

/// Compute min/max producer intervals from a set of winning movies
pub fn producer_intervals<'a>(winners: impl IntoIterator<Item = &'a Movie>) -> ProducerIntervals {
    let wins = group_wins_by_producer(winners);
    let intervals = compute_intervals(wins);
    reduce_extremes(intervals)
}

/// Map each producer name to the years they won, in encounter order
pub fn group_wins_by_producer<'a>(
    winners: impl IntoIterator<Item = &'a Movie>,
) -> HashMap<&'a str, Vec<Year>> {
    let mut wins: HashMap<&'a str, Vec<Year>> = HashMap::new();
    for movie in winners {
        for producer in &movie.producers {
            wins.entry(producer.as_str()).or_default().push(movie.year);
        }
    }
    wins
}

/// Intervals between consecutive wins, for every producer with 2+ wins.
///
/// N wins yield N-1 intervals. Output order is unspecified.
pub fn compute_intervals(wins: HashMap<&str, Vec<Year>>) -> Vec<ProducerInterval> {
    wins.into_par_iter()
        .filter(|(_, years)| years.len() >= 2)
        .flat_map_iter(|(producer, mut years)| {
            years.sort_unstable();
            years
                .windows(2)
                .map(|pair| ProducerInterval {
                    producer: producer.to_string(),
                    interval: pair[1].saturating_sub(pair[0]),
                    previous_win: pair[0],
                    following_win: pair[1],
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Keep the intervals tied for the global minimum and maximum
pub fn reduce_extremes(intervals: Vec<ProducerInterval>) -> ProducerIntervals {
    let (Some(min_interval), Some(max_interval)) = (
        intervals.iter().map(|entry| entry.interval).min(),
        intervals.iter().map(|entry| entry.interval).max(),
    ) else {
        return ProducerIntervals::default();
    };

    let mut min: Vec<ProducerInterval> = intervals
        .iter()
        .filter(|entry| entry.interval == min_interval)
        .cloned()
        .collect();
    let mut max: Vec<ProducerInterval> = intervals
        .into_iter()
        .filter(|entry| entry.interval == max_interval)
        .collect();

    sort_interval_entries(&mut min);
    sort_interval_entries(&mut max);

    ProducerIntervals { min, max }
}

/// Order by interval, then following win, then producer name
pub fn sort_interval_entries(entries: &mut [ProducerInterval]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(a: &ProducerInterval, b: &ProducerInterval) -> Ordering {
    a.interval
        .cmp(&b.interval)
        .then_with(|| a.following_win.cmp(&b.following_win))
        .then_with(|| collate(&a.producer, &b.producer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalogue::MovieRecord;

    fn winner(year: Year, producers: &str) -> Movie {
        Movie::from_record(MovieRecord::new(year, format!("Movie {year}"), "Studio", producers, true))
    }

    fn entry(producer: &str, previous_win: Year, following_win: Year) -> ProducerInterval {
        ProducerInterval {
            producer: producer.to_string(),
            interval: following_win - previous_win,
            previous_win,
            following_win,
        }
    }

    #[test]
    fn test_group_splits_co_producers() {
        let winners = vec![winner(1990, "Steven Perry and Joel Silver"), winner(1991, "Joel Silver")];
        let wins = group_wins_by_producer(&winners);

        assert_eq!(wins.len(), 2);
        assert_eq!(wins["Joel Silver"], vec![1990, 1991]);
        assert_eq!(wins["Steven Perry"], vec![1990]);
    }

    #[test]
    fn test_group_keeps_duplicate_years() {
        let winners = vec![winner(2000, "Alice"), winner(2000, "Alice, Bob")];
        let wins = group_wins_by_producer(&winners);
        assert_eq!(wins["Alice"], vec![2000, 2000]);
    }

    #[test]
    fn test_compute_intervals_sorts_years() {
        let mut wins = HashMap::new();
        wins.insert("Bob", vec![2030, 2010, 2015]);
        wins.insert("Single", vec![1999]);

        let mut intervals = compute_intervals(wins);
        sort_interval_entries(&mut intervals);

        assert_eq!(intervals, vec![entry("Bob", 2010, 2015), entry("Bob", 2015, 2030)]);
    }

    #[test]
    fn test_single_win_contributes_nothing() {
        let winners = vec![winner(1980, "Allan Carr"), winner(1981, "Frank Yablans")];
        assert_eq!(producer_intervals(&winners), ProducerIntervals::default());
    }

    #[test]
    fn test_empty_winner_set() {
        let result = producer_intervals(&Vec::<Movie>::new());
        assert!(result.min.is_empty());
        assert!(result.max.is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn test_min_and_max_with_ties() {
        let winners = vec![
            winner(2000, "Alice"),
            winner(2001, "Alice"),
            winner(2010, "Bob"),
            winner(2015, "Bob"),
            winner(2030, "Bob"),
            winner(2020, "Carol"),
            winner(2021, "Carol"),
        ];

        let result = producer_intervals(&winners);

        assert_eq!(result.min, vec![entry("Alice", 2000, 2001), entry("Carol", 2020, 2021)]);
        assert_eq!(result.max, vec![entry("Bob", 2015, 2030)]);
    }

    #[test]
    fn test_single_interval_appears_in_both_lists() {
        let winners = vec![winner(1990, "Joel Silver"), winner(1991, "Joel Silver")];
        let result = producer_intervals(&winners);
        assert_eq!(result.min, result.max);
        assert_eq!(result.min, vec![entry("Joel Silver", 1990, 1991)]);
    }

    #[test]
    fn test_producer_breaks_ties_on_same_following_win() {
        let mut entries = vec![entry("dave", 2000, 2004), entry("Carol", 2000, 2004), entry("Bea", 1999, 2003)];
        sort_interval_entries(&mut entries);
        let names: Vec<&str> = entries.iter().map(|e| e.producer.as_str()).collect();
        assert_eq!(names, vec!["Bea", "Carol", "dave"]);
    }

    #[test]
    fn test_extreme_years_saturate() {
        let winners = vec![winner(Year::MIN, "Ancient Pictures"), winner(Year::MAX, "Ancient Pictures")];
        let result = producer_intervals(&winners);

        assert_eq!(result.max.len(), 1);
        assert_eq!(result.max[0].interval, i32::MAX);
        assert_eq!(result.max[0].previous_win, Year::MIN);
        assert_eq!(result.max[0].following_win, Year::MAX);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(entry("Matthew Vaughn", 2002, 2015)).unwrap();
        assert_eq!(json["producer"], "Matthew Vaughn");
        assert_eq!(json["interval"], 13);
        assert_eq!(json["previousWin"], 2002);
        assert_eq!(json["followingWin"], 2015);
    }
}
