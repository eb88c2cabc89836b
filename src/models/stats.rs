use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::auth::validate::parse_date;
use crate::models::member::options::{BAPTISM_STATUSES, GENDERS, MARITAL_STATUSES, MINISTRIES};
use crate::models::member::{Member, MemberStatus};

const MONTHS_SHOWN: u32 = 6;

/// One bar of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub count: i64,
    /// Share of the total, 0-100, rounded to whole percent.
    pub percent: i64,
}

/// Dashboard figures derived from the member list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    pub gender: Vec<Bucket>,
    pub marital_status: Vec<Bucket>,
    pub ministry: Vec<Bucket>,
    pub baptism: Vec<Bucket>,
    pub region: Vec<Bucket>,
    pub age_groups: Vec<Bucket>,
    pub monthly_registrations: Vec<Bucket>,
}

impl MemberStats {
    pub fn from_members(members: &[Member], today: NaiveDate) -> Self {
        let total = members.len() as i64;
        let count_status = |s: MemberStatus| members.iter().filter(|m| m.status == s).count() as i64;

        Self {
            total,
            pending: count_status(MemberStatus::Pending),
            approved: count_status(MemberStatus::Approved),
            rejected: count_status(MemberStatus::Rejected),
            gender: fixed_buckets(members, GENDERS, total, |m| &m.gender),
            marital_status: fixed_buckets(members, MARITAL_STATUSES, total, |m| &m.marital_status),
            ministry: fixed_buckets(members, MINISTRIES, total, |m| &m.ministry),
            baptism: fixed_buckets(members, BAPTISM_STATUSES, total, |m| &m.baptism_status),
            region: region_buckets(members, total),
            age_groups: age_buckets(members, today, total),
            monthly_registrations: monthly_buckets(members, today),
        }
    }

    /// Approved share of all registrations, for the summary card.
    pub fn approval_rate(&self) -> i64 {
        percent_of(self.approved, self.total)
    }
}

fn percent_of(count: i64, total: i64) -> i64 {
    if total == 0 {
        0
    } else {
        (count * 100 + total / 2) / total
    }
}

fn bucket(label: &str, count: i64, total: i64) -> Bucket {
    Bucket { label: label.to_string(), count, percent: percent_of(count, total) }
}

/// One bucket per option label, zero counts included.
fn fixed_buckets(members: &[Member], labels: &[&str], total: i64, field: fn(&Member) -> &str) -> Vec<Bucket> {
    labels
        .iter()
        .map(|label| {
            let n = members.iter().filter(|m| field(m) == *label).count() as i64;
            bucket(label, n, total)
        })
        .collect()
}

/// Regions that actually occur, most members first, ties by name.
fn region_buckets(members: &[Member], total: i64) -> Vec<Bucket> {
    let mut counts: Vec<(String, i64)> = Vec::new();
    for m in members {
        let region = if m.region.trim().is_empty() { "Unspecified" } else { m.region.trim() };
        match counts.iter_mut().find(|(r, _)| r == region) {
            Some((_, n)) => *n += 1,
            None => counts.push((region.to_string(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts.into_iter().map(|(r, n)| bucket(&r, n, total)).collect()
}

const AGE_GROUPS: [&str; 6] = ["Under 13", "13-17", "18-35", "36-59", "60+", "Unknown"];

/// Whole years between `dob` and `today`.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(dob)
}

fn age_group(member: &Member, today: NaiveDate) -> &'static str {
    match parse_date(&member.dob).and_then(|d| age_on(d, today)) {
        None => "Unknown",
        Some(0..=12) => "Under 13",
        Some(13..=17) => "13-17",
        Some(18..=35) => "18-35",
        Some(36..=59) => "36-59",
        Some(_) => "60+",
    }
}

fn age_buckets(members: &[Member], today: NaiveDate, total: i64) -> Vec<Bucket> {
    AGE_GROUPS
        .iter()
        .map(|group| {
            let n = members.iter().filter(|m| age_group(m, today) == *group).count() as i64;
            bucket(group, n, total)
        })
        .collect()
}

/// Registrations per calendar month for the last few months, oldest first.
/// Percent is relative to the busiest month so the bars scale to the chart.
fn monthly_buckets(members: &[Member], today: NaiveDate) -> Vec<Bucket> {
    let mut months: Vec<(i32, u32)> = (0..MONTHS_SHOWN)
        .map(|back| {
            let idx = today.year() * 12 + today.month0() as i32 - back as i32;
            (idx.div_euclid(12), idx.rem_euclid(12) as u32 + 1)
        })
        .collect();
    months.reverse();

    let counts: Vec<i64> = months
        .iter()
        .map(|(y, mo)| {
            let prefix = format!("{y:04}-{mo:02}");
            members.iter().filter(|m| m.created_at.starts_with(&prefix)).count() as i64
        })
        .collect();
    let max = counts.iter().copied().max().unwrap_or(0);

    months
        .iter()
        .zip(counts)
        .map(|((y, mo), n)| {
            let label = NaiveDate::from_ymd_opt(*y, *mo, 1)
                .map(|d| d.format("%b %Y").to_string())
                .unwrap_or_else(|| format!("{y:04}-{mo:02}"));
            Bucket { label, count: n, percent: percent_of(n, max) }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn percent_rounds_and_handles_zero_total() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(5, 0), 0);
    }

    #[test]
    fn age_counts_whole_years() {
        assert_eq!(age_on(date(2000, 10, 17), date(2026, 10, 16)), Some(25));
        assert_eq!(age_on(date(2000, 10, 16), date(2026, 10, 16)), Some(26));
        assert_eq!(age_on(date(2030, 1, 1), date(2026, 10, 16)), None);
    }

    #[test]
    fn empty_member_list() {
        let stats = MemberStats::from_members(&[], date(2026, 10, 16));
        assert_eq!(stats.total, 0);
        assert_eq!(stats.approval_rate(), 0);
        assert!(stats.region.is_empty());
        assert_eq!(stats.gender.len(), GENDERS.len());
        assert_eq!(stats.monthly_registrations.len(), MONTHS_SHOWN as usize);
        assert_eq!(stats.monthly_registrations[0].label, "May 2026");
        assert_eq!(stats.monthly_registrations[5].label, "Oct 2026");
    }

    #[test]
    fn month_window_crosses_year_boundary() {
        let stats = MemberStats::from_members(&[], date(2027, 2, 3));
        let labels: Vec<&str> = stats.monthly_registrations.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Sep 2026", "Oct 2026", "Nov 2026", "Dec 2026", "Jan 2027", "Feb 2027"]);
    }
}
