use crate::domain::entities::ArchiveItem;
use chrono::Datelike;
use serde::Serialize;

/// Month bucket of the archive list view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    pub year: i32,
    pub month: u32,
    pub items: Vec<ArchiveItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct GroupedArchive {
    /// Newest month first.
    pub months: Vec<MonthGroup>,
    /// Undated backlog items, after every dated group.
    pub backlog: Vec<ArchiveItem>,
}

/// Pure view transform: buckets an already-ordered item list by
/// calendar month. No sync and no lock evaluation; presentation only.
/// Input order is preserved inside each bucket.
pub fn group_by_month(items: &[ArchiveItem]) -> GroupedArchive {
    let mut grouped = GroupedArchive::default();

    for item in items {
        match item.entry.item_date {
            Some(date) => {
                let naive = date.as_naive();
                let (year, month) = (naive.year(), naive.month());
                match grouped
                    .months
                    .iter_mut()
                    .find(|group| group.year == year && group.month == month)
                {
                    Some(group) => group.items.push(item.clone()),
                    None => grouped.months.push(MonthGroup {
                        year,
                        month,
                        items: vec![item.clone()],
                    }),
                }
            }
            None => grouped.backlog.push(item.clone()),
        }
    }

    grouped
        .months
        .sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
    grouped
}
