//! Table registry
//!
//! Fixed set of tables `1..=N`, stored densely (table `k` lives at slot
//! `k - 1`). Each table keeps its own billing totals for the day.

use super::billing::{self, Accrual};
use shared::{ClubTime, TableId, TableSummary};

/// Occupancy and accrual state of one table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableAccount {
    /// Set while the table is busy
    seated_at: Option<ClubTime>,
    work_time: ClubTime,
    payment_units: u32,
}

impl TableAccount {
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.seated_at.is_some()
    }

    /// When the current client sat down, `None` while free
    pub fn seated_at(&self) -> Option<ClubTime> {
        self.seated_at
    }

    pub fn work_time(&self) -> ClubTime {
        self.work_time
    }

    pub fn payment_units(&self) -> u32 {
        self.payment_units
    }
}

/// All tables of the club
///
/// Ids passed in must be in `1..=len()`; they are validated when the input is
/// read. Out-of-range ids panic like slice indexing.
#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: Vec<TableAccount>,
}

impl TableRegistry {
    pub fn new(count: u32) -> Self {
        Self {
            tables: vec![TableAccount::default(); count as usize],
        }
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn get(&self, table: TableId) -> &TableAccount {
        &self.tables[table.index()]
    }

    pub fn is_free(&self, table: TableId) -> bool {
        !self.get(table).is_busy()
    }

    pub fn any_free(&self) -> bool {
        self.tables.iter().any(|t| !t.is_busy())
    }

    /// Mark `table` busy from `at`
    pub fn occupy(&mut self, table: TableId, at: ClubTime) {
        let account = &mut self.tables[table.index()];
        debug_assert!(!account.is_busy(), "table {} is already busy", table);
        account.seated_at = Some(at);
    }

    /// Free `table` at `at` and bill the seat that just ended
    ///
    /// Returns `None` if the table was not busy.
    pub fn vacate(&mut self, table: TableId, at: ClubTime) -> Option<Accrual> {
        let account = &mut self.tables[table.index()];
        let seated_at = account.seated_at.take()?;
        let accrual = billing::charge(seated_at, at);
        account.payment_units = account.payment_units.saturating_add(accrual.units);
        account.work_time += accrual.elapsed;
        Some(accrual)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TableId, &TableAccount)> {
        self.tables
            .iter()
            .enumerate()
            .map(|(i, account)| (TableId::from_index(i), account))
    }

    /// End-of-day lines, ascending by table id
    ///
    /// `u32 * u32` always fits the `u64` revenue.
    pub fn summaries(&self, cost_per_hour: u32) -> Vec<TableSummary> {
        self.iter()
            .map(|(table, account)| TableSummary {
                table,
                revenue: u64::from(account.payment_units) * u64::from(cost_per_hour),
                work_time: account.work_time,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: u32) -> TableId {
        TableId::new(id).unwrap()
    }

    fn at(hour: u32, minute: u32) -> ClubTime {
        ClubTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_new_registry_is_all_free() {
        let tables = TableRegistry::new(3);
        assert_eq!(tables.len(), 3);
        assert!(tables.any_free());
        assert!(tables.iter().all(|(_, t)| !t.is_busy()));
    }

    #[test]
    fn test_no_tables_means_nothing_free() {
        let tables = TableRegistry::new(0);
        assert!(tables.is_empty());
        assert!(!tables.any_free());
        assert!(tables.summaries(10).is_empty());
    }

    #[test]
    fn test_occupy_and_vacate() {
        let mut tables = TableRegistry::new(2);
        tables.occupy(table(2), at(10, 0));
        assert!(!tables.is_free(table(2)));
        assert!(tables.is_free(table(1)));
        assert_eq!(tables.get(table(2)).seated_at(), Some(at(10, 0)));

        let accrual = tables.vacate(table(2), at(11, 1)).unwrap();
        assert_eq!(accrual.units, 2);
        assert!(tables.is_free(table(2)));
        assert_eq!(tables.get(table(2)).seated_at(), None);
    }

    #[test]
    fn test_vacate_free_table_is_noop() {
        let mut tables = TableRegistry::new(1);
        assert_eq!(tables.vacate(table(1), at(12, 0)), None);
        assert_eq!(tables.get(table(1)).payment_units(), 0);
    }

    #[test]
    fn test_accrual_accumulates_across_seats() {
        let mut tables = TableRegistry::new(1);
        tables.occupy(table(1), at(9, 0));
        tables.vacate(table(1), at(9, 30));
        tables.occupy(table(1), at(10, 0));
        tables.vacate(table(1), at(11, 45));

        let account = tables.get(table(1));
        assert_eq!(account.payment_units(), 3);
        assert_eq!(account.work_time(), at(2, 15));
    }

    #[test]
    fn test_summaries_apply_hourly_cost() {
        let mut tables = TableRegistry::new(2);
        tables.occupy(table(1), at(9, 0));
        tables.vacate(table(1), at(10, 30));

        let summaries = tables.summaries(10);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].to_string(), "1 20 01:30");
        assert_eq!(summaries[1].to_string(), "2 0 00:00");
    }
}
