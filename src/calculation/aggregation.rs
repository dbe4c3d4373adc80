//! Aggregation of attendance records for reports and dashboards.
//!
//! Every function here is a pure reduction over slices of employees and
//! records. Callers decide which month or date is of interest; nothing reads
//! the system clock.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, AttendanceStatus, DashboardStats, Employee, EmployeeStats, HoursTotals,
    MonthKey, MonthlyStats, OvertimeLeader,
};

/// Display name for records whose employee no longer exists.
pub const DELETED_EMPLOYEE_NAME: &str = "موظف محذوف";

/// Number of records per page in a [`RecordQuery`] result.
pub const RECORDS_PER_PAGE: usize = 10;

/// Returns the records dated within `month`.
pub fn records_in_month(records: &[AttendanceRecord], month: MonthKey) -> Vec<&AttendanceRecord> {
    records.iter().filter(|r| month.contains(r.date)).collect()
}

fn count_status<'a>(records: impl IntoIterator<Item = &'a AttendanceRecord>, status: AttendanceStatus) -> usize {
    records.into_iter().filter(|r| r.status == status).count()
}

/// Builds one [`MonthlyStats`] row per employee for `month`.
///
/// Employees without records in the month still get a row with zero totals.
/// Friday records count towards the hour sums but not towards present or
/// absent days.
pub fn monthly_summary(
    employees: &[Employee],
    records: &[AttendanceRecord],
    month: MonthKey,
) -> Vec<MonthlyStats> {
    let month_records = records_in_month(records, month);

    employees
        .iter()
        .map(|emp| {
            let emp_records: Vec<&AttendanceRecord> = month_records
                .iter()
                .copied()
                .filter(|r| r.employee_id == emp.id)
                .collect();
            let totals = HoursTotals::of(emp_records.iter().copied());

            MonthlyStats {
                emp_id: emp.id.clone(),
                name: emp.name.clone(),
                department: emp.department.clone(),
                present_days: count_status(emp_records.iter().copied(), AttendanceStatus::Present),
                absent_days: count_status(emp_records.iter().copied(), AttendanceStatus::Absent),
                regular_hours: totals.regular_hours,
                overtime_hours: totals.overtime_hours,
                total_hours: totals.total_hours,
            }
        })
        .collect()
}

/// Like [`monthly_summary`], keeping only employees with at least one
/// present or absent day.
pub fn active_monthly_summary(
    employees: &[Employee],
    records: &[AttendanceRecord],
    month: MonthKey,
) -> Vec<MonthlyStats> {
    monthly_summary(employees, records, month)
        .into_iter()
        .filter(|s| s.present_days > 0 || s.absent_days > 0)
        .collect()
}

/// Computes the dashboard headline figures for `month`.
pub fn dashboard_stats(
    employees: &[Employee],
    records: &[AttendanceRecord],
    month: MonthKey,
) -> DashboardStats {
    let month_records = records_in_month(records, month);
    let totals = HoursTotals::of(month_records.iter().copied());

    DashboardStats {
        total_employees: employees.len(),
        total_regular: totals.regular_hours,
        total_overtime: totals.overtime_hours,
        absent_days: count_status(month_records.iter().copied(), AttendanceStatus::Absent),
        present_days: count_status(month_records.iter().copied(), AttendanceStatus::Present),
    }
}

/// Ranks employees by overtime in `month` and returns the first `n` with
/// overtime above zero.
///
/// Ties keep the employee registration order.
pub fn top_overtime(
    employees: &[Employee],
    records: &[AttendanceRecord],
    month: MonthKey,
    n: usize,
) -> Vec<OvertimeLeader> {
    let month_records = records_in_month(records, month);

    let mut leaders: Vec<OvertimeLeader> = employees
        .iter()
        .map(|emp| OvertimeLeader {
            id: emp.id.clone(),
            name: emp.name.clone(),
            overtime: month_records
                .iter()
                .filter(|r| r.employee_id == emp.id)
                .map(|r| r.overtime_hours)
                .sum(),
        })
        .filter(|leader| leader.overtime > Decimal::ZERO)
        .collect();

    leaders.sort_by(|a, b| b.overtime.cmp(&a.overtime));
    leaders.truncate(n);
    leaders
}

/// Returns the `n` most recently created records, newest first.
pub fn recent_records(records: &[AttendanceRecord], n: usize) -> Vec<AttendanceRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(n);
    sorted
}

/// Returns the records of a single date ordered by checkin time.
///
/// Absent records sort ahead of any clock time.
pub fn daily_records(records: &[AttendanceRecord], date: NaiveDate) -> Vec<AttendanceRecord> {
    let mut daily: Vec<AttendanceRecord> = records.iter().filter(|r| r.date == date).cloned().collect();
    daily.sort_by(|a, b| a.checkin.cmp(&b.checkin));
    daily
}

/// Returns all records with the newest date first.
pub fn records_by_date_desc(records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Computes statistics for one employee, over `month` or over all time when
/// `month` is `None`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::employee_stats;
/// use rust_decimal::Decimal;
///
/// let stats = employee_stats("EMP-001", &[], None);
/// assert_eq!(stats.present_days, 0);
/// assert_eq!(stats.avg_daily_hours, Decimal::ZERO);
/// ```
pub fn employee_stats(
    employee_id: &str,
    records: &[AttendanceRecord],
    month: Option<MonthKey>,
) -> EmployeeStats {
    let mut emp_records: Vec<AttendanceRecord> = records
        .iter()
        .filter(|r| r.employee_id == employee_id)
        .filter(|r| month.is_none_or(|m| m.contains(r.date)))
        .cloned()
        .collect();
    emp_records.sort_by(|a, b| b.date.cmp(&a.date));

    let totals = HoursTotals::of(&emp_records);
    let present_days = count_status(&emp_records, AttendanceStatus::Present);
    let avg_daily_hours = if present_days > 0 {
        totals.total_hours / Decimal::from(present_days)
    } else {
        Decimal::ZERO
    };

    EmployeeStats {
        present_days,
        absent_days: count_status(&emp_records, AttendanceStatus::Absent),
        total_regular: totals.regular_hours,
        total_overtime: totals.overtime_hours,
        avg_daily_hours,
        records: emp_records,
    }
}

/// Returns the employees whose name, department or id contains `term`.
///
/// Name and department match case-insensitively. A blank term matches all.
pub fn search_employees<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    let needle = term.trim().to_lowercase();
    employees
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.name.to_lowercase().contains(&needle)
                || e.department.to_lowercase().contains(&needle)
                || e.id.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Resolves the display name of an employee id.
pub fn employee_name<'a>(employees: &'a [Employee], id: &str) -> &'a str {
    employees
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.name.as_str())
        .unwrap_or(DELETED_EMPLOYEE_NAME)
}

/// Status filter for a [`RecordQuery`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Every status.
    #[default]
    All,
    /// Present records only.
    Present,
    /// Absent records only.
    Absent,
    /// Friday records only.
    Friday,
}

impl StatusFilter {
    fn matches(&self, status: AttendanceStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Present => status == AttendanceStatus::Present,
            StatusFilter::Absent => status == AttendanceStatus::Absent,
            StatusFilter::Friday => status == AttendanceStatus::Friday,
        }
    }
}

/// Column a [`RecordQuery`] sorts by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Record date.
    #[default]
    Date,
    /// Employee display name.
    Employee,
    /// Checkin time.
    Checkin,
    /// Checkout time.
    Checkout,
    /// Total hours.
    TotalHours,
    /// Status.
    Status,
}

/// Sort direction for a [`RecordQuery`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

/// A search, filter, sort and pagination request over records.
///
/// The defaults list every record, newest date first, on page 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordQuery {
    /// Matched against employee name, date and day name.
    pub search: String,
    /// Status to keep.
    pub status: StatusFilter,
    /// Column to sort by.
    pub sort: SortField,
    /// Sort direction.
    pub direction: SortDirection,
    /// 1-based page number; 0 is treated as 1.
    pub page: usize,
}

/// One page of a [`RecordQuery`] result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    /// Records on this page.
    pub records: Vec<AttendanceRecord>,
    /// The page returned.
    pub page: usize,
    /// Number of pages for the filtered set.
    pub total_pages: usize,
    /// Number of records matching the filter.
    pub total_records: usize,
    /// Hour sums over every matching record, not just this page.
    pub totals: HoursTotals,
}

impl RecordQuery {
    /// Returns true if `record` passes the search term and status filter.
    pub fn matches(&self, record: &AttendanceRecord, employees: &[Employee]) -> bool {
        let needle = self.search.to_lowercase();
        let searched = needle.is_empty()
            || employee_name(employees, &record.employee_id)
                .to_lowercase()
                .contains(&needle)
            || record.date.to_string().contains(&self.search)
            || record.day.to_lowercase().contains(&needle);

        searched && self.status.matches(record.status)
    }

    fn compare(&self, a: &AttendanceRecord, b: &AttendanceRecord, employees: &[Employee]) -> Ordering {
        let ordering = match self.sort {
            SortField::Date => a.date.cmp(&b.date),
            SortField::Employee => {
                employee_name(employees, &a.employee_id).cmp(employee_name(employees, &b.employee_id))
            }
            SortField::Checkin => a.checkin.cmp(&b.checkin),
            SortField::Checkout => a.checkout.cmp(&b.checkout),
            SortField::TotalHours => a.total_hours.cmp(&b.total_hours),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Filters, sorts and paginates `records`.
    ///
    /// A page past the end yields an empty record list with the real page
    /// count.
    pub fn run(&self, records: &[AttendanceRecord], employees: &[Employee]) -> RecordPage {
        let mut matching: Vec<&AttendanceRecord> =
            records.iter().filter(|r| self.matches(r, employees)).collect();
        matching.sort_by(|a, b| self.compare(a, b, employees));

        let total_records = matching.len();
        let total_pages = total_records.div_ceil(RECORDS_PER_PAGE);
        let page = self.page.max(1);
        let totals = HoursTotals::of(matching.iter().copied());

        let records = matching
            .into_iter()
            .skip((page - 1) * RECORDS_PER_PAGE)
            .take(RECORDS_PER_PAGE)
            .cloned()
            .collect();

        RecordPage {
            records,
            page,
            total_pages,
            total_records,
            totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClockTime;
    use crate::store::{AttendanceStore, InMemoryStore};
    use chrono::{DateTime, NaiveTime, TimeZone, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn created(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, minute, 0).unwrap()
    }

    fn employee(id: &str, name: &str, department: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            department: department.to_string(),
            created_at: created(0),
        }
    }

    fn clock(value: &str) -> ClockTime {
        if value == "-" {
            ClockTime::Absent
        } else {
            ClockTime::At(NaiveTime::parse_from_str(value, "%H:%M").unwrap())
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn record(
        id: &str,
        employee_id: &str,
        date: &str,
        checkin: &str,
        regular: &str,
        overtime: &str,
        status: AttendanceStatus,
        minute: u32,
    ) -> AttendanceRecord {
        let regular = dec(regular);
        let overtime = dec(overtime);
        let date = make_date(date);
        AttendanceRecord {
            id: id.to_string(),
            date,
            day: crate::calculation::day_name(date).to_string(),
            employee_id: employee_id.to_string(),
            checkin: clock(checkin),
            checkout: clock(if checkin == "-" { "-" } else { "17:00" }),
            total_hours: regular + overtime,
            regular_hours: regular,
            overtime_hours: overtime,
            notes: String::new(),
            is_friday: status == AttendanceStatus::Friday,
            status,
            created_at: created(minute),
        }
    }

    fn fixture() -> (Vec<Employee>, Vec<AttendanceRecord>) {
        let employees = vec![
            employee("EMP-001", "Ahmed", "Admin"),
            employee("EMP-002", "Sara", "Accounting"),
            employee("EMP-003", "Khaled", "Sales"),
        ];
        let records = vec![
            record("r1", "EMP-001", "2025-03-03", "09:00", "8", "2.5", AttendanceStatus::Present, 1),
            record("r2", "EMP-001", "2025-03-04", "08:30", "8", "0", AttendanceStatus::Present, 2),
            record("r3", "EMP-002", "2025-03-03", "-", "0", "0", AttendanceStatus::Absent, 3),
            record("r4", "EMP-002", "2025-03-04", "07:45", "8", "1", AttendanceStatus::Present, 4),
            record("r5", "EMP-001", "2025-03-07", "-", "0", "0", AttendanceStatus::Friday, 5),
            record("r6", "EMP-001", "2025-02-27", "09:00", "6", "0", AttendanceStatus::Present, 0),
            record("r7", "EMP-999", "2025-03-03", "10:00", "7", "0.5", AttendanceStatus::Present, 6),
        ];
        (employees, records)
    }

    fn march() -> MonthKey {
        MonthKey::new(2025, 3).unwrap()
    }

    // ==========================================================================
    // AGG-001: Monthly summary has one row per employee
    // ==========================================================================
    #[test]
    fn test_agg_001_monthly_summary_rows() {
        let (employees, records) = fixture();
        let summary = monthly_summary(&employees, &records, march());

        assert_eq!(summary.len(), 3);
        let ahmed = &summary[0];
        assert_eq!(ahmed.emp_id, "EMP-001");
        assert_eq!(ahmed.present_days, 2);
        assert_eq!(ahmed.absent_days, 0);
        assert_eq!(ahmed.regular_hours, dec("16"));
        assert_eq!(ahmed.overtime_hours, dec("2.5"));
        assert_eq!(ahmed.total_hours, dec("18.5"));

        let sara = &summary[1];
        assert_eq!(sara.present_days, 1);
        assert_eq!(sara.absent_days, 1);
        assert_eq!(sara.total_hours, dec("9"));

        let khaled = &summary[2];
        assert_eq!(khaled.present_days, 0);
        assert_eq!(khaled.total_hours, Decimal::ZERO);
    }

    // ==========================================================================
    // AGG-002: Active summary drops employees without attendance
    // ==========================================================================
    #[test]
    fn test_agg_002_active_summary() {
        let (employees, records) = fixture();
        let summary = active_monthly_summary(&employees, &records, march());

        let ids: Vec<_> = summary.iter().map(|s| s.emp_id.as_str()).collect();
        assert_eq!(ids, vec!["EMP-001", "EMP-002"]);
    }

    // ==========================================================================
    // AGG-003: Dashboard figures include records of deleted employees
    // ==========================================================================
    #[test]
    fn test_agg_003_dashboard_stats() {
        let (employees, records) = fixture();
        let stats = dashboard_stats(&employees, &records, march());

        assert_eq!(stats.total_employees, 3);
        assert_eq!(stats.total_regular, dec("31"));
        assert_eq!(stats.total_overtime, dec("4"));
        assert_eq!(stats.present_days, 4);
        assert_eq!(stats.absent_days, 1);
    }

    // ==========================================================================
    // AGG-004: Top overtime excludes zero and orders descending
    // ==========================================================================
    #[test]
    fn test_agg_004_top_overtime() {
        let (employees, records) = fixture();
        let leaders = top_overtime(&employees, &records, march(), 3);

        assert_eq!(leaders.len(), 2);
        assert_eq!(leaders[0].id, "EMP-001");
        assert_eq!(leaders[0].overtime, dec("2.5"));
        assert_eq!(leaders[1].id, "EMP-002");

        let first = top_overtime(&employees, &records, march(), 1);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].name, "Ahmed");
    }

    #[test]
    fn test_top_overtime_other_month_is_empty() {
        let (employees, records) = fixture();
        let leaders = top_overtime(&employees, &records, MonthKey::new(2025, 2).unwrap(), 3);
        assert!(leaders.is_empty());
    }

    // ==========================================================================
    // AGG-005: Recent records, newest creation first
    // ==========================================================================
    #[test]
    fn test_agg_005_recent_records() {
        let (_, records) = fixture();
        let recent = recent_records(&records, 5);

        let ids: Vec<_> = recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r7", "r5", "r4", "r3", "r2"]);
    }

    // ==========================================================================
    // AGG-006: Daily records sorted by checkin, absences first
    // ==========================================================================
    #[test]
    fn test_agg_006_daily_records() {
        let (_, records) = fixture();
        let daily = daily_records(&records, make_date("2025-03-03"));

        let ids: Vec<_> = daily.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r3", "r1", "r7"]);
    }

    #[test]
    fn test_records_by_date_desc() {
        let (_, records) = fixture();
        let sorted = records_by_date_desc(&records);

        assert_eq!(sorted.first().unwrap().date, make_date("2025-03-07"));
        assert_eq!(sorted.last().unwrap().id, "r6");
    }

    // ==========================================================================
    // AGG-007: Employee statistics for a month and for all time
    // ==========================================================================
    #[test]
    fn test_agg_007_employee_stats() {
        let (_, records) = fixture();

        let month = employee_stats("EMP-001", &records, Some(march()));
        assert_eq!(month.present_days, 2);
        assert_eq!(month.absent_days, 0);
        assert_eq!(month.total_regular, dec("16"));
        assert_eq!(month.total_overtime, dec("2.5"));
        assert_eq!(month.avg_daily_hours, dec("9.25"));
        assert_eq!(month.records.len(), 3);
        assert_eq!(month.records[0].id, "r5");

        let all = employee_stats("EMP-001", &records, None);
        assert_eq!(all.present_days, 3);
        assert_eq!(all.records.len(), 4);
        assert_eq!(all.records.last().unwrap().id, "r6");
    }

    #[test]
    fn test_employee_stats_no_present_days() {
        let (_, records) = fixture();
        let stats = employee_stats("EMP-003", &records, None);
        assert_eq!(stats.avg_daily_hours, Decimal::ZERO);
        assert!(stats.records.is_empty());
    }

    // ==========================================================================
    // AGG-008: Employee search by name, department or id
    // ==========================================================================
    #[test]
    fn test_agg_008_search_employees() {
        let (employees, _) = fixture();

        assert_eq!(search_employees(&employees, "sara").len(), 1);
        assert_eq!(search_employees(&employees, "SALES")[0].id, "EMP-003");
        assert_eq!(search_employees(&employees, "EMP-00").len(), 3);
        assert_eq!(search_employees(&employees, "").len(), 3);
        assert!(search_employees(&employees, "nobody").is_empty());
    }

    #[test]
    fn test_search_employees_id_ignores_case() {
        let store = InMemoryStore::with_demo_employees();

        let found = search_employees(store.employees(), "emp-001");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "EMP-001");
    }

    // ==========================================================================
    // AGG-009: Record query search and status filter
    // ==========================================================================
    #[test]
    fn test_agg_009_query_filters() {
        let (employees, records) = fixture();

        let by_name = RecordQuery {
            search: "AHMED".to_string(),
            ..Default::default()
        };
        assert_eq!(by_name.run(&records, &employees).total_records, 4);

        let by_date = RecordQuery {
            search: "2025-03-04".to_string(),
            ..Default::default()
        };
        assert_eq!(by_date.run(&records, &employees).total_records, 2);

        let by_day = RecordQuery {
            search: "الجمعة".to_string(),
            ..Default::default()
        };
        assert_eq!(by_day.run(&records, &employees).records[0].id, "r5");

        let absent = RecordQuery {
            status: StatusFilter::Absent,
            ..Default::default()
        };
        let page = absent.run(&records, &employees);
        assert_eq!(page.total_records, 1);
        assert_eq!(page.records[0].id, "r3");
    }

    #[test]
    fn test_query_deleted_employee_name() {
        let (employees, records) = fixture();
        let query = RecordQuery {
            search: DELETED_EMPLOYEE_NAME.to_string(),
            ..Default::default()
        };
        let page = query.run(&records, &employees);
        assert_eq!(page.total_records, 1);
        assert_eq!(page.records[0].id, "r7");
        assert_eq!(employee_name(&employees, "EMP-999"), DELETED_EMPLOYEE_NAME);
    }

    // ==========================================================================
    // AGG-010: Record query sorting
    // ==========================================================================
    #[test]
    fn test_agg_010_query_sorting() {
        let (employees, records) = fixture();

        let default = RecordQuery::default().run(&records, &employees);
        assert_eq!(default.records[0].date, make_date("2025-03-07"));

        let by_hours = RecordQuery {
            sort: SortField::TotalHours,
            direction: SortDirection::Desc,
            ..Default::default()
        }
        .run(&records, &employees);
        assert_eq!(by_hours.records[0].id, "r1");

        let by_employee = RecordQuery {
            sort: SortField::Employee,
            direction: SortDirection::Asc,
            ..Default::default()
        }
        .run(&records, &employees);
        assert_eq!(by_employee.records[0].employee_id, "EMP-001");
        assert_eq!(by_employee.records.last().unwrap().id, "r7");

        let by_checkin = RecordQuery {
            sort: SortField::Checkin,
            direction: SortDirection::Asc,
            ..Default::default()
        }
        .run(&records, &employees);
        assert!(by_checkin.records[0].checkin.is_absent());
        assert_eq!(by_checkin.records.last().unwrap().id, "r7");
    }

    // ==========================================================================
    // AGG-011: Record query pagination
    // ==========================================================================
    #[test]
    fn test_agg_011_query_pagination() {
        let employees = vec![employee("EMP-001", "Ahmed", "Admin")];
        let records: Vec<AttendanceRecord> = (1..=23)
            .map(|day| {
                record(
                    &format!("r{day}"),
                    "EMP-001",
                    &format!("2025-03-{day:02}"),
                    "09:00",
                    "8",
                    "0",
                    AttendanceStatus::Present,
                    day,
                )
            })
            .collect();

        let first = RecordQuery::default().run(&records, &employees);
        assert_eq!(first.page, 1);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.records.len(), RECORDS_PER_PAGE);
        assert_eq!(first.totals.regular_hours, dec("184"));

        let last = RecordQuery {
            page: 3,
            ..Default::default()
        }
        .run(&records, &employees);
        assert_eq!(last.records.len(), 3);
        assert_eq!(last.records.last().unwrap().id, "r1");

        let beyond = RecordQuery {
            page: 9,
            ..Default::default()
        }
        .run(&records, &employees);
        assert!(beyond.records.is_empty());
        assert_eq!(beyond.total_pages, 3);
    }

    #[test]
    fn test_query_deserializes_with_defaults() {
        let query: RecordQuery =
            serde_json::from_str(r#"{"sort":"totalHours","direction":"asc"}"#).unwrap();
        assert_eq!(query.sort, SortField::TotalHours);
        assert_eq!(query.direction, SortDirection::Asc);
        assert_eq!(query.status, StatusFilter::All);
        assert_eq!(query.page, 0);
    }
}
