//! Cash report aggregation.
//!
//! Groups recorded cash transactions into daily, weekly (ISO weeks, Monday
//! start) or monthly buckets for the Reports view. Amounts are integer cents;
//! expenses are recorded as positive amounts and subtracted when netting.

use chrono::{Datelike, NaiveDate, TimeDelta};
use std::collections::BTreeMap;

/// Direction of a cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

/// One recorded cash movement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    /// Positive amount in cents
    pub amount_cents: i64,
    pub kind: TransactionKind,
    pub category: String,
}

impl Transaction {
    pub fn income(date: NaiveDate, amount_cents: i64, category: impl Into<String>) -> Self {
        Self {
            date,
            amount_cents: amount_cents.abs(),
            kind: TransactionKind::Income,
            category: category.into(),
        }
    }

    pub fn expense(date: NaiveDate, amount_cents: i64, category: impl Into<String>) -> Self {
        Self {
            date,
            amount_cents: amount_cents.abs(),
            kind: TransactionKind::Expense,
            category: category.into(),
        }
    }

    /// Parse a `YYYY-MM-DD` date as stored by the ledger
    pub fn parse_date(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
    }

    /// Signed contribution to a net total
    pub fn signed_cents(&self) -> i64 {
        match self.kind {
            TransactionKind::Income => self.amount_cents,
            TransactionKind::Expense => -self.amount_cents,
        }
    }
}

/// Bucket width for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    /// First day of the bucket containing `date`
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            Granularity::Daily => date,
            Granularity::Weekly => {
                let offset = i64::from(date.weekday().num_days_from_monday());
                date - TimeDelta::days(offset)
            }
            Granularity::Monthly => date.with_day(1).unwrap_or(date),
        }
    }
}

/// Totals for one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportBucket {
    pub start: NaiveDate,
    pub income_cents: i64,
    pub expense_cents: i64,
    pub count: usize,
}

impl ReportBucket {
    fn empty(start: NaiveDate) -> Self {
        Self {
            start,
            income_cents: 0,
            expense_cents: 0,
            count: 0,
        }
    }

    fn add(&mut self, tx: &Transaction) {
        match tx.kind {
            TransactionKind::Income => self.income_cents += tx.amount_cents,
            TransactionKind::Expense => self.expense_cents += tx.amount_cents,
        }
        self.count += 1;
    }

    pub fn net_cents(&self) -> i64 {
        self.income_cents - self.expense_cents
    }
}

/// Totals over a whole slice of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportTotals {
    pub income_cents: i64,
    pub expense_cents: i64,
    pub count: usize,
}

impl ReportTotals {
    pub fn net_cents(&self) -> i64 {
        self.income_cents - self.expense_cents
    }
}

/// Group `transactions` into buckets, oldest first. Empty buckets are omitted.
pub fn aggregate(transactions: &[Transaction], granularity: Granularity) -> Vec<ReportBucket> {
    let mut buckets: BTreeMap<NaiveDate, ReportBucket> = BTreeMap::new();
    for tx in transactions {
        let start = granularity.bucket_start(tx.date);
        buckets
            .entry(start)
            .or_insert_with(|| ReportBucket::empty(start))
            .add(tx);
    }
    buckets.into_values().collect()
}

/// Like [`aggregate`], restricted to transactions dated within `from..=to`
pub fn aggregate_range(
    transactions: &[Transaction],
    granularity: Granularity,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<ReportBucket> {
    let selected: Vec<Transaction> = transactions
        .iter()
        .filter(|tx| tx.date >= from && tx.date <= to)
        .cloned()
        .collect();
    aggregate(&selected, granularity)
}

pub fn summarize(transactions: &[Transaction]) -> ReportTotals {
    transactions
        .iter()
        .fold(ReportTotals::default(), |mut totals, tx| {
            match tx.kind {
                TransactionKind::Income => totals.income_cents += tx.amount_cents,
                TransactionKind::Expense => totals.expense_cents += tx.amount_cents,
            }
            totals.count += 1;
            totals
        })
}

/// Net total per category, sorted by category name
pub fn net_by_category(transactions: &[Transaction]) -> Vec<(String, i64)> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    for tx in transactions {
        *totals.entry(tx.category.as_str()).or_insert(0) += tx.signed_cents();
    }
    totals
        .into_iter()
        .map(|(category, net)| (category.to_string(), net))
        .collect()
}
