//! Sums and per-category breakdowns over transaction sets.

use std::collections::BTreeMap;

use pocketbook_domain::{CategorySlice, ExpenseTag, Transaction, TransactionKind};

/// Sums effective amounts of the transactions of `kind`; `0.0` for empty input.
pub fn sum_by_kind<'a, I>(transactions: I, kind: TransactionKind) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|txn| txn.kind == kind)
        .map(Transaction::effective_amount)
        .sum()
}

/// Groups expense transactions by tag.
///
/// Percentages are taken against the total expense of the same input, so a
/// breakdown and its denominator can never drift apart. Slices come out
/// largest first; equal amounts fall back to tag order.
pub fn category_breakdown<'a, I>(transactions: I) -> Vec<CategorySlice>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: BTreeMap<ExpenseTag, f64> = BTreeMap::new();
    for txn in transactions.into_iter().filter(|txn| txn.is_expense()) {
        *totals.entry(txn.tag).or_insert(0.0) += txn.effective_amount();
    }
    let grand_total: f64 = totals.values().sum();

    let mut slices: Vec<CategorySlice> = totals
        .into_iter()
        .map(|(tag, amount)| CategorySlice {
            tag,
            amount,
            percent: share_percent(amount, grand_total),
        })
        .collect();
    slices.sort_by(|a, b| b.amount.total_cmp(&a.amount).then(a.tag.cmp(&b.tag)));
    slices
}

fn share_percent(amount: f64, total: f64) -> u32 {
    if total > 0.0 {
        (amount / total * 100.0).round().clamp(0.0, 100.0) as u32
    } else {
        0
    }
}
