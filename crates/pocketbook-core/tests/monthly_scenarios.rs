use chrono::NaiveDate;
use pocketbook_core::{
    budget_progress, category_breakdown, compare_months, filter_by_period, monthly_insights,
    monthly_stats, period_key, sum_by_kind,
};
use pocketbook_domain::{ExpenseTag, PeriodKey, ProgressTier, Transaction, TransactionKind};

fn march_example() -> Vec<Transaction> {
    vec![
        Transaction::new("t1", TransactionKind::Expense, 500.0, "2024-03-05", ExpenseTag::Food),
        Transaction::new("t2", TransactionKind::Expense, 500.0, "2024-03-10", ExpenseTag::Fuel),
        Transaction::new("t3", TransactionKind::Income, 2000.0, "2024-03-01", ExpenseTag::Others),
    ]
}

/// Deterministic pseudo-random ledger spread over a year.
fn generated_ledger(seed: u64, len: usize) -> Vec<Transaction> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        state >> 33
    };
    (0..len)
        .map(|idx| {
            let kind = if next() % 4 == 0 {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            let amount = (next() % 10_000) as f64 / 4.0;
            let month = (next() % 12) as u32 + 1;
            let day = (next() % 28) as u32 + 1;
            let tag = ExpenseTag::ALL[(next() % 10) as usize];
            Transaction::new(
                format!("transaction_{idx}"),
                kind,
                amount,
                format!("2023-{month:02}-{day:02}"),
                tag,
            )
        })
        .collect()
}

#[test]
fn march_example_end_to_end() {
    let txns = march_example();
    let period: PeriodKey = "2024-03".parse().expect("period");
    let stats = monthly_stats(&txns, &period, 1000.0, 0.0);

    assert_eq!(stats.expenses, 1000.0);
    assert_eq!(stats.income, 2000.0);
    assert_eq!(stats.balance, 1000.0);
    assert_eq!(stats.transaction_count, 3);
    assert!((stats.avg_daily_expense - 1000.0 / 31.0).abs() < 1e-9);

    let in_period = filter_by_period(&txns, &period);
    let breakdown = category_breakdown(in_period.iter().copied());
    assert_eq!(breakdown.len(), 2);
    assert!(breakdown.iter().all(|slice| slice.amount == 500.0 && slice.percent == 50));

    let progress = budget_progress(stats.budget, stats.expenses);
    assert_eq!(progress.tier, ProgressTier::OverBudget);

    let insights = monthly_insights(&stats);
    assert!((insights.savings_rate - 50.0).abs() < 1e-9);
    assert_eq!(insights.budget_remaining, 0.0);

    let february = monthly_stats(&txns, &period.previous(), 1000.0, 0.0);
    let comparison = compare_months(&stats, Some(&february));
    assert_eq!(comparison.expenses, None);
    assert_eq!(comparison.income, None);
}

#[test]
fn kind_sums_partition_the_total() {
    for seed in 1..=20 {
        let txns = generated_ledger(seed, 200);
        let total: f64 = txns.iter().map(|t| t.amount).sum();
        let spent = sum_by_kind(&txns, TransactionKind::Expense);
        let earned = sum_by_kind(&txns, TransactionKind::Income);
        assert!((spent + earned - total).abs() < 1e-6, "seed {seed}");
    }
}

#[test]
fn breakdown_percentages_stay_within_rounding_bound() {
    for seed in 1..=20 {
        let txns = generated_ledger(seed, 150);
        let slices = category_breakdown(&txns);
        if slices.is_empty() {
            continue;
        }
        let total: i64 = slices.iter().map(|s| i64::from(s.percent)).sum();
        let tolerance = slices.len() as i64 - 1;
        assert!((total - 100).abs() <= tolerance, "seed {seed}: {total}");
        assert!(slices.windows(2).all(|pair| pair[0].amount >= pair[1].amount));
    }
}

#[test]
fn monthly_stats_partition_a_year() {
    let txns = generated_ledger(7, 500);
    let mut expenses = 0.0;
    let mut count = 0;
    for month in 1..=12 {
        let period = PeriodKey::new(2023, month).expect("period");
        let stats = monthly_stats(&txns, &period, 0.0, 0.0);
        expenses += stats.expenses;
        count += stats.transaction_count;
    }
    assert_eq!(count, txns.len());
    assert!((expenses - sum_by_kind(&txns, TransactionKind::Expense)).abs() < 1e-6);
}

#[test]
fn empty_months_balance_to_effective_income() {
    for (budget, income) in [(0.0, 0.0), (500.0, 1200.0), (1e6, 3.5)] {
        let stats = monthly_stats(&[], &PeriodKey::new(2030, 7).expect("period"), budget, income);
        assert_eq!(stats.expenses, 0.0);
        assert_eq!(stats.transaction_count, 0);
        assert_eq!(stats.balance, stats.income);
    }
}

#[test]
fn period_key_ignores_day_of_month() {
    for year in [1999, 2000, 2023, 2024] {
        for month in 1..=12u32 {
            let key = PeriodKey::new(year, month).expect("period");
            for day in 1..=key.days_in_month() {
                let date = NaiveDate::from_ymd_opt(year, month, day).expect("date");
                assert_eq!(period_key(date), key);
            }
        }
    }
}
