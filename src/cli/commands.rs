use std::sync::Arc;

use pocketbook_config::{Config, ConfigManager};
use pocketbook_core::{Clock, ExpenseStore, TransactionFilter};
use pocketbook_domain::{BudgetRecord, NewSavingsGoal, NewTransaction, PeriodKey, Transaction};

use super::{
    output::{self, format_change, gauge, paint_tag, paint_tier, MoneyFormat},
    Command,
};
use crate::{
    errors::PocketbookError,
    services::{
        BudgetService, Dashboard, DashboardService, SavingsService, TransactionService,
    },
    utils::build_info,
};

/// Services and settings shared by every command.
pub struct CommandContext {
    money_format: MoneyFormat,
    settings: ConfigManager,
    config: Config,
    pub dashboard: DashboardService,
    pub transactions: TransactionService,
    pub budgets: BudgetService,
    pub savings: SavingsService,
    clock: Arc<dyn Clock>,
}

impl CommandContext {
    pub fn new(
        store: Arc<dyn ExpenseStore>,
        clock: Arc<dyn Clock>,
        settings: ConfigManager,
        config: Config,
    ) -> Self {
        Self {
            dashboard: DashboardService::new(store.clone(), clock.clone()),
            transactions: TransactionService::new(store.clone()),
            budgets: BudgetService::new(store.clone()),
            savings: SavingsService::new(store),
            money_format: MoneyFormat::from_config(&config),
            settings,
            config,
            clock,
        }
    }

    fn money(&self, value: f64) -> String {
        self.money_format.format(value)
    }

    fn period_or_current(&self, month: Option<PeriodKey>) -> PeriodKey {
        month.unwrap_or_else(|| self.dashboard.current_period())
    }
}

pub fn dispatch(ctx: &CommandContext, command: Command) -> Result<(), PocketbookError> {
    match command {
        Command::Summary { month, json } => show_summary(ctx, month, json),
        Command::Add {
            kind,
            amount,
            tag,
            date,
            note,
        } => {
            let date = match date {
                Some(raw) => TransactionService::parse_date(&raw)?,
                None => ctx.clock.today(),
            };
            let mut payload = NewTransaction::new(kind.into(), amount, date, tag);
            if let Some(note) = note {
                payload = payload.with_description(note);
            }
            let stored = ctx.transactions.add(payload)?;
            output::success(format!(
                "Added {} of {} ({})",
                stored.kind,
                ctx.money(stored.amount),
                stored.id
            ));
            Ok(())
        }
        Command::List { month, tag, search } => {
            let period = ctx.period_or_current(month);
            let listed = if tag.is_none() && search.is_none() {
                ctx.transactions.list_for_period(&period)?
            } else {
                let filter = TransactionFilter {
                    date_from: period.first_day(),
                    date_to: period.last_day(),
                    tag,
                    search,
                };
                ctx.transactions.search(&filter)?
            };
            output::section(format!("Transactions for {}", period.label()));
            print_transactions(ctx, &listed);
            Ok(())
        }
        Command::Delete { id } => {
            ctx.transactions.delete(&id)?;
            output::success(format!("Deleted transaction {id}"));
            Ok(())
        }
        Command::Budget {
            amount,
            income,
            month,
        } => {
            let period = ctx.period_or_current(month);
            let record = ctx
                .budgets
                .set_month_budget(&period, BudgetRecord::new(amount, income))?;
            output::success(format!(
                "Budget for {} set to {} (income {})",
                period.label(),
                ctx.money(record.target_budget),
                ctx.money(record.total_income)
            ));
            Ok(())
        }
        Command::Goals => show_goals(ctx),
        Command::GoalAdd {
            name,
            target,
            color,
        } => {
            let mut payload = NewSavingsGoal::new(name, target);
            payload.color = color;
            let goal = ctx.savings.create_goal(payload)?;
            output::success(format!(
                "Created goal {} targeting {} ({})",
                goal.name,
                ctx.money(goal.target_amount),
                goal.id
            ));
            Ok(())
        }
        Command::GoalFund { id, amount } => {
            let progress = ctx.savings.allocate(&id, amount)?;
            output::success(format!(
                "{} now at {} of {} ({:.0}%)",
                progress.goal.name,
                ctx.money(progress.goal.current_amount),
                ctx.money(progress.goal.target_amount),
                progress.percent
            ));
            Ok(())
        }
        Command::GoalDelete { id } => {
            ctx.savings.delete_goal(&id)?;
            output::success(format!("Deleted goal {id}"));
            Ok(())
        }
        Command::Config {
            locale,
            currency,
            symbol,
            color,
        } => configure(ctx, locale, currency, symbol, color),
        Command::Version => {
            output::info(build_info::current());
            Ok(())
        }
    }
}

fn configure(
    ctx: &CommandContext,
    locale: Option<String>,
    currency: Option<String>,
    symbol: Option<String>,
    color: Option<bool>,
) -> Result<(), PocketbookError> {
    let mut config = ctx.config.clone();
    let changed = locale.is_some() || currency.is_some() || symbol.is_some() || color.is_some();

    if let Some(locale) = locale {
        config.locale = locale.trim().to_string();
    }
    if let Some(code) = currency {
        config.set_currency(&code);
    }
    if let Some(symbol) = symbol {
        config.currency_symbol = symbol;
    }
    if let Some(enabled) = color {
        config.ui_color_enabled = enabled;
    }

    if changed {
        ctx.settings.save(&config)?;
        output::success(format!(
            "Saved settings to {}",
            ctx.settings.config_path().display()
        ));
    }

    let sample = MoneyFormat::from_config(&config).format(1_234_567.5);
    output::section("Settings");
    output::info(format!("Locale:   {}", config.locale));
    output::info(format!("Currency: {} ({sample})", config.currency));
    output::info(format!("Colour:   {}", config.ui_color_enabled));
    output::info(format!("Storage:  {}", config.storage.backend));
    Ok(())
}

fn show_summary(
    ctx: &CommandContext,
    month: Option<PeriodKey>,
    json: bool,
) -> Result<(), PocketbookError> {
    let dashboard = ctx.dashboard.dashboard(month)?;
    if json {
        let rendered = serde_json::to_string_pretty(&dashboard)?;
        println!("{rendered}");
        return Ok(());
    }
    print_dashboard(ctx, &dashboard);
    Ok(())
}

fn print_dashboard(ctx: &CommandContext, dashboard: &Dashboard) {
    let stats = &dashboard.stats;
    output::section(format!("{} {}", stats.month, stats.year));

    if dashboard.budget.map_or(true, |record| record.is_unset()) {
        output::warning("No budget set; run `budget <amount>` to add one.");
    }

    output::info(format!("Budget:       {}", ctx.money(stats.budget)));
    output::info(format!("Income:       {}", ctx.money(stats.income)));
    output::info(format!("Spent:        {}", ctx.money(stats.expenses)));
    output::info(format!("Balance:      {}", ctx.money(stats.balance)));
    output::info(format!(
        "Avg / day:    {}",
        ctx.money(stats.avg_daily_expense)
    ));
    output::info(format!("Transactions: {}", stats.transaction_count));
    output::info(format!(
        "Progress:     {} {}% {}",
        gauge(dashboard.progress.percent),
        dashboard.progress.percent,
        paint_tier(dashboard.progress.tier)
    ));

    let insights = &dashboard.insights;
    output::info(format!(
        "Savings rate: {:.1}%  Utilization: {:.1}%  Remaining: {}",
        insights.savings_rate,
        insights.budget_utilization,
        ctx.money(insights.budget_remaining)
    ));

    if dashboard.previous.is_some() {
        let change = &dashboard.comparison;
        output::info(format!(
            "vs last month: spent {}  income {}  balance {}",
            format_change(change.expenses),
            format_change(change.income),
            format_change(change.balance)
        ));
    }

    output::section("By category");
    if dashboard.breakdown.is_empty() {
        output::info("No expenses recorded.");
    }
    for slice in &dashboard.breakdown {
        output::info(format!(
            "{:<16} {:>14} {:>4}%",
            paint_tag(slice.tag),
            ctx.money(slice.amount),
            slice.percent
        ));
    }
}

fn print_transactions(ctx: &CommandContext, transactions: &[Transaction]) {
    if transactions.is_empty() {
        output::info("No transactions.");
        return;
    }
    for txn in transactions {
        let sign = if txn.is_expense() { "-" } else { "+" };
        output::info(format!(
            "{}  {} {:>12}  {:<16} {}  [{}]",
            txn.date,
            sign,
            ctx.money(txn.amount),
            paint_tag(txn.tag),
            txn.description.as_deref().unwrap_or(""),
            txn.id
        ));
    }
}

fn show_goals(ctx: &CommandContext) -> Result<(), PocketbookError> {
    let overview = ctx.savings.overview()?;
    output::section("Savings");
    output::info(format!(
        "Available balance: {}",
        ctx.money(overview.available_balance)
    ));
    if overview.goals.is_empty() {
        output::info("No savings goals yet.");
    }
    for progress in &overview.goals {
        output::info(format!(
            "{} {:<20} {} / {} ({:.0}%)  [{}]",
            gauge(progress.percent.round() as u32),
            progress.goal.name,
            ctx.money(progress.goal.current_amount),
            ctx.money(progress.goal.target_amount),
            progress.percent,
            progress.goal.id
        ));
    }
    Ok(())
}
