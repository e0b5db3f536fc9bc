use std::fmt;

use colored::{Color, ColoredString, Colorize};
use pocketbook_config::Config;
use pocketbook_domain::{ExpenseTag, ProgressTier};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Section,
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
        MessageKind::Success => format!("[✓] {text}").bright_green().to_string(),
        MessageKind::Warning => format!("[!] {text}").bright_yellow().to_string(),
        MessageKind::Info => text,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        MessageKind::Section => println!("\n{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Currency rendering derived from the configured currency and locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormat {
    symbol: String,
    lakh_grouping: bool,
}

impl MoneyFormat {
    pub fn new(symbol: impl Into<String>, lakh_grouping: bool) -> Self {
        Self {
            symbol: symbol.into(),
            lakh_grouping,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.money_symbol(), config.uses_lakh_grouping())
    }

    /// Two decimals with digit grouping; non-finite values print as zero.
    pub fn format(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let sign = if value < 0.0 { "-" } else { "" };
        let fixed = format!("{:.2}", value.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 2);
        for (idx, ch) in whole.chars().enumerate() {
            if idx > 0 && self.separator_before(whole.len() - idx) {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("{sign}{}{grouped}.{cents}", self.symbol)
    }

    /// `remaining` counts the digits from this position to the end.
    fn separator_before(&self, remaining: usize) -> bool {
        if self.lakh_grouping {
            remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)
        } else {
            remaining % 3 == 0
        }
    }
}

/// Signed percentage for month-over-month deltas; `n/a` when undefined.
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(value) => format!("{value:+.1}%"),
        None => "n/a".to_string(),
    }
}

pub fn tag_color(tag: ExpenseTag) -> Color {
    let (r, g, b) = match tag {
        ExpenseTag::Fuel => (0xfb, 0x92, 0x3c),
        ExpenseTag::Snacks => (0xf4, 0x72, 0xb6),
        ExpenseTag::Trip => (0xc0, 0x84, 0xfc),
        ExpenseTag::Travel => (0x38, 0xbd, 0xf8),
        ExpenseTag::Food => (0x34, 0xd3, 0x99),
        ExpenseTag::FoodOrdering => (0xfb, 0xbf, 0x24),
        ExpenseTag::Shopping => (0xfb, 0x71, 0x85),
        ExpenseTag::Bills => (0x94, 0xa3, 0xb8),
        ExpenseTag::Entertainment => (0x81, 0x8c, 0xf8),
        ExpenseTag::Others => (0x9c, 0xa3, 0xaf),
    };
    Color::TrueColor { r, g, b }
}

pub fn paint_tag(tag: ExpenseTag) -> ColoredString {
    tag.as_str().color(tag_color(tag))
}

pub fn paint_tier(tier: ProgressTier) -> ColoredString {
    let label = tier.to_string();
    match tier {
        ProgressTier::OnTrack => label.green(),
        ProgressTier::Warning => label.yellow(),
        ProgressTier::OverBudget => label.red().bold(),
    }
}

/// Ten-cell gauge for a 0..=100 percentage.
pub fn gauge(percent: u32) -> String {
    let filled = (percent.min(100) as usize + 5) / 10;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_grouped_and_signed() {
        let usd = MoneyFormat::new("$", false);
        assert_eq!(usd.format(0.0), "$0.00");
        assert_eq!(usd.format(1000.0), "$1,000.00");
        assert_eq!(usd.format(1234567.891), "$1,234,567.89");
        assert_eq!(usd.format(f64::NAN), "$0.00");
        assert_eq!(MoneyFormat::new("₹", false).format(-250.5), "-₹250.50");
    }

    #[test]
    fn indian_locale_groups_in_lakhs() {
        let mut config = Config::default();
        config.locale = "en-IN".into();
        config.set_currency("INR");
        let inr = MoneyFormat::from_config(&config);
        assert_eq!(inr.format(999.0), "₹999.00");
        assert_eq!(inr.format(1000.0), "₹1,000.00");
        assert_eq!(inr.format(1234567.0), "₹12,34,567.00");
        assert_eq!(inr.format(-100000.0), "-₹1,00,000.00");
    }

    #[test]
    fn changes_render_signed_or_na() {
        assert_eq!(format_change(Some(50.0)), "+50.0%");
        assert_eq!(format_change(Some(-12.5)), "-12.5%");
        assert_eq!(format_change(None), "n/a");
    }

    #[test]
    fn gauge_fills_proportionally() {
        assert_eq!(gauge(0), "[----------]");
        assert_eq!(gauge(75), "[########--]");
        assert_eq!(gauge(100), "[##########]");
    }

    #[test]
    fn every_tag_has_a_color() {
        for tag in ExpenseTag::ALL {
            assert!(matches!(tag_color(tag), Color::TrueColor { .. }));
        }
    }
}
