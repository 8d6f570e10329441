//! Report formatting for terminal output

use crate::models::{format_amount, BudgetLimits};
use crate::services::report::{CategoryAdvice, Insights, Statement};

use super::transaction::TRANSACTION_COLUMNS;

/// Format the insights summary
pub fn format_insights(insights: &Insights, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Total Income: {}{}\n",
        currency,
        format_amount(insights.total_income)
    ));
    output.push_str(&format!(
        "Total Expenses: {}{}\n",
        currency,
        format_amount(insights.total_expenses)
    ));
    output.push_str(&format!(
        "Net Savings: {}{}\n",
        currency,
        format_amount(insights.net_savings)
    ));

    for advice in &insights.advice {
        output.push_str(&format_advice(advice, currency));
        output.push('\n');
    }

    output
}

fn format_advice(advice: &CategoryAdvice, currency: &str) -> String {
    match advice {
        CategoryAdvice::OverBudget {
            category,
            spent,
            budget,
        } => format!(
            "Consider reducing expenses in {}. You've spent {c}{:.2}, which is over your budget of {c}{:.2}.",
            category,
            spent,
            budget,
            c = currency
        ),
        CategoryAdvice::WithinBudget {
            category,
            spent,
            budget,
        } => format!(
            "Good job on managing your {} expenses. You've spent {c}{:.2} out of your budget of {c}{:.2}.",
            category,
            spent,
            budget,
            c = currency
        ),
    }
}

/// Format the upcoming financial statement
pub fn format_statement(statement: &Statement, currency: &str) -> String {
    let mut output = String::new();
    output.push_str("Upcoming Financial Statement:\n");
    output.push_str(TRANSACTION_COLUMNS);
    output.push('\n');

    for txn in &statement.transactions {
        output.push_str(&txn.to_string());
        output.push('\n');
    }

    for rt in &statement.recurring {
        let sign = if rt.is_income() { "+" } else { "-" };
        output.push_str(&format!(
            "Next Month {} (Recurring): {}{}\n",
            rt.category,
            sign,
            format_amount(rt.amount)
        ));
    }

    output.push_str(&format!(
        "Projected Total Income: {}{}\n",
        currency,
        format_amount(statement.projected_income)
    ));
    output.push_str(&format!(
        "Projected Total Expenses: {}{}\n",
        currency,
        format_amount(statement.projected_expenses)
    ));
    output.push_str(&format!(
        "Projected Net Balance: {}{}\n",
        currency,
        format_amount(statement.net_balance())
    ));

    output
}

/// Confirmation line after a limit is set
pub fn format_budget_set(category: &str, limit: f64, currency: &str) -> String {
    format!("Budget set for {}: {}{}", category, currency, format_amount(limit))
}

/// Format configured limits alongside each category's current spend
pub fn format_budget_limits<F>(limits: &BudgetLimits, currency: &str, spend: F) -> String
where
    F: Fn(&str) -> f64,
{
    if limits.is_empty() {
        return "No budget limits set.\n".to_string();
    }

    let mut output = String::from("Budget Limits:\n");
    for (category, limit) in limits.iter() {
        output.push_str(&format!(
            "{}: {c}{} (spent {c}{})\n",
            category,
            format_amount(limit),
            format_amount(spend(category)),
            c = currency
        ));
    }
    output
}
