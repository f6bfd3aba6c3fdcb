//! Reporting over ledger entities
//!
//! Entities are exposed as a closed [`Entity`] union; a [`Reporter`] turns each one
//! into whatever representation it needs with a single `match`. The core only
//! offers the ability to be walked, never the rendering itself.

use crate::core::ledger::Ledger;
use crate::core::wallet::Wallet;
use crate::types::{Category, CategoryId, Transaction};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Anything a report can be asked to render
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Wallet(&'a Wallet),
    Transaction(&'a Transaction),
    Category(&'a Category),
}

/// Consumer of entities produced by walking a ledger
pub trait Reporter {
    fn render(&mut self, entity: Entity<'_>);
}

/// Walk every category, then every wallet followed by its transactions
pub fn walk_ledger<R: Reporter + ?Sized>(ledger: &Ledger, reporter: &mut R) {
    for category in ledger.categories() {
        reporter.render(Entity::Category(category));
    }
    for wallet in ledger.wallets() {
        wallet.walk(|entity| reporter.render(entity));
    }
}

/// Plain-text report
///
/// ```text
/// category Food
/// category Groceries (in Food)
/// wallet main [checking] balance 950.00 EUR, 1 transaction(s)
///   2024-03-01 withdraw 50.00 EUR Groceries "weekly shop"
/// ```
#[derive(Debug, Default)]
pub struct TextReport {
    categories: HashMap<CategoryId, String>,
    output: String,
}

impl TextReport {
    /// A report that resolves category names from `ledger`
    pub fn for_ledger(ledger: &Ledger) -> Self {
        TextReport {
            categories: ledger
                .categories()
                .into_iter()
                .map(|c| (c.id(), c.name().to_string()))
                .collect(),
            output: String::new(),
        }
    }

    /// Render the whole ledger and return the text
    pub fn render_ledger(ledger: &Ledger) -> String {
        let mut report = TextReport::for_ledger(ledger);
        walk_ledger(ledger, &mut report);
        report.finish()
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn category_name(&self, id: CategoryId) -> String {
        self.categories
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

impl Reporter for TextReport {
    fn render(&mut self, entity: Entity<'_>) {
        // writing to a String cannot fail
        let _ = match entity {
            Entity::Wallet(wallet) => writeln!(
                self.output,
                "wallet {} [{}] balance {}, {} transaction(s)",
                wallet.name(),
                wallet.wallet_type(),
                wallet.balance(),
                wallet.entries().len()
            ),
            Entity::Transaction(transaction) => {
                let mut line = format!(
                    "  {} {} {}",
                    transaction.date().format("%Y-%m-%d"),
                    transaction.kind(),
                    transaction.amount()
                );
                if let Some(category) = transaction.category() {
                    line.push(' ');
                    line.push_str(&self.category_name(category));
                }
                if let Some(note) = transaction.note() {
                    let _ = write!(line, " \"{}\"", note);
                }
                writeln!(self.output, "{}", line)
            }
            Entity::Category(category) => match category.parent() {
                Some(parent) => {
                    let parent = self.category_name(parent);
                    writeln!(self.output, "category {} (in {})", category.name(), parent)
                }
                None => writeln!(self.output, "category {}", category.name()),
            },
        };
    }
}
