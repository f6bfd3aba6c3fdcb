//! Benchmark suite for the ledger and its command history
//!
//! Scripts are generated in memory so the benchmarks do not depend on fixture
//! files.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! Each generated script opens a handful of wallets and then cycles through
//! deposits, withdrawals, transfers and occasional undo/redo rows.

use rust_decimal::Decimal;
use rust_wallet_ledger::command::{AddTransactionCommand, CommandInvoker, CreateWalletCommand};
use rust_wallet_ledger::core::Ledger;
use rust_wallet_ledger::io::ScriptReader;
use rust_wallet_ledger::runner::ScriptRunner;
use rust_wallet_ledger::types::{Money, Transaction, TransactionKind, WalletType};
use std::fmt::Write;

fn main() {
    divan::main();
}

const WALLETS: usize = 8;

fn script(rows: usize) -> String {
    let mut script = String::from("op,wallet,counterparty,amount,currency,kind,category,note,ref\n");
    for w in 0..WALLETS {
        let _ = writeln!(script, "open,w{},,1000.00,EUR,checking,,,", w);
    }
    for i in 0..rows {
        let wallet = i % WALLETS;
        let other = (i + 1) % WALLETS;
        let amount = (i % 97) + 1;
        let _ = match i % 10 {
            0..=3 => writeln!(script, "deposit,w{},,{}.25,,,,,", wallet, amount),
            4..=6 => writeln!(script, "withdraw,w{},,{}.10,,,,,", wallet, amount),
            7 | 8 => writeln!(script, "transfer,w{},w{},{},,,,,", wallet, other, amount),
            _ if i % 20 == 9 => writeln!(script, "undo,,,,,,,,"),
            _ => writeln!(script, "redo,,,,,,,,"),
        };
    }
    script
}

/// Run a generated script end to end, parsing included
#[divan::bench(args = [100, 1_000, 10_000])]
fn run_script(bencher: divan::Bencher, rows: usize) {
    let script = script(rows);
    let runner = ScriptRunner::default();

    bencher.bench_local(|| {
        let session = runner.run(ScriptReader::from_reader(script.as_bytes()));
        divan::black_box(session.ledger().wallets().len())
    });
}

/// Execute deposits, then undo and redo all of them
#[divan::bench(args = [100, 1_000])]
fn undo_redo_history(bencher: divan::Bencher, commands: usize) {
    bencher.bench_local(|| {
        let mut ledger = Ledger::new();
        let mut invoker = CommandInvoker::new();
        let create = CreateWalletCommand::new(
            ledger.factory(),
            "main",
            WalletType::CreditCard,
            Money::of(Decimal::ZERO, "EUR").unwrap(),
        );
        let wallet = create.wallet_id();
        invoker.execute(&mut ledger, create).unwrap();

        for i in 0..commands {
            let deposit = Transaction::builder()
                .amount(Money::of(Decimal::new(i as i64 + 1, 2), "EUR").unwrap())
                .kind(TransactionKind::Deposit)
                .build()
                .unwrap();
            let command = AddTransactionCommand::new(wallet, Some(deposit)).unwrap();
            invoker.execute(&mut ledger, command).unwrap();
        }
        while invoker.undo(&mut ledger).unwrap() {}
        while invoker.redo(&mut ledger).unwrap() {}

        divan::black_box(invoker.undo_len())
    });
}
