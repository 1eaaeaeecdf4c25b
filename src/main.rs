use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

use dashboard_stats::{
    compute_maintenance_ratio, filter_breakdown_by_type, normalize_level_for_query,
    BreakdownType, FinancialStats, FormatConfig, LevelFilter, StatsFormatter,
};

#[derive(Parser, Debug)]
#[command(name = "dashboard-stats", version, about = "Print dashboard values derived from a statistics snapshot")]
struct Cli {
    /// Statistics snapshot (JSON as returned by the backend)
    stats: PathBuf,

    /// Format configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Level filter to normalize for the payments query
    #[arg(long, default_value = "all")]
    level: LevelFilter,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FormatConfig::from_file(path)?,
        None => FormatConfig::default(),
    };
    let formatter = StatsFormatter::new(config);

    let content = fs::read_to_string(&cli.stats)
        .with_context(|| format!("Failed to read stats file: {:?}", cli.stats))?;
    let stats = FinancialStats::from_json_str(&content).context("Failed to parse stats JSON")?;

    info!("Loaded snapshot with {} accounts", stats.accounts.len());
    if stats.accounts.is_empty() {
        warn!("Snapshot has no account ledgers");
    }

    let cards = formatter.account_cards(&stats);
    let summary = formatter.revenue_summary(&stats);
    let level_query = normalize_level_for_query(cli.level);

    if cli.json {
        let output = serde_json::json!({
            "accounts": cards,
            "revenue": summary,
            "levelQuery": level_query,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(generated_at) = stats.generated_at {
        println!("Snapshot generated {}", generated_at.format("%Y-%m-%d %H:%M UTC"));
    }

    println!("\nAccounts");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for card in &cards {
        let ledger = &stats.accounts[&card.key];
        println!(
            "{:<18} revenue {:>14}  expenses {:>14}  available {:>14}  ({})",
            card.label,
            card.total_revenue,
            card.expenses,
            card.available_balance,
            compute_maintenance_ratio(ledger.available_balance, ledger.total_revenue),
        );
    }

    println!("\nRevenue");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (name, line) in [("College", &summary.college), ("Departmental", &summary.departmental)] {
        println!(
            "{:<18} {:>14} from {} payments, net {}",
            name, line.gross_display, line.summary.count, line.net_display
        );
    }
    println!("{:<18} {:>14} from {} payments", "Total", summary.total_revenue, summary.total_payments);

    let breakdown = stats.department_breakdown.as_deref();
    for kind in [BreakdownType::College, BreakdownType::Departmental] {
        let entries = filter_breakdown_by_type(breakdown, kind);
        if entries.is_empty() {
            continue;
        }
        println!("\n{} breakdown", kind.as_str());
        for entry in entries {
            println!(
                "  {:<24} {:>14} ({} payments)",
                entry.department().unwrap_or("-"),
                formatter.format_currency(entry.revenue),
                entry.count.unwrap_or(0)
            );
        }
    }

    println!("\nLevel {} → query {}", cli.level, serde_json::to_string(&level_query)?);

    Ok(())
}
