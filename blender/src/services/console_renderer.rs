//! Plain-text renderer for terminal use

use std::fmt::Write;

use shared::{ActionKind, Batch};
use crate::traits::Renderer;
use crate::types::{BlendView, CardOutcome, ComparisonCard, DeltaSign, ResultView};

/// Writes every view to stdout and failures to stderr
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for ConsoleRenderer {
    fn render_batches(&self, batches: &[Batch]) {
        println!("{}", format_batches(batches));
    }

    fn render_result(&self, view: &ResultView) {
        println!("{}", format_result(view));
    }

    fn render_comparison(&self, cards: &[ComparisonCard]) {
        println!("{}", format_comparison(cards));
    }

    fn notify_failure(&self, action: ActionKind, message: &str) {
        eprintln!("❌ {action} failed: {message}");
    }
}

/// Integer with thousands separators, e.g. `160,000`
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

pub fn format_batches(batches: &[Batch]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Inventory ({} batches)", batches.len());
    for (index, b) in batches.iter().enumerate() {
        let _ = writeln!(
            out,
            "  [{index}] {:<24} {:>10} | stock {} kg | expiry {} d | A:{} B:{} S:{} C:{}",
            b.name,
            group_thousands(b.price),
            b.stock,
            b.expiry,
            b.acid,
            b.bitter,
            b.sweet,
            b.caffeine
        );
    }
    out
}

pub fn format_result(view: &ResultView) -> String {
    match view {
        ResultView::Infeasible { status } => format!(
            "✗ No blend satisfies the constraints{}",
            status.as_deref().map(|s| format!(" ({s})")).unwrap_or_default()
        ),
        ResultView::Feasible(blend) => format_blend(blend),
    }
}

fn format_blend(blend: &BlendView) -> String {
    let mut out = String::new();
    let metrics = &blend.metrics;

    let _ = writeln!(out, "✓ Blend found{}", metrics.status.as_deref().map(|s| format!(" ({s})")).unwrap_or_default());
    if let Some(notice) = &blend.relaxation {
        let _ = writeln!(out, "⚠ Solver relaxed constraints {} time(s): {}", notice.retry_count, notice.trace);
    }

    let delta = &blend.price_delta;
    let marker = match delta.sign {
        DeltaSign::Above => "over target",
        DeltaSign::OnTarget => "on target",
        DeltaSign::Below => "under target",
    };
    let _ = writeln!(
        out,
        "Price {} ({}{} {marker}) | score {:.2} | similarity {:.1}% | {} ms",
        group_thousands(metrics.predicted_price),
        if delta.sign == DeltaSign::Above { "+" } else { "" },
        group_thousands(delta.signed()),
        metrics.objective_value,
        metrics.similarity_score,
        metrics.computation_time_ms
    );

    let _ = writeln!(out, "{:<24} {:>7} {:>10} {:>16}", "Batch", "Share", "Weight", "Cost");
    for row in &blend.rows {
        let cost = row
            .cost_contribution
            .map(group_thousands)
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<24} {:>6.1}% {:>7.1} kg {:>16}",
            row.label, row.percentage, row.weight_kg, cost
        );
    }

    let profile: Vec<String> = blend
        .profile
        .iter()
        .map(|p| match p.target {
            Some(target) => format!("{} {:.1}/{:.1}", p.axis.label(), p.predicted, target),
            None => format!("{} {:.1}/-", p.axis.label(), p.predicted),
        })
        .collect();
    let _ = write!(out, "Profile (predicted/target): {}", profile.join(", "));
    out
}

pub fn format_comparison(cards: &[ComparisonCard]) -> String {
    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "== {} ==", card.label);
        match &card.outcome {
            CardOutcome::Failed { message } => {
                let _ = writeln!(out, "✗ Request failed: {message}");
            }
            CardOutcome::Result { view: ResultView::Infeasible { .. } } => {
                let _ = writeln!(out, "✗ Infeasible");
            }
            CardOutcome::Result { view: ResultView::Feasible(blend) } => {
                let retry = blend
                    .relaxation
                    .as_ref()
                    .map(|n| format!(" [retry: {}]", n.retry_count))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "✓ Price {} | score {:.2}{retry}",
                    group_thousands(blend.metrics.predicted_price),
                    blend.metrics.objective_value
                );
                for point in &blend.proportions {
                    let _ = writeln!(out, "  {}: {:.0}%", point.label, point.value);
                }
            }
        }
    }
    out
}
