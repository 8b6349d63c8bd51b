//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use sentimento_core::model::{AnalysisResult, ConfidenceScores, Opinion, Sentence, Sentiment};

/// Width of the confidence bar in cells.
const BAR_WIDTH: usize = 40;

/// Print a full analysis result.
pub fn print_analysis(result: &AnalysisResult) {
    println!("{}", "Sentimento Geral".cyan().bold());
    println!();
    println!("  {}", sentiment_badge(result.overall_sentiment));
    println!("  {}", format!("\"{}\"", result.document_text).italic());
    println!();
    print_confidence(&result.confidence_scores, "  ");

    println!();
    println!("{}", "Análise por Frase".cyan().bold());

    if result.sentences.is_empty() {
        println!("  {}", "Nenhuma frase encontrada.".dimmed());
        return;
    }

    for (i, sentence) in result.sentences.iter().enumerate() {
        println!();
        print_sentence(i + 1, sentence);
    }
}

fn print_sentence(index: usize, sentence: &Sentence) {
    println!(
        "  {}. \"{}\" {}",
        index,
        sentence.text,
        sentiment_badge(sentence.sentiment)
    );
    print_confidence(&sentence.confidence_scores, "     ");

    if !sentence.opinions.is_empty() {
        println!("     {}", "Opiniões Identificadas".bold());
        for opinion in &sentence.opinions {
            print_opinion(opinion);
        }
    }
}

fn print_opinion(opinion: &Opinion) {
    println!(
        "       {} \"{}\" {}",
        "Alvo:".bold(),
        opinion.target.text,
        sentiment_badge(opinion.target.sentiment)
    );

    if !opinion.assessments.is_empty() {
        let chips: Vec<String> = opinion
            .assessments
            .iter()
            .map(|a| {
                colorize(a.sentiment, &format!("\"{}\" ({})", a.text, a.sentiment.label())).to_string()
            })
            .collect();
        println!("       {} {}", "Avaliações:".bold(), chips.join(", "));
    }
}

fn print_confidence(scores: &ConfidenceScores, indent: &str) {
    println!("{}{}", indent, confidence_bar(scores));

    let legend: Vec<String> = legend_entries(scores)
        .into_iter()
        .map(|(sentiment, entry, dominant)| {
            if dominant {
                colorize(sentiment, &entry).bold().to_string()
            } else {
                entry.dimmed().to_string()
            }
        })
        .collect();
    println!("{}{}", indent, legend.join("  "));
}

/// Legend entries in bar order, flagging the highest score.
fn legend_entries(scores: &ConfidenceScores) -> [(Sentiment, String, bool); 3] {
    let dominant = scores.dominant();
    let entry = |sentiment: Sentiment, name: &str, value: f64| {
        (sentiment, format!("{}: {:.1}%", name, value * 100.0), sentiment == dominant)
    };

    [
        entry(Sentiment::Positive, "Positivo", scores.positive),
        entry(Sentiment::Neutral, "Neutro", scores.neutral),
        entry(Sentiment::Negative, "Negativo", scores.negative),
    ]
}

/// Cells per sentiment, proportional to the scores and summing to `BAR_WIDTH`.
fn bar_cells(scores: &ConfidenceScores) -> (usize, usize, usize) {
    let total = scores.total();
    if total <= 0.0 {
        return (0, 0, 0);
    }

    let cells = |v: f64| ((v / total) * BAR_WIDTH as f64).round() as usize;
    let positive = cells(scores.positive).min(BAR_WIDTH);
    let neutral = cells(scores.neutral).min(BAR_WIDTH - positive);
    let negative = BAR_WIDTH - positive - neutral;
    (positive, neutral, negative)
}

fn confidence_bar(scores: &ConfidenceScores) -> String {
    let (positive, neutral, negative) = bar_cells(scores);
    if positive + neutral + negative == 0 {
        return "░".repeat(BAR_WIDTH).dimmed().to_string();
    }

    format!(
        "{}{}{}",
        "█".repeat(positive).green(),
        "█".repeat(neutral).yellow(),
        "█".repeat(negative).red()
    )
}

fn colorize(sentiment: Sentiment, text: &str) -> ColoredString {
    match sentiment {
        Sentiment::Positive => text.green(),
        Sentiment::Neutral => text.yellow(),
        Sentiment::Negative => text.red(),
        Sentiment::Mixed => text.magenta(),
    }
}

fn sentiment_badge(sentiment: Sentiment) -> ColoredString {
    colorize(sentiment, &format!("[{}]", sentiment.label())).bold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_cells_fill_width() {
        let (p, n, neg) = bar_cells(&ConfidenceScores::new(0.47, 0.05, 0.48));
        assert_eq!(p + n + neg, BAR_WIDTH);
        assert!(p > n && neg > n);
    }

    #[test]
    fn test_bar_cells_target_scores() {
        assert_eq!(bar_cells(&ConfidenceScores::new(1.0, 0.0, 0.0)), (BAR_WIDTH, 0, 0));
        assert_eq!(bar_cells(&ConfidenceScores::new(0.0, 0.0, 1.0)), (0, 0, BAR_WIDTH));
    }

    #[test]
    fn test_bar_cells_empty_scores() {
        assert_eq!(bar_cells(&ConfidenceScores::default()), (0, 0, 0));
    }

    #[test]
    fn test_legend_marks_dominant_score() {
        let entries = legend_entries(&ConfidenceScores::new(0.47, 0.05, 0.48));
        assert_eq!(entries[0].1, "Positivo: 47.0%");
        assert_eq!(entries[1].1, "Neutro: 5.0%");
        assert_eq!(entries[2].1, "Negativo: 48.0%");

        let marked: Vec<Sentiment> = entries.iter().filter(|e| e.2).map(|e| e.0).collect();
        assert_eq!(marked, vec![Sentiment::Negative]);
    }

    #[test]
    fn test_legend_tie_prefers_positive() {
        let entries = legend_entries(&ConfidenceScores::new(0.5, 0.0, 0.5));
        assert!(entries[0].2);
        assert!(!entries[2].2);
    }
}
