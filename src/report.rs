// Result summaries: per-fuente distribution chart

use crate::models::Lead;
use colored::Colorize;
use std::collections::BTreeMap;

/// Shown in place of the chart when the result set is empty.
pub const NO_DATA_MESSAGE: &str = "No hay datos para graficar con los filtros actuales.";

const BAR_WIDTH: usize = 40;

/// Lead counts grouped by fuente, sorted by label.
pub fn count_by_fuente(leads: &[Lead]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for lead in leads {
        *counts.entry(lead.fuente.clone()).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Horizontal bar chart of leads per fuente, one line per label.
pub fn render_chart(leads: &[Lead]) -> String {
    let counts = count_by_fuente(leads);
    if counts.is_empty() {
        return NO_DATA_MESSAGE.to_string();
    }

    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(1);
    let label_width = counts.iter().map(|(f, _)| f.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Distribución de leads por fuente".bold()));
    for (fuente, count) in &counts {
        let bar_len = (count * BAR_WIDTH).div_ceil(max);
        let padding = label_width - fuente.chars().count();
        out.push_str(&format!(
            "{}{}  {} {}\n",
            fuente,
            " ".repeat(padding),
            "█".repeat(bar_len).cyan(),
            count
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(fuente: &str) -> Lead {
        Lead {
            id: 0,
            created_at: String::new(),
            tema: String::new(),
            nombre: String::new(),
            apellido: String::new(),
            puesto: String::new(),
            tel_trabajo: String::new(),
            tel_movil: String::new(),
            email: String::new(),
            compania: String::new(),
            web: String::new(),
            calle1: String::new(),
            calle2: String::new(),
            calle3: String::new(),
            ciudad: String::new(),
            estado: String::new(),
            pais: String::new(),
            notas: String::new(),
            fuente: fuente.to_string(),
        }
    }

    #[test]
    fn test_counts_grouped_and_sorted_by_label() {
        let leads = vec![lead("Web"), lead("Evento"), lead("Web"), lead("Llamada")];
        let counts = count_by_fuente(&leads);

        assert_eq!(counts, vec![
            ("Evento".to_string(), 1),
            ("Llamada".to_string(), 1),
            ("Web".to_string(), 2),
        ]);
    }

    #[test]
    fn test_empty_result_renders_message() {
        assert_eq!(render_chart(&[]), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_chart_has_one_line_per_fuente() {
        let leads = vec![lead("Web"), lead("Evento"), lead("Web")];
        let chart = render_chart(&leads);

        // Title plus two fuente lines.
        assert_eq!(chart.lines().count(), 3);
        assert!(chart.contains("Evento"));
        assert!(chart.contains('2'));
    }
}
