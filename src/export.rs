// CSV export of a filtered result set

use crate::models::Lead;

/// Default export filename.
pub const EXPORT_FILENAME: &str = "leads_export.csv";

/// Human-readable column labels, in export order. The internal id is
/// not exported.
pub const CSV_LABELS: [&str; 18] = [
    "Fecha/Hora",
    "Tema",
    "Nombre",
    "Apellido",
    "Puesto",
    "Teléfono del trabajo",
    "Teléfono móvil",
    "Correo electrónico",
    "Compañía",
    "Sitio web",
    "Calle 1",
    "Calle 2",
    "Calle 3",
    "Ciudad",
    "Estado/Provincia",
    "País",
    "Notas",
    "Fuente del lead",
];

/// Render leads as UTF-8 CSV: one header row of labels, then one row
/// per lead in the given order. A pure projection; no record is added
/// or dropped.
pub fn render_csv(leads: &[Lead]) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_LABELS);

    for lead in leads {
        push_row(&mut out, [
            lead.created_at.as_str(),
            lead.tema.as_str(),
            lead.nombre.as_str(),
            lead.apellido.as_str(),
            lead.puesto.as_str(),
            lead.tel_trabajo.as_str(),
            lead.tel_movil.as_str(),
            lead.email.as_str(),
            lead.compania.as_str(),
            lead.web.as_str(),
            lead.calle1.as_str(),
            lead.calle2.as_str(),
            lead.calle3.as_str(),
            lead.ciudad.as_str(),
            lead.estado.as_str(),
            lead.pais.as_str(),
            lead.notas.as_str(),
            lead.fuente.as_str(),
        ]);
    }

    out
}

fn push_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        push_field(out, field);
    }
    out.push('\n');
}

/// Quote a field when it contains a delimiter, quote, or line break;
/// embedded quotes are doubled.
fn push_field(out: &mut String, field: &str) {
    if field.contains(['"', ',', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64, compania: &str, notas: &str) -> Lead {
        Lead {
            id,
            created_at: "2024-01-05 10:00:00".to_string(),
            tema: "Tema".to_string(),
            nombre: "Ana".to_string(),
            apellido: "García".to_string(),
            puesto: String::new(),
            tel_trabajo: String::new(),
            tel_movil: String::new(),
            email: String::new(),
            compania: compania.to_string(),
            web: String::new(),
            calle1: String::new(),
            calle2: String::new(),
            calle3: String::new(),
            ciudad: String::new(),
            estado: String::new(),
            pais: String::new(),
            notas: notas.to_string(),
            fuente: "Web".to_string(),
        }
    }

    #[test]
    fn test_empty_result_is_header_only() {
        let csv = render_csv(&[]);
        assert_eq!(csv, format!("{}\n", CSV_LABELS.join(",")));
    }

    #[test]
    fn test_one_row_per_lead_without_id() {
        let leads = vec![sample(2, "Miranza", ""), sample(1, "Other", "")];
        let csv = render_csv(&leads);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        // Row order matches the input, id column absent.
        assert!(lines[1].starts_with("2024-01-05 10:00:00,Tema,Ana,García"));
        assert!(lines[1].contains("Miranza"));
        assert!(lines[2].contains("Other"));
        assert!(!lines[1].starts_with("2,"));
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let leads = vec![sample(1, "Acme, S.L.", "dijo \"mañana\"\nvolver a llamar")];
        let csv = render_csv(&leads);

        assert!(csv.contains("\"Acme, S.L.\""));
        assert!(csv.contains("\"dijo \"\"mañana\"\"\nvolver a llamar\""));
    }

    #[test]
    fn test_label_count_matches_exported_fields() {
        let csv = render_csv(&[sample(1, "Miranza", "")]);
        let lines: Vec<&str> = csv.lines().collect();
        // No label or sample field contains a comma, so a plain split
        // counts columns.
        assert_eq!(lines[0].split(',').count(), CSV_LABELS.len());
        assert_eq!(lines[1].split(',').count(), CSV_LABELS.len());
    }
}
