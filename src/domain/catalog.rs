//! Fixed option catalogs offered by the wizard.

/// Catalog value meaning "the user supplies free text instead".
pub const OTHER: &str = "Otro";

pub const TASK_TYPES: &[&str] = &[
    "Artículo",
    "Reporte técnico",
    "Documento",
    "Revisión",
    "Argumentos",
    "Pruebas de concepto (Proof-of-concepts)",
    "Datos",
    "Ejemplos",
    "Diagrama",
    "Gráfico",
    OTHER,
];

pub const DEPTH_OPTIONS: &[&str] = &[
    "Comprehensive review (Revisión integral)",
    "Overview (Visión general)",
    "Outline (Punteo/Índice/Esquema)",
    "Breakdown (Desglose)",
];

pub const ROLES: &[&str] = &[
    "Experto",
    "Profesor universitario",
    "Ingeniero Senior",
    "Analista de Datos",
    "Consultor de Negocios",
    OTHER,
];

pub const RESOURCE_TYPES: &[&str] = &["Archivo referencias .bib", "Referencias RIS", OTHER];

pub const CITATION_FORMATS: &[&str] = &["APA", "Harvard", "Chicago", "MLA", "IEEE"];

pub const AUDIENCES: &[&str] = &[
    "Expertos en el tema",
    "Investigadores similares (Peers)",
    "Colegas",
    "Público general",
    "Niños",
    "Universitarios",
    OTHER,
];

pub const FORMATS: &[&str] = &[
    "Lista de viñetas",
    "Tabla",
    "Texto plano (Párrafos)",
    "Formato LaTeX",
    "Formato Quarto",
    "Formato Markdown",
];

/// Split a free-form value into a `(choice, other)` pair for an open catalog.
///
/// Values listed in `catalog` are kept as the choice. Anything else is stored
/// as the [`OTHER`] sentinel with the text moved into `other`. Empty input
/// yields an empty choice.
pub fn classify(catalog: &[&'static str], value: &str) -> (String, String) {
    let value = value.trim();
    if value.is_empty() {
        return (String::new(), String::new());
    }
    match lookup(catalog, value) {
        Some(entry) => (entry.to_string(), String::new()),
        None => (OTHER.to_string(), value.to_string()),
    }
}

/// Catalog entry equal to `value` ignoring case. The sentinel never matches.
pub fn lookup(catalog: &[&'static str], value: &str) -> Option<&'static str> {
    let value = value.trim();
    catalog.iter().copied().find(|entry| *entry != OTHER && entry.eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_catalogs_end_with_sentinel() {
        for catalog in [TASK_TYPES, ROLES, RESOURCE_TYPES, AUDIENCES] {
            assert_eq!(catalog.last(), Some(&OTHER));
        }
        assert!(!CITATION_FORMATS.contains(&OTHER));
        assert!(!FORMATS.contains(&OTHER));
    }

    #[test]
    fn classify_keeps_known_values() {
        assert_eq!(classify(ROLES, "Experto"), ("Experto".to_string(), String::new()));
        assert_eq!(classify(ROLES, "experto"), ("Experto".to_string(), String::new()));
    }

    #[test]
    fn classify_moves_unknown_values_to_other() {
        assert_eq!(classify(ROLES, " Chef "), (OTHER.to_string(), "Chef".to_string()));
    }

    #[test]
    fn classify_empty_is_unset() {
        assert_eq!(classify(AUDIENCES, "  "), (String::new(), String::new()));
    }

    #[test]
    fn lookup_ignores_case_and_sentinel() {
        assert_eq!(lookup(CITATION_FORMATS, " ieee "), Some("IEEE"));
        assert_eq!(lookup(FORMATS, "tabla"), Some("Tabla"));
        assert_eq!(lookup(FORMATS, "PowerPoint"), None);
        assert_eq!(lookup(ROLES, "otro"), None);
    }
}
