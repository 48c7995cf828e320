//! Human-readable labels for the inquiry type select.

/// Map the form's `tipo_consulta` value to its display label. Unknown
/// non-empty values are echoed back verbatim; an empty value reads as
/// unspecified.
pub fn inquiry_label(tipo_consulta: &str) -> String {
    match tipo_consulta {
        "demo" => "Agendar Demo",
        "consulta" => "Consulta General",
        "partner" => "Programa de Partners",
        "soporte" => "Soporte Técnico",
        "otro" => "Otro",
        "" => "Sin especificar",
        other => other,
    }
    .to_string()
}
