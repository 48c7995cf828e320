//! Notification email composition.

use serde::Serialize;
use velora_markup_core::Node;

use crate::config::RelayConfig;
use crate::labels::inquiry_label;
use crate::payload::ContactPayload;

/// The message handed to the mail provider, in its wire shape.
#[derive(Clone, Debug, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
}

/// Compose the notification for one submission. Replies go straight to the
/// submitter.
pub fn compose(config: &RelayConfig, payload: &ContactPayload) -> OutboundEmail {
    let label = inquiry_label(&payload.tipo_consulta);
    OutboundEmail {
        from: config.from.clone(),
        to: config.recipients.clone(),
        reply_to: payload.email.clone(),
        subject: format!("Nueva consulta — {label} — {}", payload.nombre),
        html: render_body(payload, &label),
    }
}

fn field_row(label: &str, value: Node) -> Node {
    Node::element("tr")
        .child(
            Node::element("td")
                .attr("style", "padding:12px 0;border-bottom:1px solid #E5E5E5;font-weight:600;width:140px;font-size:14px;")
                .child(Node::text(label)),
        )
        .child(
            Node::element("td")
                .attr("style", "padding:12px 0;border-bottom:1px solid #E5E5E5;font-size:14px;")
                .child(value),
        )
}

fn render_body(payload: &ContactPayload, label: &str) -> String {
    let mut table = Node::element("table")
        .attr("style", "width:100%;border-collapse:collapse;")
        .child(field_row("Nombre", Node::text(&payload.nombre)))
        .child(field_row(
            "Email",
            Node::element("a")
                .attr("href", format!("mailto:{}", payload.email))
                .attr("style", "color:#3D5AFE;")
                .child(Node::text(&payload.email)),
        ));
    // Optional rows are omitted entirely when the field was left blank.
    if !payload.empresa.is_empty() {
        table = table.child(field_row("Empresa", Node::text(&payload.empresa)));
    }
    if !payload.cargo.is_empty() {
        table = table.child(field_row("Cargo", Node::text(&payload.cargo)));
    }
    if !payload.telefono.is_empty() {
        table = table.child(field_row("Teléfono", Node::text(&payload.telefono)));
    }
    table = table.child(field_row("Tipo", Node::text(label)));

    Node::element("div")
        .attr(
            "style",
            "font-family:'Inter',Arial,sans-serif;max-width:600px;margin:0 auto;color:#14162E;",
        )
        .child(
            Node::element("div")
                .attr("style", "background:#14162E;padding:32px;border-radius:12px 12px 0 0;")
                .child(
                    Node::element("h1")
                        .attr("style", "color:#E9EBF8;font-size:20px;font-weight:600;margin:0;")
                        .child(Node::text("Nueva consulta desde el sitio")),
                )
                .child(
                    Node::element("p")
                        .attr("style", "color:rgba(233,235,248,0.6);font-size:14px;margin:8px 0 0;")
                        .child(Node::text(label)),
                ),
        )
        .child(
            Node::element("div")
                .attr("style", "background:#ffffff;padding:32px;border:1px solid #E5E5E5;border-top:none;border-radius:0 0 12px 12px;")
                .child(table)
                .child(
                    Node::element("div")
                        .attr("style", "margin-top:24px;padding:20px;background:#F5F5F7;border-radius:8px;")
                        .child(
                            Node::element("p")
                                .attr("style", "margin:0 0 8px;font-size:12px;font-weight:700;text-transform:uppercase;letter-spacing:0.04em;color:#3D5AFE;")
                                .child(Node::text("Mensaje")),
                        )
                        .child(
                            Node::element("p")
                                .attr("style", "margin:0;font-size:14px;line-height:1.6;white-space:pre-wrap;")
                                .child(Node::text(&payload.mensaje)),
                        ),
                )
                .child(
                    Node::element("p")
                        .attr("style", "margin:24px 0 0;font-size:12px;color:rgba(20,22,46,0.4);")
                        .child(Node::text(format!(
                            "Puedes responder directamente a este email para contactar a {}.",
                            payload.nombre
                        ))),
                ),
        )
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RelayConfig {
        RelayConfig::for_tests("http://localhost/emails")
    }

    fn payload() -> ContactPayload {
        ContactPayload {
            nombre: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            mensaje: "Quiero una demo".to_string(),
            tipo_consulta: "demo".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn subject_includes_label_and_name() {
        let email = compose(&config(), &payload());
        assert_eq!(email.subject, "Nueva consulta — Agendar Demo — Ada Lovelace");
        assert_eq!(email.reply_to, "ada@example.com");
    }

    #[test]
    fn optional_rows_are_omitted_when_blank() {
        let email = compose(&config(), &payload());
        assert!(!email.html.contains("Empresa"));
        assert!(!email.html.contains("Teléfono"));

        let mut full = payload();
        full.empresa = "Babbage & Co".to_string();
        full.telefono = "+56 9 1234 5678".to_string();
        let email = compose(&config(), &full);
        assert!(email.html.contains("Empresa"));
        assert!(email.html.contains("Babbage &amp; Co"));
        assert!(email.html.contains("Teléfono"));
    }

    #[test]
    fn body_escapes_submitted_markup() {
        let mut hostile = payload();
        hostile.mensaje = "<script>alert(1)</script>".to_string();
        let email = compose(&config(), &hostile);
        assert!(!email.html.contains("<script>"));
        assert!(email.html.contains("&lt;script&gt;"));
    }
}
