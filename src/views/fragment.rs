use tracing::error;

use crate::models::{DisplayArtifact, StyleHint, FETCH_ERROR_PREFIX};
use crate::services::chart_renderer;
use crate::views::escape_html;

fn message_div(text: &str, style: StyleHint) -> String {
    let class = match style {
        StyleHint::Neutral => "message message-neutral",
        StyleHint::Error => "message message-error",
    };
    format!(r#"<div class="{}">{}</div>"#, class, escape_html(text))
}

/// HTML for the output container.
pub fn render_artifact(artifact: &DisplayArtifact) -> String {
    match artifact {
        DisplayArtifact::Message { text, style } => message_div(text, *style),
        DisplayArtifact::Chart(chart) => match chart_renderer::render_svg(chart) {
            Ok(svg) => format!(r#"<div class="chart" id="stock-price-graph">{}</div>"#, svg),
            Err(e) => {
                error!("Failed to render chart '{}': {}", chart.title, e);
                message_div(&format!("{}{}", FETCH_ERROR_PREFIX, e), StyleHint::Error)
            }
        },
    }
}
