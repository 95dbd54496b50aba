use std::fmt::Write as _;

use crate::feature::ColonyProperties;

const ENCYCLOPEDIA_NAME: &str = "Global Anabaptist<br>Mennonite Encyclopedia Online";

/// Hover tooltip shown over a colony polygon.
pub fn colony_tooltip_html(props: &ColonyProperties) -> String {
    let mut html = colony_heading(props);
    html.push_str("<hr>Click here for more information");
    html
}

/// Click popup with establishment year, area and the encyclopedia link.
pub fn colony_popup_html(props: &ColonyProperties) -> String {
    let mut html = colony_heading(props);
    let _ = write!(
        html,
        "<br>Year established: {}<br>{} hectares<hr>To open the {ENCYCLOPEDIA_NAME}<br>page for this colony, <a target=\"_blank\" rel=\"noopener\" href=\"{}\">click here</a>",
        escape_html(&props.established_text()),
        escape_html(&props.area_text()),
        escape_html(props.article()),
    );
    html
}

fn colony_heading(props: &ColonyProperties) -> String {
    format!(
        "<b>{} Colony, {}</b>",
        escape_html(props.name()),
        escape_html(props.country())
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
