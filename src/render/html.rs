use super::{RowCommand, TableView};

const BUTTON_STYLE: &str = "background-color: #007bff; color: white; border: none; \
padding: 10px 15px; margin-right: 5px; cursor: pointer; border-radius: 5px;";

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn name_class(view: &TableView) -> &'static str {
    if view.id.as_str() == "big-fish" {
        "big-fish-name"
    } else {
        "animal-name"
    }
}

/// `<tbody>` rows for one table.
pub fn render_rows(view: &TableView) -> String {
    let mut out = String::new();
    let class = name_class(view);
    for row in &view.rows {
        out.push_str("<tr>\n");
        out.push_str(&format!(
            "  <td class=\"{}\">{}</td>\n",
            class,
            escape(&row.name)
        ));
        out.push_str(&format!(
            "  <td><img src=\"{}\" width=\"50\" height=\"50\" alt=\"{}\"></td>\n",
            escape(&row.image),
            escape(&row.name)
        ));
        out.push_str(&format!("  <td>{}</td>\n", escape(&row.location)));
        out.push_str(&format!("  <td>{}</td>\n", escape(&row.size_label)));
        out.push_str("  <td>\n");
        for action in &row.actions {
            let (verb, label, class) = match action.command {
                RowCommand::Edit => ("edit", "Edit", "btn btn-warning btn-sm"),
                RowCommand::Delete => ("delete", "Delete", "btn btn-danger btn-sm"),
            };
            out.push_str(&format!(
                "    <form method=\"post\" action=\"/tables/{}/animals/{}/{}\" style=\"display:inline\">",
                urlencoding::encode(action.table.as_str()),
                urlencoding::encode(&action.name),
                verb
            ));
            if action.command == RowCommand::Edit {
                out.push_str(&edit_fields(row));
            }
            out.push_str(&format!(
                "<button type=\"submit\" class=\"{}\" style=\"{}\">{}</button></form>\n",
                class, BUTTON_STYLE, label
            ));
        }
        out.push_str("  </td>\n</tr>\n");
    }
    out
}

fn edit_fields(row: &super::RenderRow) -> String {
    [
        ("name", row.name.clone()),
        ("location", row.location.clone()),
        ("size", crate::core::format_size(row.size)),
        ("image", row.image.clone()),
    ]
    .iter()
    .map(|(field, value)| {
        format!(
            "<input name=\"{}\" value=\"{}\" size=\"8\">",
            field,
            escape(value)
        )
    })
    .collect()
}

/// One `<section>` with heading, controls and table.
pub fn render_section(view: &TableView) -> String {
    let id = view.id.as_str();
    let path = urlencoding::encode(id);
    let mut out = String::new();
    out.push_str(&format!("<section id=\"{}\">\n", escape(id)));
    out.push_str(&format!("<h2>{}</h2>\n", escape(&view.label)));

    out.push_str(&format!(
        "<form id=\"add-animal-{id}\" method=\"post\" action=\"/tables/{path}/animals\">\n\
         <input name=\"name\" placeholder=\"Name\">\n\
         <input name=\"location\" placeholder=\"Location\">\n\
         <input name=\"size\" placeholder=\"Size ({unit})\">\n\
         <input name=\"image\" placeholder=\"Image URL\">\n\
         <button type=\"submit\" style=\"{style}\">Add Animal</button>\n\
         </form>\n",
        id = escape(id),
        path = path,
        unit = escape(&view.size_unit),
        style = BUTTON_STYLE
    ));

    for (key, label) in [("name", "Name"), ("location", "Location"), ("size", "Size")] {
        out.push_str(&format!(
            "<form id=\"sort-by-{key}-{id}\" method=\"post\" action=\"/tables/{path}/sort/{key}\" style=\"display:inline\">\
             <button type=\"submit\" style=\"{style}\">Sort by {label}</button></form>\n",
            key = key,
            id = escape(id),
            path = path,
            style = BUTTON_STYLE,
            label = label
        ));
    }

    out.push_str(&format!(
        "<table class=\"table\">\n<thead><tr><th>Name</th><th>Image</th><th>Location</th><th>Size</th><th>Actions</th></tr></thead>\n<tbody id=\"{}-tbody\">\n",
        escape(id)
    ));
    out.push_str(&render_rows(view));
    out.push_str("</tbody>\n</table>\n</section>\n");
    out
}

/// Full page with every table and any pending notices.
pub fn render_page(views: &[TableView], notices: &[String]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Animal Tables</title>\n</head>\n<body>\n<h1>Animal Tables</h1>\n",
    );
    for notice in notices {
        out.push_str(&format!(
            "<div class=\"alert\" role=\"alert\">{}</div>\n",
            escape(notice)
        ));
    }
    for view in views {
        out.push_str(&render_section(view));
    }
    out.push_str("</body>\n</html>\n");
    out
}
