use serde::Serialize;
use serde_json::Value;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::ui;

pub mod table;

/// Render a serializable response in a structured format. `Text` has no
/// structured rendering and yields `None`.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<Option<String>> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
        OutputFormat::Raw => Ok(Some(serde_json::to_string(value)?)),
        OutputFormat::Table => render_table(value).map(Some),
    }
}

/// Print a response: the structured rendering, or `text()` in text mode.
/// `--quiet` silences text mode only.
pub fn emit<T, F>(value: &T, flags: &GlobalFlags, text: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    match render(value, flags.output)? {
        Some(rendered) => println!("{rendered}"),
        None if flags.quiet => {}
        None => {
            let message = text();
            if !message.is_empty() {
                println!("{message}");
            }
        }
    }
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            // Responses that wrap a list render the list.
            if let Some(Value::Array(items)) = map.get("markers") {
                return Ok(render_array_table(items));
            }
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, table_options()))
        }
        scalar => Ok(table::render_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            table_options(),
        )),
    }
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    // First-seen key order, so marker columns read x, z, type, label, ...
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    #[derive(Serialize)]
    struct Row {
        x: i64,
        z: i64,
        label: &'static str,
    }

    #[test]
    fn text_has_no_structured_rendering() {
        let value = Example { id: "x", value: 7 };
        assert!(render(&value, OutputFormat::Text).unwrap().is_none());
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).unwrap().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).unwrap().unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_keeps_field_order() {
        let rows = vec![
            Row { x: 1, z: 2, label: "a" },
            Row { x: 3, z: 4, label: "b" },
        ];
        let out = render(&rows, OutputFormat::Table).unwrap().unwrap();
        let header = out.lines().next().unwrap();
        let positions: Vec<usize> = ["x", "z", "label"]
            .iter()
            .map(|h| header.find(h).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_list_table_says_so() {
        let rows: Vec<Row> = Vec::new();
        let out = render(&rows, OutputFormat::Table).unwrap().unwrap();
        assert_eq!(out, "(no rows)");
    }
}
