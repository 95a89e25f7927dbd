use std::error::Error;
use std::fs;
use std::io::Write;

use log::info;
use tempfile::NamedTempFile;

use llslr::Automaton;

use crate::parse;

pub fn write_graphviz_graph(
    input_filename: &str,
    output_filename: &str,
) -> Result<(), Box<dyn Error>> {
    let graphviz_string = graph_from_file(input_filename)?;
    fs::write(output_filename, graphviz_string)?;
    Ok(())
}

pub fn show_graphviz_graph(input_filename: &str) -> Result<(), Box<dyn Error>> {
    let graphviz_string = graph_from_file(input_filename)?;
    // Opening the graph with an associated application needs the .dot extension
    let mut temp_file = NamedTempFile::new()?;
    let path = temp_file.path().with_extension("dot");
    write!(temp_file, "{}", graphviz_string)?;
    temp_file.persist(&path)?;
    info!("Wrote graph to {}", path.display());
    open::that(&path)?;
    Ok(())
}

fn graph_from_file(input_filename: &str) -> Result<String, Box<dyn Error>> {
    let grammar = parse::load_grammar(input_filename)?;
    Ok(render_graphviz_graph(&Automaton::build(&grammar)))
}

/// Render the LR(0) automaton, one HTML table per state listing its item closure
pub fn render_graphviz_graph(automaton: &Automaton) -> String {
    let grammar = automaton.grammar();
    let mut lines = Vec::new();
    lines.push("digraph lr0_states {".to_owned());
    for (state_idx, state) in automaton.states().iter().enumerate() {
        let table_rows: Vec<String> = state
            .items()
            .map(|item| {
                let mut item_string = escape_html(&item.display(grammar).to_string());
                if item.is_pos_at_end(grammar) {
                    // Underline complete items
                    item_string = format!("<U>{}</U>", item_string);
                }
                format!("      <TR><TD>{}</TD></TR>", item_string)
            })
            .collect();
        let table_row_string = table_rows.join("\n");
        let table_head = format!("      <TR><TD><B>State #{}</B></TD></TR>", state_idx);
        let line = format!(
            r#"  State{} [shape=plain label=<
    <TABLE BORDER="0" CELLBORDER="1" CELLSPACING="0">
{}
{}
    </TABLE>
  >];"#,
            state_idx, table_head, table_row_string
        );
        lines.push(line);
    }
    for (state_idx, symbol, other_state_idx) in automaton.transitions() {
        lines.push(format!(
            r#"  State{} -> State{} [label="{}"];"#,
            state_idx,
            other_state_idx,
            escape_label(&symbol.to_string())
        ))
    }
    lines.push("}".to_owned());
    lines.join("\n")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_label(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render_graph() {
        let grammar = llslr::parse_grammar("1\nS -> aSb e\n").unwrap();
        let automaton = Automaton::build(&grammar);
        let graph = render_graphviz_graph(&automaton);

        assert!(graph.starts_with("digraph lr0_states {"));
        assert!(graph.ends_with('}'));
        for idx in 0..automaton.states().len() {
            assert!(graph.contains(&format!("State{} [shape=plain", idx)));
        }
        assert_eq!(
            graph.matches(" -> State").count(),
            automaton.transitions().count()
        );
        assert!(graph.contains(r#"[label="a"]"#));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_html("S → a • <b>"), "S → a • &lt;b&gt;");
        assert_eq!(escape_label("\""), "\\\"");
    }
}
