//! The `dot` module contains the conversion from an automaton to the graphviz dot format.
//! The functions in this module are used for testing and debugging purposes.

use std::{fs::File, io::Write, path::Path};

use dot_writer::{Attributes, DotWriter, RankDirection};

use crate::{Nfa, Result, EPSILON};

/// Render the automaton to the graphviz dot format.
///
/// The start state is drawn in blue, accepting states in red. Each symbol of a state is drawn as
/// one edge per destination, labeled with the symbol or `ε`.
///
/// Failures of `output` are returned as [`FsmErrorKind::IoError`](crate::FsmErrorKind).
pub fn render_to<W: Write>(nfa: &Nfa, label: &str, output: &mut W) -> Result<()> {
    output.write_all(&render(nfa, label))?;
    Ok(())
}

// dot-writer unwraps every write, so the graph is always rendered into memory first.
fn render(nfa: &Nfa, label: &str) -> Vec<u8> {
    let mut output: Vec<u8> = Vec::new();
    {
        let mut writer = DotWriter::from(&mut output);
        writer.set_pretty_print(true);
        let mut digraph = writer.digraph();
        digraph
            .set_label(label)
            .set_rank_direction(RankDirection::LeftRight);
        for state in nfa.states() {
            let nfa_state = nfa.nfa_state(state);
            let source_id = {
                let mut source_node = digraph.node_auto();
                source_node.set_label(&state.to_string());
                if Some(state) == nfa.start() {
                    source_node
                        .set_shape(dot_writer::Shape::Circle)
                        .set_color(dot_writer::Color::Blue)
                        .set_pen_width(3.0);
                }
                if nfa_state.accepting {
                    source_node
                        .set_shape(dot_writer::Shape::Circle)
                        .set_color(dot_writer::Color::Red)
                        .set_pen_width(3.0);
                }
                source_node.id()
            };
            for (sym, targets) in nfa_state.transitions.iter() {
                let sym_label = if sym == EPSILON {
                    "ε".to_string()
                } else {
                    sym.to_string()
                };
                for target in targets.iter() {
                    digraph
                        .edge(source_id.clone(), &format!("node_{}", target.as_usize()))
                        .attributes()
                        .set_label(&sym_label);
                }
            }
        }
    }
    output
}

/// Render the automaton to the graphviz dot format into the file at `path`.
pub fn render_to_file<P: AsRef<Path>>(nfa: &Nfa, label: &str, path: P) -> Result<()> {
    let mut file = File::create(path)?;
    render_to(nfa, label, &mut file)
}

/// Render the automaton to the graphviz dot format and return the output as string.
pub fn render_to_string(nfa: &Nfa, label: &str) -> String {
    String::from_utf8_lossy(&render(nfa, label)).into_owned()
}
