//! Plain-text drawing of a graph on its grid.

use std::io::{self, Write};

use domgrid_core::{GRID_SIDE, WeightedGraph};

const CELL_WIDTH: usize = 3;

/// Draws the grid with vertex ids in their cells, row 8 at the top, followed
/// by one line per edge. Selected edges are flagged with `*`; weights are
/// rounded to two decimals.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// # use domgrid_cli::cli::render_grid;
/// # use domgrid_core::{Edge, GridPosition, Vertex, VertexId, WeightedGraph};
/// let a = Vertex::new(VertexId::new(1), GridPosition::new(1, 1));
/// let b = Vertex::new(VertexId::new(2), GridPosition::new(4, 5));
/// let graph = WeightedGraph::from_parts(vec![a, b], vec![Edge::between(&a, &b)]);
/// let mut out = Vec::new();
/// render_grid(&graph, &mut out)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.ends_with("    1-2  5.00\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_grid(graph: &WeightedGraph, mut writer: impl Write) -> io::Result<()> {
    let side = usize::from(GRID_SIDE);
    let mut cells = vec![None; side * side];
    for vertex in graph.vertices() {
        let position = vertex.position();
        if position.is_on_grid() {
            let column = usize::from(position.x() - 1);
            let row = usize::from(position.y() - 1);
            cells[row * side + column] = Some(vertex.id());
        }
    }

    for row in (0..side).rev() {
        write!(writer, "{:>2} |", row + 1)?;
        for column in 0..side {
            match cells[row * side + column] {
                Some(id) => write!(writer, "{:>CELL_WIDTH$}", id.get())?,
                None => write!(writer, "{:>CELL_WIDTH$}", ".")?,
            }
        }
        writeln!(writer)?;
    }
    writeln!(writer, "   +{}", "-".repeat(side * CELL_WIDTH))?;
    write!(writer, "    ")?;
    for column in 1..=side {
        write!(writer, "{column:>CELL_WIDTH$}")?;
    }
    writeln!(writer)?;

    writeln!(writer, "edges (* = dominating set):")?;
    for edge in graph.edges() {
        let marker = if edge.is_selected() { '*' } else { ' ' };
        writeln!(
            writer,
            "  {marker} {}-{}  {:.2}",
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use domgrid_core::{Edge, EdgeKey, GridPosition, SearchStats, Solution, Vertex, VertexId};

    use super::*;

    #[test]
    fn draws_vertices_and_marks_selected_edges() {
        let a = Vertex::new(VertexId::new(1), GridPosition::new(1, 8));
        let b = Vertex::new(VertexId::new(2), GridPosition::new(3, 8));
        let c = Vertex::new(VertexId::new(3), GridPosition::new(8, 1));
        let mut graph = WeightedGraph::from_parts(
            vec![a, b, c],
            vec![Edge::between(&a, &b), Edge::between(&b, &c)],
        );
        let chosen = EdgeKey::new(VertexId::new(2), VertexId::new(3));
        graph.mark_selected(&Solution::new(vec![chosen], 0.0, SearchStats::default()));

        let mut out = Vec::new();
        render_grid(&graph, &mut out).expect("writing to a Vec cannot fail");
        let text = String::from_utf8(out).expect("rendering is ASCII");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], " 8 |  1  .  2  .  .  .  .  .");
        assert_eq!(lines[7], " 1 |  .  .  .  .  .  .  .  3");
        assert_eq!(lines[8], "   +------------------------");
        assert_eq!(lines[9], "      1  2  3  4  5  6  7  8");
        assert_eq!(lines[11], "    1-2  2.00");
        assert_eq!(lines[12], "  * 2-3  8.60");
    }
}
